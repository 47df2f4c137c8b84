use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Quat, Vec3};

/// Index of a bone inside its [`Skeleton`](super::Skeleton).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoneId(pub(crate) usize);

impl BoneId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// How a bone attaches to the rest of the skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoneConfig {
    pub parent: Option<BoneId>,
    /// When false the parent's rotation is cancelled, so `rotation` is the
    /// bone's absolute orientation. Position still follows the parent.
    pub inherit_rotation: bool,
}

impl Default for BoneConfig {
    fn default() -> Self {
        Self::ROOT
    }
}

impl BoneConfig {
    pub const ROOT: Self = Self {
        parent: None,
        inherit_rotation: true,
    };

    pub fn child_of(parent: BoneId) -> Self {
        Self {
            parent: Some(parent),
            inherit_rotation: true,
        }
    }

    pub fn with_inherit_rotation(mut self, inherit: bool) -> Self {
        self.inherit_rotation = inherit;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Bone {
    pub name: String,
    /// Rest-pose offset from the parent, in the parent's local frame.
    pub position: Vec3,
    pub rotation: Quat,
    pub(crate) config: BoneConfig,
    pub(crate) matrix: Mat4,
    pub(crate) inverse: Mat4,
}

impl Bone {
    pub(crate) fn new(name: String, position: Vec3, rotation: Quat, config: BoneConfig) -> Self {
        Self {
            name,
            position,
            rotation,
            config,
            matrix: Mat4::IDENTITY,
            inverse: Mat4::IDENTITY,
        }
    }

    pub fn parent(&self) -> Option<BoneId> {
        self.config.parent
    }

    pub fn config(&self) -> BoneConfig {
        self.config
    }

    /// Local to world transform, valid after the last `compute`.
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// World to local transform, valid after the last `compute`.
    pub fn inverse(&self) -> Mat4 {
        self.inverse
    }

    pub fn world_position(&self) -> Vec3 {
        self.matrix.w_axis.truncate()
    }

    /// Rebuilds both matrices from `position`, `rotation` and the parent's
    /// already computed matrices.
    ///
    /// The inverse is assembled directly and the forward matrix is derived
    /// from it, since the field evaluation consumes inverses.
    pub(crate) fn compute(&mut self, parent: Option<(&Mat4, &Mat4)>) {
        let mut inverse = Mat4::from_quat(self.rotation.inverse());

        if let Some((parent_matrix, _)) = parent {
            if !self.config.inherit_rotation {
                inverse *= Mat4::from_mat3(Mat3::from_mat4(*parent_matrix));
            }
        }

        inverse *= Mat4::from_translation(-self.position);

        if let Some((_, parent_inverse)) = parent {
            inverse *= *parent_inverse;
        }

        self.inverse = inverse;
        self.matrix = inverse.inverse();
    }
}

/// GPU-friendly pair of matrices for one bone.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BoneMatrices {
    pub matrix: [[f32; 4]; 4],
    pub inverse: [[f32; 4]; 4],
}

impl BoneMatrices {
    pub fn from_bone(bone: &Bone) -> Self {
        Self {
            matrix: bone.matrix.to_cols_array_2d(),
            inverse: bone.inverse.to_cols_array_2d(),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.matrix)
    }

    pub fn inverse(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.inverse)
    }
}

impl Default for BoneMatrices {
    fn default() -> Self {
        Self {
            matrix: Mat4::IDENTITY.to_cols_array_2d(),
            inverse: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}
