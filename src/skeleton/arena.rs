use super::bone::{Bone, BoneConfig, BoneId, BoneMatrices};
use super::error::SkeletonError;
use glam::{Quat, Vec3};
use std::collections::HashMap;

/// Declarative bone entry, resolved by name in any order.
#[derive(Debug, Clone, Copy)]
pub struct BoneDescriptor<'a> {
    pub name: &'a str,
    pub parent: Option<&'a str>,
    pub position: Vec3,
    pub rotation: Quat,
    pub inherit_rotation: bool,
}

impl<'a> BoneDescriptor<'a> {
    pub const fn root(name: &'a str) -> Self {
        Self {
            name,
            parent: None,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            inherit_rotation: true,
        }
    }

    pub const fn child(name: &'a str, parent: &'a str, position: Vec3) -> Self {
        Self {
            name,
            parent: Some(parent),
            position,
            rotation: Quat::IDENTITY,
            inherit_rotation: true,
        }
    }

    pub const fn absolute(mut self) -> Self {
        self.inherit_rotation = false;
        self
    }
}

/// Arena of bones kept in topological order.
///
/// A bone can only be added after its parent, so every index is greater than
/// its parent's and iterating in storage order is a valid compute order.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    bones: Vec<Bone>,
    names: HashMap<String, BoneId>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bone(
        &mut self,
        name: impl Into<String>,
        position: Vec3,
        rotation: Quat,
        config: BoneConfig,
    ) -> Result<BoneId, SkeletonError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(SkeletonError::DuplicateName(name));
        }
        if let Some(parent) = config.parent {
            if parent.0 >= self.bones.len() {
                return Err(SkeletonError::UnknownParent {
                    bone: name,
                    parent: format!("#{}", parent.0),
                });
            }
        }

        let id = BoneId(self.bones.len());
        self.names.insert(name.clone(), id);
        self.bones.push(Bone::new(name, position, rotation, config));
        Ok(id)
    }

    /// Builds a skeleton from descriptors listed in any order.
    ///
    /// Parents are resolved by name and bones are re-ordered so that every
    /// parent precedes its children. Fails on unknown parents, duplicate
    /// names, or any bone that is its own ancestor.
    pub fn from_descriptors(descriptors: &[BoneDescriptor<'_>]) -> Result<Self, SkeletonError> {
        let mut by_name: HashMap<&str, usize> = HashMap::with_capacity(descriptors.len());
        for (i, desc) in descriptors.iter().enumerate() {
            if by_name.insert(desc.name, i).is_some() {
                return Err(SkeletonError::DuplicateName(desc.name.to_string()));
            }
        }

        let mut parents = Vec::with_capacity(descriptors.len());
        for desc in descriptors {
            let parent = match desc.parent {
                Some(parent) => Some(*by_name.get(parent).ok_or_else(|| {
                    SkeletonError::UnknownParent {
                        bone: desc.name.to_string(),
                        parent: parent.to_string(),
                    }
                })?),
                None => None,
            };
            parents.push(parent);
        }

        let mut skeleton = Self::new();
        let mut placed: Vec<Option<BoneId>> = vec![None; descriptors.len()];

        // Each sweep places at least one bone unless the rest form a cycle.
        for _ in 0..descriptors.len() {
            let mut progressed = false;
            for (i, desc) in descriptors.iter().enumerate() {
                if placed[i].is_some() {
                    continue;
                }
                let config = match parents[i] {
                    None => BoneConfig::ROOT,
                    Some(p) => match placed[p] {
                        Some(parent_id) => BoneConfig::child_of(parent_id),
                        None => continue,
                    },
                }
                .with_inherit_rotation(desc.inherit_rotation);

                placed[i] = Some(skeleton.add_bone(desc.name, desc.position, desc.rotation, config)?);
                progressed = true;
            }
            if !progressed {
                break;
            }
        }

        if let Some(i) = placed.iter().position(Option::is_none) {
            return Err(SkeletonError::Cycle(descriptors[i].name.to_string()));
        }

        log::debug!("skeleton built with {} bones", skeleton.len());
        Ok(skeleton)
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<BoneId> {
        self.names.get(name).copied()
    }

    pub fn bone(&self, id: BoneId) -> &Bone {
        &self.bones[id.0]
    }

    pub fn bone_mut(&mut self, id: BoneId) -> &mut Bone {
        &mut self.bones[id.0]
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn set_pose(&mut self, id: BoneId, position: Vec3, rotation: Quat) {
        let bone = &mut self.bones[id.0];
        bone.position = position;
        bone.rotation = rotation;
    }

    pub fn set_rotation(&mut self, id: BoneId, rotation: Quat) {
        self.bones[id.0].rotation = rotation;
    }

    /// Recomputes every bone's matrices, parents first.
    pub fn compute(&mut self) {
        for i in 0..self.bones.len() {
            let (done, rest) = self.bones.split_at_mut(i);
            let bone = &mut rest[0];
            let parent = bone
                .config
                .parent
                .map(|p| (&done[p.0].matrix, &done[p.0].inverse));
            bone.compute(parent);
        }
    }

    /// Copies every bone's matrices into `out`, in bone order.
    pub fn write_matrices(&self, out: &mut Vec<BoneMatrices>) {
        out.clear();
        out.extend(self.bones.iter().map(BoneMatrices::from_bone));
    }
}
