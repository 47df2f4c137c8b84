use crate::accel::AabbList;
use crate::creature::{Creature, CreatureBody};
use crate::scene::{Environment, SceneView};
use crate::skeleton::BoneMatrices;
use glam::{Mat4, Vec3};

/// Pose, culling boxes and lighting frozen for one frame.
///
/// Written once by the single-threaded update, then shared read-only by
/// every pixel.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub index: u64,
    pub time: f32,
    pub light: Vec3,
    /// Ground point the creature stands on.
    pub focus: Vec3,
    /// Forward and inverse matrix per bone, in bone order.
    pub bones: Vec<BoneMatrices>,
    /// World-to-local matrix per bone, kept unpacked for field evaluation.
    pub inverses: Vec<Mat4>,
    pub boxes: AabbList,
}

impl FrameSnapshot {
    pub fn capture(
        index: u64,
        time: f32,
        light: Vec3,
        creature: &Creature,
        environment: &Environment,
    ) -> Self {
        let focus = creature.state().position;

        let mut bones = Vec::with_capacity(creature.skeleton().len());
        creature.write_matrices(&mut bones);
        let inverses = bones.iter().map(BoneMatrices::inverse).collect();

        let mut boxes = AabbList::new();
        boxes.push(creature.bounds());
        environment.push_bounds(focus, &mut boxes);

        Self {
            index,
            time,
            light,
            focus,
            bones,
            inverses,
            boxes,
        }
    }

    /// Bone matrices as raw bytes, laid out for a storage buffer upload.
    pub fn bone_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.bones)
    }

    pub fn scene<'a>(&'a self, body: &'a CreatureBody, environment: &'a Environment) -> SceneView<'a> {
        SceneView::new(body, &self.inverses, environment)
    }
}
