use super::environment::Environment;
use super::DistanceField;
use crate::creature::CreatureBody;
use crate::sdf::{union, Shape};
use glam::{Mat4, Vec3};

/// Read-only view of one frame's scene: a posed creature plus environment.
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub body: &'a CreatureBody,
    /// World-to-local matrix per bone, from the frame snapshot.
    pub inverses: &'a [Mat4],
    pub environment: &'a Environment,
}

impl<'a> SceneView<'a> {
    pub fn new(body: &'a CreatureBody, inverses: &'a [Mat4], environment: &'a Environment) -> Self {
        Self {
            body,
            inverses,
            environment,
        }
    }

    pub fn creature(&self, p: Vec3) -> Shape {
        self.body.sample(p, self.inverses)
    }
}

impl DistanceField for SceneView<'_> {
    fn sample(&self, p: Vec3) -> Shape {
        union(self.creature(p), self.environment.sample(p))
    }

    fn sample_tracked(&self, p: Vec3, nearest: &mut f32) -> Shape {
        let creature = self.creature(p);
        *nearest = nearest.min(creature.dist);
        union(creature, self.environment.sample(p))
    }
}
