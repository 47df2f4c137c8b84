//! World-space distance field composition.
//!
//! [`SceneView`] blends the posed creature with the static [`Environment`]
//! and is what the ray marcher and shader sample.

mod environment;
mod view;

pub use environment::{Environment, Ground, Prop};
pub use view::SceneView;

use crate::sdf::Shape;
use glam::Vec3;

/// A field the marcher can sample at world points.
pub trait DistanceField {
    fn sample(&self, p: Vec3) -> Shape;

    /// Like [`sample`](Self::sample), also lowering `nearest` to the
    /// creature-only distance at `p`. Fields without a creature leave it
    /// untouched.
    fn sample_tracked(&self, p: Vec3, nearest: &mut f32) -> Shape {
        let _ = nearest;
        self.sample(p)
    }
}

impl<F: Fn(Vec3) -> Shape> DistanceField for F {
    fn sample(&self, p: Vec3) -> Shape {
        self(p)
    }
}
