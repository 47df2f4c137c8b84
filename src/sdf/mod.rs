//! Signed distance primitives and colour-carrying combinators.
//!
//! Primitives are free functions of a local-space point. [`Shape`] pairs a
//! distance with a flat material colour so that combinators can decide which
//! surface wins.

mod primitives;
mod shape;

pub use primitives::{
    sdf_box3d, sdf_capped_torus, sdf_capsule_vertical, sdf_cone, sdf_cylinder, sdf_octahedron,
    sdf_plane, sdf_rounded_box3d, sdf_sphere, sdf_torus,
};
pub use shape::{elongate, smooth_min, smooth_union, subtraction, union, Shape};
