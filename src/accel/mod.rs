//! Ray / bounding-box culling used by the ray marcher.

mod aabb;
mod list;
mod ray;

pub use aabb::{Aabb, AabbHit};
pub use list::{sort_hits, AabbList, SortedHits, AABB_CAPACITY};
pub use ray::Ray;
