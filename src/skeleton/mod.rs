//! Bone hierarchy module
//!
//! A `Skeleton` is an arena of bones stored in topological order (parents
//! before children). Bones refer to their parent by [`BoneId`], never by
//! pointer, and the ordering is validated once when bones are added.

mod arena;
mod bone;
mod error;

pub use arena::{BoneDescriptor, Skeleton};
pub use bone::{Bone, BoneConfig, BoneId, BoneMatrices};
pub use error::SkeletonError;
