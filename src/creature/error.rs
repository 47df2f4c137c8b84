use crate::ik::ChainError;
use crate::skeleton::SkeletonError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CreatureError {
    #[error("invalid limb chain: {0}")]
    Chain(#[from] ChainError),
    #[error("invalid rig: {0}")]
    Skeleton(#[from] SkeletonError),
}
