//! Sphere tracing confined to the frame's bounding boxes.

mod config;
mod marcher;

pub use config::{MarchConfig, QualityTier, UnknownQuality};
pub use marcher::{MarchOutcome, MarchResult, RayMarcher};
