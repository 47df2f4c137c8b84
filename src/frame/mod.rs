//! Per-frame update and the immutable snapshot the renderer consumes.

mod simulation;
mod snapshot;

pub use simulation::{LightOrbit, Simulation};
pub use snapshot::FrameSnapshot;
