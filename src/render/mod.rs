//! CPU renderer: camera rays, shading and the parallel frame loop.

pub mod camera;
pub mod renderer;
pub mod shading;

pub use camera::Camera;
pub use renderer::{FrameImage, Renderer};
pub use shading::{Shader, ShadingConfig};
