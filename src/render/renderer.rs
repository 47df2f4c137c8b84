use super::camera::Camera;
use super::shading::{Shader, ShadingConfig};
use crate::accel::Ray;
use crate::frame::FrameSnapshot;
use crate::march::{MarchConfig, QualityTier, RayMarcher};
use crate::scene::DistanceField;
use glam::Vec4;
use rayon::prelude::*;

/// Rendered RGBA8 frame, rows top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    /// Closest creature approach per pixel, when requested.
    pub nearest: Option<Vec<f32>>,
}

impl FrameImage {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }

    pub fn nearest_at(&self, x: u32, y: u32) -> Option<f32> {
        self.nearest
            .as_ref()
            .map(|n| n[y as usize * self.width as usize + x as usize])
    }
}

/// Per-pixel march and shade, parallel over rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub marcher: RayMarcher,
    pub shader: Shader,
    pub track_nearest: bool,
}

impl Renderer {
    pub fn new(march: MarchConfig, shading: ShadingConfig) -> Self {
        Self {
            marcher: RayMarcher::new(march),
            shader: Shader::new(shading, march),
            track_nearest: false,
        }
    }

    pub fn for_tier(tier: QualityTier) -> Self {
        Self::new(MarchConfig::for_tier(tier), ShadingConfig::for_tier(tier))
    }

    pub fn with_nearest(mut self, track: bool) -> Self {
        self.track_nearest = track;
        self
    }

    /// Colour and creature clearance seen along one primary ray.
    pub fn shade_ray<F>(&self, field: &F, ray: &Ray, frame: &FrameSnapshot) -> (Vec4, f32)
    where
        F: DistanceField + ?Sized,
    {
        let result = self.marcher.march_boxes(field, ray, &frame.boxes);
        (self.shader.shade(field, ray, &result, frame.light), result.nearest)
    }

    /// Renders one frame. Pixels only read `field` and `frame`, and each
    /// writes its own slot of the output.
    pub fn render<F>(
        &self,
        field: &F,
        camera: &Camera,
        frame: &FrameSnapshot,
        width: u32,
        height: u32,
    ) -> FrameImage
    where
        F: DistanceField + Sync + ?Sized,
    {
        let (w, h) = (width.max(1) as usize, height.max(1) as usize);
        let inv_view_proj = camera.view_projection().inverse();

        let mut rgba = vec![0u8; w * h * 4];
        let mut nearest = vec![f32::MAX; w * h];

        rgba.par_chunks_mut(w * 4)
            .zip(nearest.par_chunks_mut(w))
            .enumerate()
            .for_each(|(y, (row, near_row))| {
                let ndc_y = 1.0 - (y as f32 + 0.5) / h as f32 * 2.0;

                let pixels = row.chunks_exact_mut(4).zip(near_row.iter_mut());
                for (x, (pixel, near)) in pixels.enumerate() {
                    let ndc_x = (x as f32 + 0.5) / w as f32 * 2.0 - 1.0;
                    let ray = camera.unproject_ray(&inv_view_proj, ndc_x, ndc_y);
                    let (color, nearest) = self.shade_ray(field, &ray, frame);

                    pixel.copy_from_slice(&to_rgba8(color));
                    *near = nearest;
                }
            });

        log::debug!("rendered frame {} at {}x{}", frame.index, w, h);

        FrameImage {
            width: w as u32,
            height: h as u32,
            rgba,
            nearest: self.track_nearest.then_some(nearest),
        }
    }
}

fn to_rgba8(color: Vec4) -> [u8; 4] {
    let c = (color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
    [c.x as u8, c.y as u8, c.z as u8, c.w as u8]
}
