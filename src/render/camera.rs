use crate::accel::Ray;
use glam::{Mat4, Vec3, Vec4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 4.0, 9.0),
            target: Vec3::new(0.0, 1.5, 0.0),
            up: Vec3::Y,
            fov: 45.0_f32.to_radians(),
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            ..Self::default()
        }
    }

    /// Spherical placement around `center`: `theta` around +Y, `phi` from +Y.
    pub fn orbit(center: Vec3, radius: f32, theta: f32, phi: f32) -> Self {
        let offset = Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        );
        Self::looking_at(center + offset, center)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn with_aspect_of(mut self, width: u32, height: u32) -> Self {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
        self
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize()
    }

    /// Unprojects NDC coordinates (`-1..1`, +Y up) through the near and far
    /// planes.
    pub fn screen_to_ray(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        self.unproject_ray(&self.view_projection().inverse(), ndc_x, ndc_y)
    }

    /// [`screen_to_ray`](Self::screen_to_ray) with a precomputed inverse
    /// view-projection, for per-pixel use.
    pub fn unproject_ray(&self, inv_view_proj: &Mat4, ndc_x: f32, ndc_y: f32) -> Ray {
        let near_point = *inv_view_proj * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far_point = *inv_view_proj * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near = near_point.truncate() / near_point.w;
        let far = far_point.truncate() / far_point.w;

        Ray::new(near, far - near)
    }
}
