//! Shared helpers for the integration tests.
#![allow(dead_code)]

use glam::{Quat, Vec3};
use ik_raymarch::sdf::{sdf_plane, sdf_sphere, union, Shape};

/// Small deterministic generator so sampled properties are reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1))
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 40) as f32) / (1u64 << 24) as f32
    }

    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    pub fn vec3(&mut self, extent: f32) -> Vec3 {
        Vec3::new(
            self.range(-extent, extent),
            self.range(-extent, extent),
            self.range(-extent, extent),
        )
    }

    pub fn unit_vec3(&mut self) -> Vec3 {
        loop {
            let v = self.vec3(1.0);
            let len = v.length();
            if len > 0.1 && len <= 1.0 {
                return v / len;
            }
        }
    }

    pub fn quat(&mut self) -> Quat {
        Quat::from_axis_angle(self.unit_vec3(), self.range(-3.1, 3.1))
    }
}

pub const BALL_COLOR: Vec3 = Vec3::new(0.9, 0.2, 0.1);
pub const FLOOR_COLOR: Vec3 = Vec3::new(0.8, 0.8, 0.8);

/// Unit sphere resting on the ground plane.
pub fn ball_on_floor(p: Vec3) -> Shape {
    union(
        Shape::new(sdf_sphere(p - Vec3::Y, 1.0), BALL_COLOR),
        Shape::new(sdf_plane(p, Vec3::Y, 0.0), FLOOR_COLOR),
    )
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}
