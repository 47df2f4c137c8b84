use glam::Vec3;

/// Half-line with a unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Normalizes `direction`; a zero direction falls back to `-Z`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or(Vec3::NEG_Z),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Per-axis reciprocal direction. Near-zero components map to `f32::MAX`
    /// so slab products stay finite.
    pub fn inv_direction(&self) -> Vec3 {
        let inv = |d: f32| if d.abs() > 0.0001 { 1.0 / d } else { f32::MAX };
        Vec3::new(inv(self.direction.x), inv(self.direction.y), inv(self.direction.z))
    }
}
