use glam::Vec3;

/// Distance to the nearest surface together with that surface's colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub dist: f32,
    pub color: Vec3,
}

impl Shape {
    /// Shape that loses every comparison.
    pub const EMPTY: Self = Self {
        dist: f32::MAX,
        color: Vec3::ZERO,
    };

    #[inline]
    pub const fn new(dist: f32, color: Vec3) -> Self {
        Self { dist, color }
    }
}

/// Hard union: the nearer operand wins, ties keep `a`.
#[inline]
pub fn union(a: Shape, b: Shape) -> Shape {
    Shape {
        dist: a.dist.min(b.dist),
        color: if a.dist > b.dist { b.color } else { a.color },
    }
}

/// Quadratic smooth minimum on distances alone, `min - h²·k/4`.
#[inline]
pub fn smooth_min(a: f32, b: f32, k: f32) -> f32 {
    let h = (k - (a - b).abs()).max(0.0) / k;
    a.min(b) - h * h * k * 0.25
}

/// Smooth union with colour blending over the blend radius `k`.
///
/// Inside the blend band the colour weight is `m = h²`; once `a` is the
/// farther operand the remaining `1 - m` is added so the nearer colour
/// dominates. Requires `k > 0`.
#[inline]
pub fn smooth_union(a: Shape, b: Shape, k: f32) -> Shape {
    let h = (k - (a.dist - b.dist).abs()).max(0.0) / k;
    let m = h * h;

    let dist = a.dist.min(b.dist) - m * k * 0.25;

    let weight = m + if a.dist > b.dist { 1.0 - m } else { 0.0 };
    let color = a.color.lerp(b.color, weight);

    Shape { dist, color }
}

/// Carves `d1` out of `d2`.
#[inline]
pub fn subtraction(d1: f32, d2: f32) -> f32 {
    (-d1).max(d2)
}

/// Stretches a primitive by `h` along each axis: evaluate the primitive at
/// the returned point.
#[inline]
pub fn elongate(p: Vec3, h: Vec3) -> Vec3 {
    p - p.clamp(-h, h)
}
