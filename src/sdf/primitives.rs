//! Primitive distance functions, each centred on its local origin.

use glam::{Vec2, Vec3};

#[inline]
pub fn sdf_sphere(p: Vec3, radius: f32) -> f32 {
    p.length() - radius
}

/// Axis-aligned box with the given half extents.
#[inline]
pub fn sdf_box3d(p: Vec3, half_extents: Vec3) -> f32 {
    let q = p.abs() - half_extents;
    q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
}

/// Box whose outer extent stays at `half_extents`, edges rounded by `radius`.
#[inline]
pub fn sdf_rounded_box3d(p: Vec3, half_extents: Vec3, radius: f32) -> f32 {
    sdf_box3d(p, half_extents - Vec3::splat(radius)) - radius
}

/// Capsule running from the origin up to `(0, height, 0)`.
///
/// Limb bones point their local +Y along the segment, so this fits a bone
/// with its joint at the origin.
#[inline]
pub fn sdf_capsule_vertical(p: Vec3, height: f32, radius: f32) -> f32 {
    let y = p.y - p.y.clamp(0.0, height);
    Vec3::new(p.x, y, p.z).length() - radius
}

/// Torus lying in the XZ plane.
#[inline]
pub fn sdf_torus(p: Vec3, major_radius: f32, minor_radius: f32) -> f32 {
    let q = Vec2::new(Vec2::new(p.x, p.z).length() - major_radius, p.y);
    q.length() - minor_radius
}

/// Arc of a torus in the XY plane, symmetric about the Y axis.
///
/// `sc` is `(sin, cos)` of the half-aperture angle.
#[inline]
pub fn sdf_capped_torus(p: Vec3, sc: Vec2, major_radius: f32, minor_radius: f32) -> f32 {
    let px = Vec2::new(p.x.abs(), p.y);
    let k = if sc.y * px.x > sc.x * px.y {
        px.dot(sc)
    } else {
        px.length()
    };
    (p.dot(p) + major_radius * major_radius - 2.0 * major_radius * k).sqrt() - minor_radius
}

/// Regular octahedron with vertices at distance `s` along each axis.
#[inline]
pub fn sdf_octahedron(p: Vec3, s: f32) -> f32 {
    let p = p.abs();
    let m = p.x + p.y + p.z - s;

    let q = if 3.0 * p.x < m {
        p
    } else if 3.0 * p.y < m {
        Vec3::new(p.y, p.z, p.x)
    } else if 3.0 * p.z < m {
        Vec3::new(p.z, p.x, p.y)
    } else {
        return m * 0.577_350_27;
    };

    let k = (0.5 * (q.z - q.y + s)).clamp(0.0, s);
    Vec3::new(q.x, q.y - s + k, q.z - k).length()
}

/// Vertical capped cylinder centred on the origin.
#[inline]
pub fn sdf_cylinder(p: Vec3, radius: f32, half_height: f32) -> f32 {
    let d = Vec2::new(Vec2::new(p.x, p.z).length() - radius, p.y.abs() - half_height);
    d.x.max(d.y).min(0.0) + d.max(Vec2::ZERO).length()
}

/// Cone along Y with its base disc at `-half_height` and its tip at
/// `+half_height`.
pub fn sdf_cone(p: Vec3, radius: f32, half_height: f32) -> f32 {
    let q = Vec2::new(Vec2::new(p.x, p.z).length(), p.y);
    let h = half_height;

    // Tip at (0, h), mantle runs towards the base rim.
    let k2 = Vec2::new(-radius, 2.0 * h);

    let cap_r = if q.y < 0.0 { radius } else { 0.0 };
    let ca = Vec2::new(q.x - q.x.min(cap_r), q.y.abs() - h);

    let t = ((Vec2::new(-q.x, h - q.y)).dot(k2) / k2.dot(k2)).clamp(0.0, 1.0);
    let cb = Vec2::new(q.x + k2.x * t, q.y - h + k2.y * t);

    let s = if cb.x < 0.0 && ca.y < 0.0 { -1.0 } else { 1.0 };
    s * ca.length_squared().min(cb.length_squared()).sqrt()
}

/// Infinite plane `dot(p, normal) = offset`; `normal` must be unit length.
#[inline]
pub fn sdf_plane(p: Vec3, normal: Vec3, offset: f32) -> f32 {
    p.dot(normal) - offset
}
