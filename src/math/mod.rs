//! Math utilities module
//!
//! Provides convenient re-exports from glam, the rigid [`Transform`] used for
//! creature root poses, and a few scalar helpers shared by the animation and
//! shading code.

mod transform;

pub use transform::Transform;

// Re-export commonly used glam types
pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

/// Hermite smoothstep, matching the GPU intrinsic of the same name.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Builds an orthonormal basis whose +Y column points along `direction`.
///
/// `hint` picks the bend plane: the Z column ends up as close to `hint` as an
/// orthogonal frame allows. Falls back to `Vec3::Z`, then `Vec3::X`, when the
/// hint is parallel to the direction.
pub fn basis_from_direction(direction: Vec3, hint: Vec3) -> Mat3 {
    let y = direction.normalize_or(Vec3::Y);

    let mut x = y.cross(hint);
    if x.length_squared() < 0.0001 {
        x = y.cross(Vec3::Z);
    }
    if x.length_squared() < 0.0001 {
        x = y.cross(Vec3::X);
    }
    let x = x.normalize();
    let z = x.cross(y);

    Mat3::from_cols(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_clamps_and_is_symmetric() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((smoothstep(0.0, 1.0, 0.25) + smoothstep(0.0, 1.0, 0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn basis_is_orthonormal_and_aligned() {
        let dir = Vec3::new(1.0, -2.0, 0.5);
        let basis = basis_from_direction(dir, Vec3::Z);

        assert!((basis.y_axis - dir.normalize()).length() < 1e-5);
        assert!(basis.x_axis.dot(basis.y_axis).abs() < 1e-5);
        assert!(basis.y_axis.dot(basis.z_axis).abs() < 1e-5);
        assert!((basis.determinant() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn basis_survives_parallel_hint() {
        let basis = basis_from_direction(Vec3::Z, Vec3::Z);
        assert!(basis.is_finite());
        assert!((basis.determinant() - 1.0).abs() < 1e-4);
    }
}
