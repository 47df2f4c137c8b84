//! Orientation extraction from solved joint positions.

use crate::math::basis_from_direction;
use glam::{Mat3, Vec2, Vec3};

/// One rotation per segment whose local +Y runs along the segment.
///
/// The basis X axis is `Y × pull`, so every bone in the chain shares the bend
/// plane chosen by `pull`. The matrices are absolute (relative to the frame
/// the points are expressed in), suited to bones that do not inherit their
/// parent's rotation.
pub fn rotations_between(points: &[Vec3], pull: Vec3) -> Vec<Mat3> {
    points
        .windows(2)
        .map(|w| basis_from_direction(w[1] - w[0], pull))
        .collect()
}

/// `(pitch, roll)` per segment, with `pitch = asin(dir.z)` and
/// `roll = asin(dir.x)` of the normalized segment direction.
///
/// Only meaningful for chains bending within a single plane; use
/// [`rotations_between`] otherwise.
pub fn angles_between(points: &[Vec3]) -> Vec<Vec2> {
    points
        .windows(2)
        .map(|w| {
            let dir = (w[1] - w[0]).normalize_or_zero();
            Vec2::new(dir.z.asin(), dir.x.asin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn straight_chain_has_zero_angles() {
        let angles = angles_between(&[Vec3::ZERO, Vec3::Y]);
        assert_eq!(angles, vec![Vec2::ZERO]);
    }

    #[test]
    fn pitch_follows_z_and_roll_follows_x() {
        let angles = angles_between(&[Vec3::ZERO, Vec3::new(0.0, 1.0, -1.0)]);
        assert!(close(angles[0].x, -FRAC_PI_4) && close(angles[0].y, 0.0));

        let angles = angles_between(&[Vec3::ZERO, Vec3::new(-1.0, 1.0, 0.0)]);
        assert!(close(angles[0].x, 0.0) && close(angles[0].y, -FRAC_PI_4));

        let angles = angles_between(&[Vec3::ZERO, Vec3::X]);
        assert!(close(angles[0].y, FRAC_PI_2));
    }

    #[test]
    fn multi_segment_angles() {
        let points = [
            Vec3::ZERO,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(1.0, 2.0, 1.0),
        ];
        let angles = angles_between(&points);
        assert_eq!(angles.len(), 3);
        assert!(close(angles[0].x, 0.0) && close(angles[0].y, 0.0));
        assert!(close(angles[1].x, 0.0) && close(angles[1].y, FRAC_PI_4));
        assert!(close(angles[2].x, FRAC_PI_2) && close(angles[2].y, 0.0));

        let diagonal = angles_between(&[Vec3::ZERO, Vec3::ONE]);
        let expected = (1.0 / 3.0_f32.sqrt()).asin();
        assert!(close(diagonal[0].x, expected) && close(diagonal[0].y, expected));
    }

    #[test]
    fn rotation_maps_local_up_onto_segment() {
        let points = [Vec3::ZERO, Vec3::new(0.0, -0.8, 0.3), Vec3::new(0.2, -1.5, 0.1)];
        let rotations = rotations_between(&points, Vec3::Z);
        assert_eq!(rotations.len(), 2);

        for (rot, w) in rotations.iter().zip(points.windows(2)) {
            let dir = (w[1] - w[0]).normalize();
            assert!((*rot * Vec3::Y - dir).length() < 1e-5);
            assert!((rot.determinant() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn rotations_share_the_pull_plane() {
        let points = [Vec3::ZERO, Vec3::new(0.0, -1.0, 0.5), Vec3::new(0.0, -2.0, 0.0)];
        let rotations = rotations_between(&points, Vec3::Z);
        for rot in rotations {
            // Bend plane is YZ, so the X column stays on the world X axis.
            assert!((rot.x_axis.abs() - Vec3::X).length() < 1e-5);
        }
    }
}
