//! Integration tests: FABRIK chain solver
//!
//! Segment lengths, reachable and unreachable targets, and the rotation
//! helpers that turn solved joints into bone orientations.

mod common;

use common::*;
use glam::Vec3;
use ik_raymarch::ik::{angles_between, rotations_between, Chain, FabrikSolver};

fn random_chain(rng: &mut Lcg) -> Chain {
    let n = 1 + (rng.next_f32() * 5.0) as usize;
    let lengths: Vec<f32> = (0..n).map(|_| rng.range(0.2, 2.0)).collect();
    Chain::new(lengths).unwrap()
}

fn random_target(rng: &mut Lcg, extent: f32) -> Vec3 {
    loop {
        let t = rng.vec3(extent);
        if t.length() > 0.05 {
            return t;
        }
    }
}

// ============================================================================
// Sampled properties
// ============================================================================

#[test]
fn every_segment_keeps_its_length() {
    let mut rng = Lcg::new(7);
    for _ in 0..500 {
        let chain = random_chain(&mut rng);
        let target = random_target(&mut rng, 6.0);
        let pull = rng.unit_vec3();
        let joints = FabrikSolver::solve(&chain, target, pull);

        assert_eq!(joints.len(), chain.segment_count() + 1);
        for (actual, expected) in joints.segment_lengths().zip(chain.lengths()) {
            assert!(
                approx(actual, *expected, 1e-3),
                "segment {actual} vs {expected} for target {target}"
            );
        }
    }
}

#[test]
fn reachable_targets_are_reached() {
    let mut rng = Lcg::new(11);
    let chain = Chain::new(vec![1.0, 1.0]).unwrap();
    for _ in 0..300 {
        // Keep targets comfortably inside the reachable shell.
        let dir = rng.unit_vec3();
        let target = dir * rng.range(0.5, 1.9);
        let pull = dir.any_orthonormal_vector();
        let joints = FabrikSolver::solve(&chain, target, pull);

        let miss = (joints.end_effector() - target).length();
        assert!(miss < 0.1, "missed {target} by {miss}");
    }
}

#[test]
fn unreachable_targets_stretch_towards_the_target() {
    let mut rng = Lcg::new(13);
    for _ in 0..300 {
        let chain = random_chain(&mut rng);
        let dir = rng.unit_vec3();
        let target = dir * (chain.total_length() * rng.range(1.2, 4.0));
        let joints = FabrikSolver::solve(&chain, target, rng.unit_vec3());

        let reach = (joints.end_effector() - joints.root()).normalize();
        assert!(
            (reach - dir).length() < 0.1,
            "reach {reach} vs target direction {dir}"
        );
    }
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn two_unit_segments_reach_diagonal_target() {
    let chain = Chain::new(vec![1.0, 1.0]).unwrap();
    let target = Vec3::new(1.0, 1.0, 0.0);
    let joints = FabrikSolver::solve(&chain, target, Vec3::Z);

    assert_eq!(joints.len(), 3);
    assert!((joints.end_effector() - target).length() < 0.1);
    for length in joints.segment_lengths() {
        assert!(approx(length, 1.0, 1e-3));
    }
}

#[test]
fn uneven_segments_reach_their_target() {
    let chain = Chain::new(vec![2.0, 0.5]).unwrap();
    let target = Vec3::new(1.5, 1.0, 0.0);
    let joints = FabrikSolver::solve(&chain, target, Vec3::Z);

    let lengths: Vec<f32> = joints.segment_lengths().collect();
    assert_eq!(joints.len(), 3);
    assert!(approx(lengths[0], 2.0, 1e-3));
    assert!(approx(lengths[1], 0.5, 1e-3));
    assert!((joints.end_effector() - target).length() < 0.1);
}

#[test]
fn far_target_aligns_the_chain() {
    let chain = Chain::new(vec![1.0, 1.0]).unwrap();
    let target = Vec3::new(10.0, 10.0, 0.0);
    let joints = FabrikSolver::solve(&chain, target, Vec3::Z);

    let reach = (joints.end_effector() - joints.root()).normalize();
    assert!((reach - target.normalize()).length() < 0.1);
}

// ============================================================================
// Rotation extraction
// ============================================================================

#[test]
fn rotations_carry_bone_y_along_each_segment() {
    let chain = Chain::new(vec![0.8, 0.8]).unwrap();
    let pull = Vec3::Z;
    let joints = FabrikSolver::solve(&chain, Vec3::new(0.2, -1.3, 0.3), pull);
    let rotations = rotations_between(joints.points(), pull);

    assert_eq!(rotations.len(), 2);
    for (rotation, w) in rotations.iter().zip(joints.points().windows(2)) {
        let along = (w[1] - w[0]).normalize();
        assert!((*rotation * Vec3::Y - along).length() < 1e-4);
        assert!(approx(rotation.determinant(), 1.0, 1e-4));
    }
}

#[test]
fn angle_pairs_agree_with_planar_bends() {
    // A bend confined to the YZ plane has no roll.
    let points = [Vec3::ZERO, Vec3::new(0.0, 0.6, 0.8), Vec3::new(0.0, 1.6, 0.8)];
    let angles = angles_between(&points);

    assert!(approx(angles[0].x, 0.8_f32.asin(), 1e-5));
    assert!(approx(angles[0].y, 0.0, 1e-6));
    assert!(approx(angles[1].x, 0.0, 1e-6));
}
