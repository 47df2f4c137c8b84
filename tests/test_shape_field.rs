//! Integration tests: distance primitives and colour-carrying unions

mod common;

use common::*;
use glam::{Vec2, Vec3};
use ik_raymarch::sdf::{
    elongate, sdf_box3d, sdf_capped_torus, sdf_capsule_vertical, sdf_sphere, smooth_union,
    subtraction, union, Shape,
};

const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);

// ============================================================================
// Union laws
// ============================================================================

#[test]
fn smooth_union_never_exceeds_the_hard_minimum() {
    let mut rng = Lcg::new(3);
    for _ in 0..2000 {
        let a = Shape::new(rng.range(-2.0, 2.0), RED);
        let b = Shape::new(rng.range(-2.0, 2.0), BLUE);
        if a.dist == b.dist {
            continue;
        }
        let k = rng.range(0.01, 1.0);
        let blended = smooth_union(a, b, k);
        assert!(
            blended.dist <= a.dist.min(b.dist),
            "smooth_union({}, {}, {k}) = {}",
            a.dist,
            b.dist,
            blended.dist
        );
    }
}

#[test]
fn hard_union_takes_the_nearer_colour() {
    let mut rng = Lcg::new(5);
    for _ in 0..2000 {
        let a = Shape::new(rng.range(-2.0, 2.0), RED);
        let b = Shape::new(rng.range(-2.0, 2.0), BLUE);
        let expected = if a.dist <= b.dist { a.color } else { b.color };
        assert_eq!(union(a, b).color, expected);
    }
}

#[test]
fn union_ties_keep_the_first_operand() {
    let joined = union(Shape::new(0.3, RED), Shape::new(0.3, BLUE));
    assert_eq!(joined.color, RED);
}

#[test]
fn folding_from_empty_is_the_identity() {
    let shape = Shape::new(0.7, BLUE);
    assert_eq!(union(Shape::EMPTY, shape), shape);
}

#[test]
fn smooth_union_is_exact_outside_the_blend_band() {
    let joined = smooth_union(Shape::new(0.1, RED), Shape::new(2.0, BLUE), 0.5);
    assert!(approx(joined.dist, 0.1, 1e-6));
    assert_eq!(joined.color, RED);
}

#[test]
fn smooth_union_pins_the_quarter_k_dip() {
    // Equal distances give h = 1, so the dip is exactly k / 4.
    let joined = smooth_union(Shape::new(1.0, RED), Shape::new(1.0, BLUE), 0.4);
    assert!(approx(joined.dist, 0.9, 1e-6));
}

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn primitives_are_negative_inside_and_positive_outside() {
    assert!(sdf_sphere(Vec3::ZERO, 1.0) < 0.0);
    assert!(sdf_sphere(Vec3::new(2.0, 0.0, 0.0), 1.0) > 0.0);

    let half = Vec3::new(1.0, 0.5, 0.25);
    assert!(sdf_box3d(Vec3::ZERO, half) < 0.0);
    assert!(approx(sdf_box3d(Vec3::new(2.0, 0.0, 0.0), half), 1.0, 1e-6));

    assert!(sdf_capsule_vertical(Vec3::new(0.0, 0.5, 0.0), 1.0, 0.2) < 0.0);
    assert!(approx(sdf_capsule_vertical(Vec3::new(0.0, 2.0, 0.0), 1.0, 0.2), 0.8, 1e-6));
}

#[test]
fn capped_torus_only_covers_its_arc() {
    let sc = Vec2::new(0.5_f32.sin(), 0.5_f32.cos());
    // Arc centred on +Y: the top of the ring is on the surface, the bottom is far.
    assert!(approx(sdf_capped_torus(Vec3::new(0.0, 1.0, 0.0), sc, 1.0, 0.1), -0.1, 1e-5));
    assert!(sdf_capped_torus(Vec3::new(0.0, -1.0, 0.0), sc, 1.0, 0.1) > 0.5);
}

#[test]
fn subtraction_carves_the_first_operand() {
    let p = Vec3::ZERO;
    let carved = subtraction(sdf_sphere(p, 0.5), sdf_sphere(p, 1.0));
    assert!(carved > 0.0);

    let q = Vec3::new(0.75, 0.0, 0.0);
    assert!(subtraction(sdf_sphere(q, 0.5), sdf_sphere(q, 1.0)) < 0.0);
}

#[test]
fn elongate_stretches_along_the_chosen_axis() {
    let stretched = |p: Vec3| sdf_sphere(elongate(p, Vec3::new(1.0, 0.0, 0.0)), 0.5);
    assert!(stretched(Vec3::new(1.2, 0.0, 0.0)) < 0.0);
    assert!(stretched(Vec3::new(0.0, 0.7, 0.0)) > 0.0);
}

#[test]
fn composed_field_reports_the_surface_colour() {
    assert_eq!(ball_on_floor(Vec3::new(0.0, 1.0, 0.0)).color, BALL_COLOR);
    assert_eq!(ball_on_floor(Vec3::new(5.0, 0.0, 5.0)).color, FLOOR_COLOR);
    assert!(approx(ball_on_floor(Vec3::new(0.0, 3.0, 0.0)).dist, 1.0, 1e-6));
}
