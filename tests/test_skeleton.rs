//! Integration tests: bone hierarchy and the biped rig

mod common;

use common::*;
use glam::{Mat4, Quat, Vec3};
use ik_raymarch::creature::{descriptors, Creature, CreatureConfig, MoveInput, Rig, Side};
use ik_raymarch::skeleton::{BoneConfig, BoneDescriptor, Skeleton, SkeletonError};

fn assert_identity(m: Mat4, what: &str) {
    assert!(
        m.abs_diff_eq(Mat4::IDENTITY, 1e-3),
        "{what}: matrix * inverse = {m:?}"
    );
}

// ============================================================================
// Matrices
// ============================================================================

#[test]
fn forward_times_inverse_is_identity_for_random_poses() {
    let mut rng = Lcg::new(23);
    for _ in 0..50 {
        let mut skeleton = Skeleton::new();
        let mut ids = vec![skeleton
            .add_bone("root", rng.vec3(3.0), rng.quat(), BoneConfig::ROOT)
            .unwrap()];

        for i in 1..8 {
            let parent = ids[(rng.next_f32() * ids.len() as f32) as usize];
            let config = BoneConfig::child_of(parent).with_inherit_rotation(rng.next_f32() < 0.5);
            let id = skeleton
                .add_bone(format!("bone{i}"), rng.vec3(2.0), rng.quat(), config)
                .unwrap();
            ids.push(id);
        }

        skeleton.compute();
        for bone in skeleton.bones() {
            assert_identity(bone.matrix() * bone.inverse(), &bone.name);
        }
    }
}

#[test]
fn absolute_bones_keep_their_own_rotation() {
    let mut skeleton = Skeleton::new();
    let root = skeleton
        .add_bone("root", Vec3::ZERO, Quat::from_rotation_y(1.0), BoneConfig::ROOT)
        .unwrap();
    let twist = Quat::from_rotation_x(0.4);
    let child = skeleton
        .add_bone(
            "child",
            Vec3::new(0.0, 0.0, 1.0),
            twist,
            BoneConfig::child_of(root).with_inherit_rotation(false),
        )
        .unwrap();
    skeleton.compute();

    let bone = skeleton.bone(child);
    // Position still follows the parent's rotation.
    let expected = Quat::from_rotation_y(1.0) * Vec3::Z;
    assert!((bone.world_position() - expected).length() < 1e-5);

    let world_y = bone.matrix().transform_vector3(Vec3::Y);
    assert!((world_y - twist * Vec3::Y).length() < 1e-5);
}

#[test]
fn descriptors_resolve_in_any_order() {
    let table = [
        BoneDescriptor::child("hand", "arm", Vec3::Y),
        BoneDescriptor::child("arm", "body", Vec3::X),
        BoneDescriptor::root("body"),
    ];
    let mut skeleton = Skeleton::from_descriptors(&table).unwrap();
    skeleton.compute();

    let hand = skeleton.find("hand").unwrap();
    let arm = skeleton.find("arm").unwrap();
    assert!(arm.index() < hand.index());
    assert!((skeleton.bone(hand).world_position() - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-5);
}

#[test]
fn descriptor_errors_are_reported() {
    let unknown = [BoneDescriptor::child("arm", "torso", Vec3::X)];
    assert!(matches!(
        Skeleton::from_descriptors(&unknown),
        Err(SkeletonError::UnknownParent { .. })
    ));

    let cycle = [
        BoneDescriptor::child("a", "b", Vec3::X),
        BoneDescriptor::child("b", "a", Vec3::X),
    ];
    assert!(matches!(Skeleton::from_descriptors(&cycle), Err(SkeletonError::Cycle(_))));

    let duplicate = [BoneDescriptor::root("a"), BoneDescriptor::root("a")];
    assert_eq!(
        Skeleton::from_descriptors(&duplicate).unwrap_err(),
        SkeletonError::DuplicateName("a".to_string())
    );
}

// ============================================================================
// Biped rig
// ============================================================================

#[test]
fn rig_resolves_every_bone() {
    let config = CreatureConfig::default();
    let (skeleton, rig) = Rig::build(&config).unwrap();

    assert_eq!(skeleton.len(), descriptors(&config).len());
    assert_eq!(skeleton.bone(rig.head).parent(), Some(rig.body));
    for side in Side::BOTH {
        assert_eq!(skeleton.bone(rig.leg(side).lower).parent(), Some(rig.leg(side).upper));
        assert!(!skeleton.bone(rig.foot(side)).config().inherit_rotation);
    }
}

#[test]
fn walking_creature_keeps_valid_matrices() {
    let mut creature = Creature::new(CreatureConfig::default()).unwrap();
    for _ in 0..45 {
        creature.update(1.0 / 30.0, MoveInput::new(0.6, 0.8));
    }

    for bone in creature.skeleton().bones() {
        assert_identity(bone.matrix() * bone.inverse(), &bone.name);
    }
}
