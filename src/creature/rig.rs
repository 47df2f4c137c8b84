use super::config::CreatureConfig;
use crate::skeleton::{BoneDescriptor, BoneId, Skeleton, SkeletonError};
use glam::Vec3;

/// Body side. `Right` is +X in the body frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// `-1` for left, `1` for right.
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Places a right-side offset on this side.
    pub fn mirror(self, v: Vec3) -> Vec3 {
        Vec3::new(v.x.abs() * self.sign(), v.y, v.z)
    }
}

/// Bone handles for one limb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimbBones {
    pub upper: BoneId,
    pub lower: BoneId,
}

/// Resolved bone handles of the biped rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rig {
    pub body: BoneId,
    pub head: BoneId,
    pub arms: [LimbBones; 2],
    pub legs: [LimbBones; 2],
    pub feet: [BoneId; 2],
}

pub const BODY: &str = "body";
pub const HEAD: &str = "head";

const UPPER_ARM: [&str; 2] = ["upper_arm_l", "upper_arm_r"];
const FOREARM: [&str; 2] = ["forearm_l", "forearm_r"];
const THIGH: [&str; 2] = ["thigh_l", "thigh_r"];
const SHIN: [&str; 2] = ["shin_l", "shin_r"];
const FOOT: [&str; 2] = ["foot_l", "foot_r"];

/// Descriptor table for the biped.
///
/// The head follows the body's rotation; limbs and feet are posed with
/// absolute rotations from the IK solve.
pub fn descriptors(config: &CreatureConfig) -> Vec<BoneDescriptor<'static>> {
    let [thigh, shin] = config.leg_lengths;
    let [upper_arm, _] = config.arm_lengths;

    let mut table = vec![
        BoneDescriptor::root(BODY),
        BoneDescriptor::child(HEAD, BODY, config.neck_offset),
    ];

    for side in Side::BOTH {
        let i = side.index();
        table.extend([
            BoneDescriptor::child(UPPER_ARM[i], BODY, side.mirror(config.shoulder_offset)).absolute(),
            BoneDescriptor::child(FOREARM[i], UPPER_ARM[i], Vec3::new(0.0, upper_arm, 0.0)).absolute(),
            BoneDescriptor::child(THIGH[i], BODY, side.mirror(config.hip_offset)).absolute(),
            BoneDescriptor::child(SHIN[i], THIGH[i], Vec3::new(0.0, thigh, 0.0)).absolute(),
            BoneDescriptor::child(FOOT[i], SHIN[i], Vec3::new(0.0, shin, 0.0)).absolute(),
        ]);
    }

    table
}

impl Rig {
    /// Builds the skeleton from [`descriptors`] and resolves every handle.
    pub fn build(config: &CreatureConfig) -> Result<(Skeleton, Rig), SkeletonError> {
        let skeleton = Skeleton::from_descriptors(&descriptors(config))?;

        let find = |name: &str| {
            skeleton
                .find(name)
                .ok_or_else(|| SkeletonError::MissingBone(name.to_string()))
        };
        let limb = |upper: &str, lower: &str| -> Result<LimbBones, SkeletonError> {
            Ok(LimbBones {
                upper: find(upper)?,
                lower: find(lower)?,
            })
        };

        let rig = Rig {
            body: find(BODY)?,
            head: find(HEAD)?,
            arms: [limb(UPPER_ARM[0], FOREARM[0])?, limb(UPPER_ARM[1], FOREARM[1])?],
            legs: [limb(THIGH[0], SHIN[0])?, limb(THIGH[1], SHIN[1])?],
            feet: [find(FOOT[0])?, find(FOOT[1])?],
        };
        Ok((skeleton, rig))
    }

    pub fn arm(&self, side: Side) -> LimbBones {
        self.arms[side.index()]
    }

    pub fn leg(&self, side: Side) -> LimbBones {
        self.legs[side.index()]
    }

    pub fn foot(&self, side: Side) -> BoneId {
        self.feet[side.index()]
    }
}
