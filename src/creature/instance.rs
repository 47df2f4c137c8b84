use super::body::CreatureBody;
use super::config::CreatureConfig;
use super::error::CreatureError;
use super::locomotion::{Gait, MoveInput};
use super::rig::{LimbBones, Rig, Side};
use crate::accel::Aabb;
use crate::dynamics::{SecondOrderDynamics, SpringParams};
use crate::ik::{rotations_between, Chain, FabrikSolver};
use crate::math::Transform;
use crate::skeleton::{Bone, BoneMatrices, Skeleton};
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::PI;

/// Below this speed the creature counts as standing still.
const IDLE_SPEED: f32 = 0.05;

/// Hand rest position relative to the shoulder, right side, body frame.
const HAND_REST: Vec3 = Vec3::new(0.2, -1.15, 0.0);

/// Everything that changes frame to frame for one creature.
#[derive(Debug, Clone)]
pub struct CreatureState {
    /// Ground point under the hips.
    pub position: Vec3,
    /// Yaw in radians; zero faces +Z.
    pub heading: f32,
    pub time: f32,
    /// Gait phase in radians, advanced with distance walked.
    pub phase: f32,
    pub gait: Gait,
    velocity: SecondOrderDynamics<Vec3>,
    facing: SecondOrderDynamics<Vec3>,
    bob: SecondOrderDynamics<f32>,
}

impl CreatureState {
    fn new(config: &CreatureConfig, position: Vec3, heading: f32) -> Self {
        let ground = Transform::from_position_yaw(position, heading);
        let foot = |side: Side| {
            let hip = ground.transform_point(side.mirror(config.hip_offset));
            Vec3::new(hip.x, config.ankle_height, hip.z)
        };

        Self {
            position,
            heading,
            time: 0.0,
            phase: 0.0,
            gait: Gait::new(foot(Side::Left), foot(Side::Right)),
            velocity: SecondOrderDynamics::new(config.velocity_spring, Vec3::ZERO),
            facing: SecondOrderDynamics::new(config.heading_spring, ground.forward()),
            bob: SecondOrderDynamics::new(SpringParams::BOUNCY, 0.0),
        }
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity.value()
    }

    pub fn speed(&self) -> f32 {
        self.velocity.value().length()
    }

    /// Yaw-only placement on the ground.
    pub fn ground_transform(&self) -> Transform {
        Transform::from_position_yaw(self.position, self.heading)
    }
}

/// A posed biped: skeleton, rig handles, body description and state.
#[derive(Debug, Clone)]
pub struct Creature {
    config: CreatureConfig,
    skeleton: Skeleton,
    rig: Rig,
    body: CreatureBody,
    leg_chain: Chain,
    arm_chain: Chain,
    state: CreatureState,
}

impl Creature {
    pub fn new(config: CreatureConfig) -> Result<Self, CreatureError> {
        Self::spawn(config, Vec3::ZERO, 0.0)
    }

    /// Builds the rig and places the creature standing at `position`.
    pub fn spawn(config: CreatureConfig, position: Vec3, heading: f32) -> Result<Self, CreatureError> {
        let leg_chain = Chain::new(config.leg_lengths)?;
        let arm_chain = Chain::new(config.arm_lengths)?;
        let (skeleton, rig) = Rig::build(&config)?;
        let body = CreatureBody::new(&config, &rig);
        let state = CreatureState::new(&config, Vec3::new(position.x, 0.0, position.z), heading);

        log::info!(
            "creature spawned at ({:.2}, {:.2}) with {} bones",
            position.x,
            position.z,
            skeleton.len()
        );

        let mut creature = Self {
            config,
            skeleton,
            rig,
            body,
            leg_chain,
            arm_chain,
            state,
        };
        creature.pose();
        Ok(creature)
    }

    pub fn config(&self) -> &CreatureConfig {
        &self.config
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    pub fn body(&self) -> &CreatureBody {
        &self.body
    }

    pub fn state(&self) -> &CreatureState {
        &self.state
    }

    /// Advances locomotion by `dt` seconds and re-poses the skeleton.
    pub fn update(&mut self, dt: f32, input: MoveInput) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }
        let config = &self.config;
        let state = &mut self.state;
        state.time += dt;

        let velocity = state.velocity.update(input.desired_velocity(config.max_speed), dt);
        state.position += Vec3::new(velocity.x, 0.0, velocity.z) * dt;

        let speed = velocity.length();
        let moving = speed > IDLE_SPEED;

        let facing_target = if moving {
            velocity / speed
        } else {
            state.facing.value().normalize_or(Vec3::Z)
        };
        let facing = state.facing.update(facing_target, dt);
        if facing.x * facing.x + facing.z * facing.z > 1e-6 {
            state.heading = facing.x.atan2(facing.z);
        }

        let stride = (config.step_threshold * 2.0).max(1e-3);
        state.phase = (state.phase + dt * speed / stride * PI) % (2.0 * PI);

        let ratio = (speed / config.max_speed.max(1e-3)).clamp(0.0, 1.0);
        let bob_target =
            config.bob_height * (ratio * (2.0 * state.phase).cos() + 0.3 * (state.time * 2.0).sin());
        state.bob.update(bob_target, dt);

        let desired = self.desired_feet();
        let threshold = if moving {
            self.config.step_threshold
        } else {
            self.config.settle_threshold
        };
        if let Some(side) = self
            .state
            .gait
            .update(desired, threshold, self.config.step_duration, dt)
        {
            log::trace!("{side:?} foot lifted at t={:.2}", self.state.time);
        }

        self.pose();
    }

    fn speed_ratio(&self) -> f32 {
        (self.state.speed() / self.config.max_speed.max(1e-3)).clamp(0.0, 1.0)
    }

    /// Pelvis placement including the idle breath, walking bob and lean.
    fn body_transform(&self) -> Transform {
        let ratio = self.speed_ratio();
        let height = self.config.hip_height + self.state.bob.value();
        let rotation = Quat::from_rotation_y(self.state.heading)
            * Quat::from_rotation_x(self.config.max_lean * ratio);
        Transform::new(self.state.position + Vec3::Y * height, rotation)
    }

    /// Where each ankle would rest right now: under its hip, led by velocity.
    fn desired_feet(&self) -> [Vec3; 2] {
        let body = self.body_transform();
        let lead = self.state.velocity() * self.config.step_lead;
        Side::BOTH.map(|side| {
            let hip = body.transform_point(side.mirror(self.config.hip_offset));
            Vec3::new(hip.x + lead.x, self.config.ankle_height, hip.z + lead.z)
        })
    }

    fn pose(&mut self) {
        let ratio = self.speed_ratio();
        let (time, phase) = (self.state.time, self.state.phase);

        let body = self.body_transform();
        let forward = self.state.ground_transform().forward();
        let yaw = Quat::from_rotation_y(self.state.heading);

        self.skeleton.set_pose(self.rig.body, body.position, body.rotation);
        self.skeleton.set_rotation(
            self.rig.head,
            Quat::from_euler(EulerRot::YXZ, time.cos() * 0.1, (2.0 * time).sin() * 0.05, 0.0),
        );

        for side in Side::BOTH {
            let hip = body.transform_point(side.mirror(self.config.hip_offset));
            let ankle = self.state.gait.foot(side).position(self.config.step_height);
            self.pose_limb(self.rig.leg(side), Limb::Leg, ankle - hip, forward);
            self.skeleton.set_rotation(self.rig.foot(side), yaw);

            let swing = self.config.arm_swing * ratio * phase.sin() * side.sign();
            let hand = body.transform_direction(side.mirror(HAND_REST) + Vec3::Z * swing);
            self.pose_limb(self.rig.arm(side), Limb::Arm, hand, -forward);
        }

        self.skeleton.compute();
    }

    /// Solves one two-segment limb towards `target` (relative to its root
    /// joint) and writes absolute rotations to its bones.
    fn pose_limb(&mut self, bones: LimbBones, limb: Limb, target: Vec3, pull: Vec3) {
        let chain = match limb {
            Limb::Leg => &self.leg_chain,
            Limb::Arm => &self.arm_chain,
        };
        let target = if target.length_squared() < 1e-8 {
            Vec3::NEG_Y * 1e-3
        } else {
            target
        };

        let joints = FabrikSolver::solve(chain, target, pull);
        let rotations = rotations_between(joints.points(), pull);
        self.skeleton
            .set_rotation(bones.upper, Quat::from_mat3(&rotations[0]));
        self.skeleton
            .set_rotation(bones.lower, Quat::from_mat3(&rotations[1]));
    }

    /// Local-to-world matrix per bone, indexed by bone id.
    pub fn bone_matrices(&self) -> Vec<Mat4> {
        self.skeleton.bones().iter().map(Bone::matrix).collect()
    }

    /// World-to-local matrix per bone, indexed by bone id.
    pub fn bone_inverses(&self) -> Vec<Mat4> {
        self.skeleton.bones().iter().map(Bone::inverse).collect()
    }

    pub fn write_matrices(&self, out: &mut Vec<BoneMatrices>) {
        self.skeleton.write_matrices(out);
    }

    pub fn bounds(&self) -> Aabb {
        self.body.bounds(&self.bone_matrices())
    }

    /// Current ankle position of each foot in world space.
    pub fn ankle(&self, side: Side) -> Vec3 {
        self.skeleton.bone(self.rig.foot(side)).world_position()
    }
}

#[derive(Debug, Clone, Copy)]
enum Limb {
    Leg,
    Arm,
}
