use crate::dynamics::SpringParams;
use glam::Vec3;

/// Proportions and gait tuning for one biped.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureConfig {
    /// Thigh then shin.
    pub leg_lengths: [f32; 2],
    /// Upper arm then forearm.
    pub arm_lengths: [f32; 2],
    /// Hip joint offset from the body bone, right side; the left side mirrors X.
    pub hip_offset: Vec3,
    pub shoulder_offset: Vec3,
    pub neck_offset: Vec3,
    /// Body bone height above the ground when standing still.
    pub hip_height: f32,
    /// Ankle height above the ground when a foot is planted.
    pub ankle_height: f32,

    pub max_speed: f32,
    /// Planted foot drift that triggers a step while walking.
    pub step_threshold: f32,
    /// Planted foot drift that triggers a corrective step while idle.
    pub settle_threshold: f32,
    pub step_duration: f32,
    pub step_height: f32,
    /// Seconds of velocity the desired foot placement leads the hip by.
    pub step_lead: f32,
    /// Forward lean in radians at full speed.
    pub max_lean: f32,
    pub bob_height: f32,
    pub arm_swing: f32,

    pub velocity_spring: SpringParams,
    pub heading_spring: SpringParams,

    pub skin_color: Vec3,
    pub backpack_color: Vec3,
    pub eye_color: Vec3,
    /// Blend radius between body parts.
    pub blend_radius: f32,
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self {
            leg_lengths: [0.8, 0.8],
            arm_lengths: [0.7, 0.7],
            hip_offset: Vec3::new(0.3, 0.0, 0.0),
            shoulder_offset: Vec3::new(0.7, 1.25, 0.0),
            neck_offset: Vec3::new(0.0, 1.9, 0.0),
            hip_height: 1.45,
            ankle_height: 0.12,

            max_speed: 1.6,
            step_threshold: 0.35,
            settle_threshold: 0.06,
            step_duration: 0.25,
            step_height: 0.25,
            step_lead: 0.2,
            max_lean: 0.15,
            bob_height: 0.06,
            arm_swing: 0.45,

            velocity_spring: SpringParams::SMOOTH,
            heading_spring: SpringParams::SNAPPY,

            skin_color: Vec3::new(0.8, 0.6, 0.2),
            backpack_color: Vec3::new(0.2, 0.4, 0.6),
            eye_color: Vec3::ZERO,
            blend_radius: 0.1,
        }
    }
}

impl CreatureConfig {
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_palette(mut self, skin: Vec3, backpack: Vec3) -> Self {
        self.skin_color = skin;
        self.backpack_color = backpack;
        self
    }

    pub fn with_step(mut self, duration: f32, height: f32, threshold: f32) -> Self {
        self.step_duration = duration;
        self.step_height = height;
        self.step_threshold = threshold;
        self
    }
}
