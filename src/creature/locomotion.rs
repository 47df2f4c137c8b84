//! Movement input, gait timing and alternating footsteps.

use super::rig::Side;
use crate::math::smoothstep;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Desired planar movement for one frame.
///
/// `direction.x` maps to world X and `direction.y` to world Z. Lengths above
/// one are clamped so diagonals are not faster.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveInput {
    pub direction: Vec2,
}

impl MoveInput {
    pub const IDLE: Self = Self {
        direction: Vec2::ZERO,
    };

    pub fn new(x: f32, z: f32) -> Self {
        Self {
            direction: Vec2::new(x, z),
        }
    }

    pub fn desired_velocity(&self, max_speed: f32) -> Vec3 {
        let d = self.direction.clamp_length_max(1.0) * max_speed;
        Vec3::new(d.x, 0.0, d.y)
    }
}

/// A foot in flight between two ground positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootStep {
    pub from: Vec3,
    /// Updated every frame so the landing spot tracks the moving body.
    pub to: Vec3,
    /// 0 at lift-off, 1 at landing.
    pub progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Foot {
    pub planted: Vec3,
    pub step: Option<FootStep>,
}

impl Foot {
    pub fn planted_at(position: Vec3) -> Self {
        Self {
            planted: position,
            step: None,
        }
    }

    pub fn is_stepping(&self) -> bool {
        self.step.is_some()
    }

    /// Current ankle position, lifted by up to `lift` mid-step.
    pub fn position(&self, lift: f32) -> Vec3 {
        match self.step {
            None => self.planted,
            Some(step) => {
                let t = smoothstep(0.0, 1.0, step.progress);
                step.from.lerp(step.to, t) + Vec3::Y * (PI * step.progress).sin() * lift
            }
        }
    }
}

/// Two feet that take turns stepping.
#[derive(Debug, Clone, PartialEq)]
pub struct Gait {
    feet: [Foot; 2],
    next: Side,
    steps_taken: u32,
}

impl Gait {
    pub fn new(left: Vec3, right: Vec3) -> Self {
        Self {
            feet: [Foot::planted_at(left), Foot::planted_at(right)],
            next: Side::Left,
            steps_taken: 0,
        }
    }

    pub fn foot(&self, side: Side) -> &Foot {
        &self.feet[side.index()]
    }

    /// Side that gets the next step unless only the other foot has drifted.
    pub fn next_side(&self) -> Side {
        self.next
    }

    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    /// Advances any step in flight, then starts a new one if a planted foot
    /// has drifted more than `threshold` from `desired`.
    ///
    /// At most one foot is in the air at a time. Returns the side that lifted
    /// off during this update.
    pub fn update(&mut self, desired: [Vec3; 2], threshold: f32, duration: f32, dt: f32) -> Option<Side> {
        let rate = dt / duration.max(1e-3);
        for side in Side::BOTH {
            let foot = &mut self.feet[side.index()];
            if let Some(step) = foot.step.as_mut() {
                step.to = desired[side.index()];
                step.progress += rate;
                if step.progress >= 1.0 {
                    foot.planted = step.to;
                    foot.step = None;
                }
            }
        }

        if self.feet.iter().any(Foot::is_stepping) {
            return None;
        }

        let drift = |side: Side| {
            let d = desired[side.index()] - self.feet[side.index()].planted;
            Vec2::new(d.x, d.z).length()
        };

        let side = if drift(self.next) > threshold {
            self.next
        } else if drift(self.next.opposite()) > threshold {
            self.next.opposite()
        } else {
            return None;
        };

        let foot = &mut self.feet[side.index()];
        foot.step = Some(FootStep {
            from: foot.planted,
            to: desired[side.index()],
            progress: 0.0,
        });
        self.next = side.opposite();
        self.steps_taken += 1;
        Some(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn input_is_clamped_to_unit_length() {
        let v = MoveInput::new(3.0, 4.0).desired_velocity(2.0);
        assert!((v.length() - 2.0).abs() < 1e-5);
        assert_eq!(v.y, 0.0);
        assert_eq!(MoveInput::IDLE.desired_velocity(2.0), Vec3::ZERO);
    }

    #[test]
    fn step_arcs_and_lands() {
        let mut foot = Foot::planted_at(Vec3::ZERO);
        foot.step = Some(FootStep {
            from: Vec3::ZERO,
            to: Vec3::new(0.0, 0.0, 1.0),
            progress: 0.5,
        });
        let mid = foot.position(0.25);
        assert!((mid - Vec3::new(0.0, 0.25, 0.5)).length() < 1e-5);
    }

    #[test]
    fn feet_stay_planted_within_threshold() {
        let mut gait = Gait::new(Vec3::new(-0.3, 0.0, 0.0), Vec3::new(0.3, 0.0, 0.0));
        let desired = [Vec3::new(-0.3, 0.0, 0.1), Vec3::new(0.3, 0.0, 0.1)];
        for _ in 0..30 {
            assert_eq!(gait.update(desired, 0.35, 0.25, DT), None);
        }
        assert_eq!(gait.steps_taken(), 0);
    }

    #[test]
    fn legs_alternate_and_never_overlap() {
        let mut gait = Gait::new(Vec3::new(-0.3, 0.0, 0.0), Vec3::new(0.3, 0.0, 0.0));
        let mut lifted = Vec::new();
        let mut z = 0.0;

        for _ in 0..240 {
            z += 1.5 * DT;
            let desired = [Vec3::new(-0.3, 0.0, z), Vec3::new(0.3, 0.0, z)];
            if let Some(side) = gait.update(desired, 0.35, 0.25, DT) {
                lifted.push(side);
            }
            let airborne = Side::BOTH.iter().filter(|s| gait.foot(**s).is_stepping()).count();
            assert!(airborne <= 1);
        }

        assert!(lifted.len() >= 4);
        for pair in lifted.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn lagging_foot_catches_up_out_of_turn() {
        let mut gait = Gait::new(Vec3::new(-0.3, 0.0, 0.0), Vec3::new(0.3, 0.0, -1.0));
        let desired = [Vec3::new(-0.3, 0.0, 0.0), Vec3::new(0.3, 0.0, 0.0)];

        assert_eq!(gait.next_side(), Side::Left);
        assert_eq!(gait.update(desired, 0.35, 0.25, DT), Some(Side::Right));
        for _ in 0..20 {
            gait.update(desired, 0.35, 0.25, DT);
        }
        assert!(!gait.foot(Side::Right).is_stepping());
        assert!((gait.foot(Side::Right).planted - desired[1]).length() < 1e-5);
    }
}
