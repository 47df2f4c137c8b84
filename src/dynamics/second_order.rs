use glam::{Vec2, Vec3};
use std::f32::consts::PI;
use std::ops::{Add, Mul, Sub};

/// Values a [`SecondOrderDynamics`] can follow.
pub trait Smoothable:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
    const ZERO: Self;
}

impl Smoothable for f32 {
    const ZERO: Self = 0.0;
}

impl Smoothable for Vec2 {
    const ZERO: Self = Vec2::ZERO;
}

impl Smoothable for Vec3 {
    const ZERO: Self = Vec3::ZERO;
}

/// Natural frequency `f` (Hz), damping ratio `z` and initial response `r`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub frequency: f32,
    pub damping: f32,
    pub response: f32,
}

impl SpringParams {
    /// Critically damped, no overshoot. Used for walking velocity.
    pub const SMOOTH: Self = Self::new(2.0, 1.0, 0.0);
    /// Quick with a slight shoot-through. Used for heading changes.
    pub const SNAPPY: Self = Self::new(4.0, 0.5, 2.0);
    /// Under-damped bob. Used for body sway.
    pub const BOUNCY: Self = Self::new(3.0, 0.3, 1.0);

    pub const fn new(frequency: f32, damping: f32, response: f32) -> Self {
        Self {
            frequency,
            damping,
            response,
        }
    }

    fn constants(&self) -> (f32, f32, f32) {
        let (f, z, r) = (self.frequency, self.damping, self.response);
        let w = 2.0 * PI * f;
        (z / (PI * f), 1.0 / (w * w), r * z / (PI * f))
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::SMOOTH
    }
}

/// Semi-implicit Euler follower of a moving input `x`.
///
/// `k2` is clamped per step so large `dt` values stay stable.
#[derive(Debug, Clone, Copy)]
pub struct SecondOrderDynamics<T: Smoothable> {
    value: T,
    velocity: T,
    previous_input: T,
    k1: f32,
    k2: f32,
    k3: f32,
}

impl<T: Smoothable> SecondOrderDynamics<T> {
    pub fn new(params: SpringParams, initial: T) -> Self {
        let (k1, k2, k3) = params.constants();
        Self {
            value: initial,
            velocity: T::ZERO,
            previous_input: initial,
            k1,
            k2,
            k3,
        }
    }

    /// Advances by `dt` seconds towards `input`. A non-positive or NaN `dt`
    /// leaves the state untouched.
    pub fn update(&mut self, input: T, dt: f32) -> T {
        if dt.is_nan() || dt <= 0.0 {
            return self.value;
        }

        let input_velocity = (input - self.previous_input) * (1.0 / dt);
        self.previous_input = input;

        let k2 = self
            .k2
            .max(dt * dt / 2.0 + dt * self.k1 / 2.0)
            .max(dt * self.k1);

        self.value = self.value + self.velocity * dt;

        let accel = (input + input_velocity * self.k3 - self.value - self.velocity * self.k1) * (1.0 / k2);
        self.velocity = self.velocity + accel * dt;

        self.value
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn velocity(&self) -> T {
        self.velocity
    }
}
