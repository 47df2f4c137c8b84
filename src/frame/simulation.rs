use super::snapshot::FrameSnapshot;
use crate::creature::{Creature, MoveInput};
use crate::scene::{Environment, SceneView};
use glam::Vec3;

/// Point light circling above the creature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightOrbit {
    pub radius: f32,
    pub height: f32,
    /// Fixed offset along +Z.
    pub depth: f32,
    /// Radians per second.
    pub speed: f32,
}

impl Default for LightOrbit {
    fn default() -> Self {
        Self {
            radius: 3.0,
            height: 6.0,
            depth: 4.0,
            speed: 1.0,
        }
    }
}

impl LightOrbit {
    pub fn position(&self, time: f32, center: Vec3) -> Vec3 {
        let a = time * self.speed;
        center
            + Vec3::new(
                a.cos() * self.radius,
                self.height + a.sin() * self.radius,
                self.depth,
            )
    }
}

/// Single-threaded owner of the mutable scene state.
#[derive(Debug, Clone)]
pub struct Simulation {
    creature: Creature,
    environment: Environment,
    light: LightOrbit,
    time: f32,
    frames: u64,
}

impl Simulation {
    pub fn new(creature: Creature, environment: Environment) -> Self {
        Self {
            creature,
            environment,
            light: LightOrbit::default(),
            time: 0.0,
            frames: 0,
        }
    }

    pub fn with_light(mut self, light: LightOrbit) -> Self {
        self.light = light;
        self
    }

    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advances the creature by `dt` and captures the resulting frame.
    pub fn step(&mut self, dt: f32, input: MoveInput) -> FrameSnapshot {
        let dt = dt.max(0.0);
        self.creature.update(dt, input);
        self.time += dt;
        self.frames += 1;
        self.snapshot()
    }

    /// Captures the current state without advancing it.
    pub fn snapshot(&self) -> FrameSnapshot {
        let light = self.light.position(self.time, self.creature.state().position);
        FrameSnapshot::capture(self.frames, self.time, light, &self.creature, &self.environment)
    }

    pub fn scene<'a>(&'a self, frame: &'a FrameSnapshot) -> SceneView<'a> {
        frame.scene(self.creature.body(), &self.environment)
    }
}
