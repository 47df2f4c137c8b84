//! # ik-raymarch
//!
//! A procedurally animated biped posed with FABRIK inverse kinematics and
//! rendered by sphere tracing a signed distance field.
//!
//! ## Features
//! - FABRIK chain solver with a fixed iteration count and a bend-plane pull
//! - Bone arena computing inverse matrices first, for per-sample evaluation
//! - SDF primitives with colour-carrying hard and smooth unions
//! - AABB-culled ray marching with soft shadows, fog and outlines
//! - Per-pixel parallel rendering over an immutable frame snapshot
//!
//! ## Example
//! ```rust,no_run
//! use ik_raymarch::creature::{Creature, CreatureConfig, MoveInput};
//! use ik_raymarch::frame::Simulation;
//! use ik_raymarch::march::QualityTier;
//! use ik_raymarch::render::{Camera, Renderer};
//! use ik_raymarch::scene::Environment;
//!
//! let creature = Creature::new(CreatureConfig::default()).unwrap();
//! let mut sim = Simulation::new(creature, Environment::default());
//!
//! let frame = sim.step(1.0 / 30.0, MoveInput::new(0.0, 1.0));
//! let camera = Camera::default().with_aspect_of(160, 90);
//! let image = Renderer::for_tier(QualityTier::Low).render(&sim.scene(&frame), &camera, &frame, 160, 90);
//! assert_eq!(image.rgba.len(), 160 * 90 * 4);
//! ```

pub mod accel;
pub mod config;
pub mod creature;
pub mod dynamics;
pub mod frame;
pub mod ik;
pub mod march;
pub mod math;
pub mod render;
pub mod scene;
pub mod sdf;
pub mod skeleton;

pub use accel::{sort_hits, Aabb, AabbHit, AabbList, Ray, AABB_CAPACITY};
pub use config::{ConfigError, RenderConfig};
pub use creature::{Creature, CreatureConfig, CreatureError, MoveInput};
pub use dynamics::{SecondOrderDynamics, SpringParams};
pub use frame::{FrameSnapshot, Simulation};
pub use ik::{angles_between, rotations_between, Chain, ChainError, FabrikSolver, JointSequence};
pub use march::{MarchConfig, MarchOutcome, MarchResult, QualityTier, RayMarcher};
pub use math::Transform;
pub use render::{Camera, FrameImage, Renderer, Shader, ShadingConfig};
pub use scene::{DistanceField, Environment, SceneView};
pub use sdf::{smooth_union, subtraction, union, Shape};
pub use skeleton::{Bone, BoneConfig, BoneId, BoneMatrices, Skeleton, SkeletonError};
