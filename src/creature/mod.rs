//! Procedurally animated biped.
//!
//! A [`Creature`] owns its skeleton and per-instance [`CreatureState`]. Each
//! update turns movement input into a smoothed velocity, plants and lifts
//! feet in alternation, solves arms and legs with the FABRIK solver and
//! recomputes bone matrices. [`CreatureBody`] then describes the surface
//! attached to those bones.

mod body;
mod config;
mod error;
mod instance;
mod locomotion;
mod rig;

pub use body::{BodyPart, CreatureBody, Palette, PartKind};
pub use config::CreatureConfig;
pub use error::CreatureError;
pub use instance::{Creature, CreatureState};
pub use locomotion::{Foot, FootStep, Gait, MoveInput};
pub use rig::{descriptors, LimbBones, Rig, Side, BODY, HEAD};
