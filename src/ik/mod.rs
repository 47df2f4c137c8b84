//! Inverse Kinematics module
//!
//! Fixed-iteration FABRIK solver over chains of rigid segments, plus the
//! helpers that turn solved joint positions into bone orientations.

pub mod chain;
pub mod rotation;
pub mod solver;

pub use chain::{Chain, ChainBuilder, ChainError};
pub use rotation::{angles_between, rotations_between};
pub use solver::{FabrikSolver, JointSequence, SOLVER_ITERATIONS};
