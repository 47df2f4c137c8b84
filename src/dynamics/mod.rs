//! Second-order smoothing used to soften locomotion input.

mod second_order;

pub use second_order::{SecondOrderDynamics, Smoothable, SpringParams};
