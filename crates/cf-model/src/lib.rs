//! cf-model: state-space models of the series RLC circuit.
//!
//! Builds the continuous-time model from the component values and converts
//! it to a discrete-time equivalent by zero-order-hold discretization.

pub mod circuit;
pub mod discretize;
pub mod error;
pub mod state_space;

pub use circuit::{CircuitParams, InitialState};
pub use discretize::build_discrete_model;
pub use error::{ModelError, ModelResult};
pub use state_space::{ContinuousStateSpace, DiscreteStateSpace, StateVector};
