//! cf-sim: input waveforms and discrete trajectory simulation.
//!
//! Consumes a discrete model from cf-model and runs the linear recurrence
//! over a materialized input sequence.

pub mod error;
pub mod input;
pub mod response;

pub use error::{SimError, SimResult};
pub use input::{InputKind, time_grid};
pub use response::{Response, SimOptions, respond, simulate};
