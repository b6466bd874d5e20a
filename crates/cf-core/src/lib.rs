//! cf-core: shared foundation for circuitflow.
//!
//! Contains:
//! - units (uom SI electrical types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CfError, CfResult};
pub use numeric::*;
pub use units::*;
