//! Scalar helpers shared across the workspace.

use crate::CfError;

/// Floating point type used throughout the workspace.
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerance {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerance {
    /// True when `a` and `b` agree within this tolerance.
    pub fn close(&self, a: Real, b: Real) -> bool {
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * a.abs().max(b.abs())
    }
}

/// Reject NaN and infinities before they propagate into a trajectory.
pub fn ensure_finite(v: Real, context: &'static str) -> Result<Real, CfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CfError::NonFinite { context, value: v })
    }
}
