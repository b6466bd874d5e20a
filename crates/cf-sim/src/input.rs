//! Input waveforms and the simulation time grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Shape of the source-current waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Constant 1 A from t = 0.
    Step,
    /// 1 A at the first sample, zero afterwards.
    Impulse,
}

impl InputKind {
    /// Materialize the waveform, one sample per grid point.
    pub fn sequence(&self, len: usize) -> Vec<f64> {
        match self {
            InputKind::Step => vec![1.0; len],
            InputKind::Impulse => {
                let mut u = vec![0.0; len];
                if let Some(first) = u.first_mut() {
                    *first = 1.0;
                }
                u
            }
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Step => write!(f, "step"),
            InputKind::Impulse => write!(f, "impulse"),
        }
    }
}

/// Uniform grid t[k] = k * dt covering [0, t_end], endpoint included by
/// stepping: floor(t_end / dt) + 1 points.
pub fn time_grid(dt: f64, t_end: f64) -> SimResult<Vec<f64>> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "dt must be positive",
        });
    }
    if !t_end.is_finite() || t_end <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "t_end must be positive",
        });
    }

    let n = (t_end / dt).floor() as usize + 1;
    Ok((0..n).map(|k| k as f64 * dt).collect())
}
