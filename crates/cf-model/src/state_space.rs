//! Fixed-size state-space representations.
//!
//! The series RLC circuit has two states, one input, and one output, so the
//! matrices use nalgebra's statically sized types throughout. No
//! dynamic-size generality is needed; every call returns freshly owned
//! values.

use nalgebra::{Matrix2, RowVector2, Vector2};

/// State vector [capacitor voltage (V); inductor current (A)].
pub type StateVector = Vector2<f64>;

/// Continuous-time model dx/dt = A x + B u, y = C x + D u.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousStateSpace {
    /// State matrix (2x2).
    pub a: Matrix2<f64>,
    /// Input matrix (2x1).
    pub b: Vector2<f64>,
    /// Output matrix (1x2).
    pub c: RowVector2<f64>,
    /// Feedthrough (1x1, stored as a scalar).
    pub d: f64,
}

/// Discrete-time model x[k+1] = Ad x[k] + Bd u[k], y[k] = Cd x[k] + Dd u[k],
/// valid for one fixed sample interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscreteStateSpace {
    /// Discrete state matrix (2x2).
    pub ad: Matrix2<f64>,
    /// Discrete input matrix (2x1).
    pub bd: Vector2<f64>,
    /// Output matrix, unchanged by discretization.
    pub cd: RowVector2<f64>,
    /// Feedthrough, unchanged by discretization.
    pub dd: f64,
    /// Sample interval (s) the matrices are valid for.
    pub dt: f64,
}

impl DiscreteStateSpace {
    /// Output equation y[k] = Cd x[k] + Dd u[k].
    pub fn output(&self, x: &StateVector, u: f64) -> f64 {
        (self.cd * x)[(0, 0)] + self.dd * u
    }

    /// State update x[k+1] = Ad x[k] + Bd u[k].
    pub fn advance(&self, x: &StateVector, u: f64) -> StateVector {
        self.ad * x + self.bd * u
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_and_advance_apply_the_recurrence() {
        let model = DiscreteStateSpace {
            ad: Matrix2::new(1.0, 0.0, 0.0, 2.0),
            bd: Vector2::new(0.5, 0.0),
            cd: RowVector2::new(0.0, 3.0),
            dd: 1.0,
            dt: 0.1,
        };
        let x = Vector2::new(1.0, 2.0);

        assert_eq!(model.output(&x, 0.5), 3.0 * 2.0 + 1.0 * 0.5);
        assert_eq!(model.advance(&x, 2.0), Vector2::new(1.0 + 1.0, 4.0));
    }
}
