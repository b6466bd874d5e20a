//! Zero-order-hold discretization of the continuous model.

use nalgebra::Matrix3;

use crate::circuit::CircuitParams;
use crate::error::{ModelError, ModelResult};
use crate::state_space::{ContinuousStateSpace, DiscreteStateSpace};

impl ContinuousStateSpace {
    /// Discretize for sample interval `dt` under a zero-order hold.
    ///
    /// Forms the augmented matrix M = [[A, B], [0, 0]] and computes
    /// E = expm(M dt); the top-left 2x2 block of E is Ad and its top-right
    /// column is Bd. Cd and Dd are unchanged. The conversion is exact for
    /// input held constant over each interval, which is how the simulator
    /// applies it.
    pub fn to_discrete(&self, dt: f64) -> ModelResult<DiscreteStateSpace> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ModelError::InvalidParameter {
                what: "sample interval must be positive (s)",
                value: dt,
            });
        }

        let mut m = Matrix3::zeros();
        m.fixed_view_mut::<2, 2>(0, 0).copy_from(&self.a);
        m.fixed_view_mut::<2, 1>(0, 2).copy_from(&self.b);

        let e = (m * dt).exp();
        if e.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::Numeric {
                what: "matrix exponential did not converge",
            });
        }

        Ok(DiscreteStateSpace {
            ad: e.fixed_view::<2, 2>(0, 0).into_owned(),
            bd: e.fixed_view::<2, 1>(0, 2).into_owned(),
            cd: self.c,
            dd: self.d,
            dt,
        })
    }
}

/// Build the discrete-time model of a circuit at sample interval `dt`.
///
/// This is the composed model-builder entry point: continuous matrices from
/// the component values, then exact ZOH conversion.
pub fn build_discrete_model(params: &CircuitParams, dt: f64) -> ModelResult<DiscreteStateSpace> {
    params.state_space().to_discrete(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Matrix2;
    use proptest::prelude::*;

    fn demo() -> ContinuousStateSpace {
        CircuitParams::from_si(3.0, 1.0, 0.5).unwrap().state_space()
    }

    #[test]
    fn small_steps_reduce_to_the_continuous_matrices() {
        // First-order Taylor check: Ad ~ I + A dt, Bd ~ B dt for tiny dt.
        let sys = demo();
        let dt = 1e-6;
        let disc = sys.to_discrete(dt).unwrap();

        let ad_taylor = Matrix2::identity() + sys.a * dt;
        let bd_taylor = sys.b * dt;

        for (got, want) in disc.ad.iter().zip(ad_taylor.iter()) {
            assert!((got - want).abs() < 1e-10, "Ad entry {got} vs {want}");
        }
        for (got, want) in disc.bd.iter().zip(bd_taylor.iter()) {
            assert!((got - want).abs() < 1e-10, "Bd entry {got} vs {want}");
        }
    }

    #[test]
    fn output_matrices_pass_through_unchanged() {
        let sys = demo();
        let disc = sys.to_discrete(0.1).unwrap();
        assert_eq!(disc.cd, sys.c);
        assert_eq!(disc.dd, sys.d);
        assert_eq!(disc.dt, 0.1);
    }

    #[test]
    fn non_positive_sample_intervals_are_rejected() {
        let sys = demo();
        assert!(sys.to_discrete(0.0).is_err());
        assert!(sys.to_discrete(-0.1).is_err());
        assert!(sys.to_discrete(f64::NAN).is_err());
    }

    #[test]
    fn discretization_is_deterministic() {
        let sys = demo();
        let a = sys.to_discrete(0.1).unwrap();
        let b = sys.to_discrete(0.1).unwrap();
        assert_eq!(a.ad, b.ad);
        assert_eq!(a.bd, b.bd);
    }

    proptest! {
        #[test]
        fn taylor_limit_holds_for_valid_components(
            r in 0.1_f64..10.0,
            l in 0.1_f64..10.0,
            c in 0.1_f64..10.0,
        ) {
            let sys = CircuitParams::from_si(r, l, c).unwrap().state_space();
            let dt = 1e-6;
            let disc = sys.to_discrete(dt).unwrap();

            let ad_taylor = Matrix2::identity() + sys.a * dt;
            for (got, want) in disc.ad.iter().zip(ad_taylor.iter()) {
                prop_assert!((got - want).abs() < 1e-8);
            }
        }
    }
}
