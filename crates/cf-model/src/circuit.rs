//! Series RLC circuit parameters and initial energy-storage state.

use cf_core::ensure_finite;
use cf_core::units::{
    Capacitance, Current, Inductance, Resistance, Voltage, ampere, farad, henry, ohm, volt,
};
use nalgebra::{Matrix2, RowVector2, Vector2};

use crate::error::{ModelError, ModelResult};
use crate::state_space::{ContinuousStateSpace, StateVector};

/// Component values of a series RLC circuit driven by a current source.
///
/// The three values fully determine the continuous dynamics. They are
/// validated once at construction (finite and strictly positive) and
/// immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircuitParams {
    resistance: Resistance,
    inductance: Inductance,
    capacitance: Capacitance,
}

impl CircuitParams {
    /// Create validated circuit parameters.
    pub fn new(
        resistance: Resistance,
        inductance: Inductance,
        capacitance: Capacitance,
    ) -> ModelResult<Self> {
        let r = ensure_finite(resistance.value, "resistance (ohm)")?;
        let l = ensure_finite(inductance.value, "inductance (H)")?;
        let c = ensure_finite(capacitance.value, "capacitance (F)")?;

        if r <= 0.0 {
            return Err(ModelError::InvalidParameter {
                what: "resistance must be positive (ohm)",
                value: r,
            });
        }
        if l <= 0.0 {
            return Err(ModelError::InvalidParameter {
                what: "inductance must be positive (H)",
                value: l,
            });
        }
        if c <= 0.0 {
            return Err(ModelError::InvalidParameter {
                what: "capacitance must be positive (F)",
                value: c,
            });
        }

        Ok(Self {
            resistance,
            inductance,
            capacitance,
        })
    }

    /// Convenience constructor from raw SI magnitudes (ohm, henry, farad).
    pub fn from_si(r_ohm: f64, l_henry: f64, c_farad: f64) -> ModelResult<Self> {
        Self::new(ohm(r_ohm), henry(l_henry), farad(c_farad))
    }

    pub fn resistance(&self) -> Resistance {
        self.resistance
    }

    pub fn inductance(&self) -> Inductance {
        self.inductance
    }

    pub fn capacitance(&self) -> Capacitance {
        self.capacitance
    }

    /// Continuous state-space matrices for state x = [vc; il] and the
    /// source current as input:
    ///
    /// ```text
    /// A = | 0    -1/C |    B = | 1/C |    C = | 0  R |    D = | 0 |
    ///     | 1/L  -R/L |        | 0   |
    /// ```
    pub fn state_space(&self) -> ContinuousStateSpace {
        let r = self.resistance.value;
        let l = self.inductance.value;
        let c = self.capacitance.value;

        ContinuousStateSpace {
            a: Matrix2::new(0.0, -1.0 / c, 1.0 / l, -r / l),
            b: Vector2::new(1.0 / c, 0.0),
            c: RowVector2::new(0.0, r),
            d: 0.0,
        }
    }
}

/// Initial capacitor voltage and inductor current.
///
/// Any finite values are accepted; no physical validity check is performed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialState {
    pub capacitor_voltage: Voltage,
    pub inductor_current: Current,
}

impl InitialState {
    pub fn new(capacitor_voltage: Voltage, inductor_current: Current) -> Self {
        Self {
            capacitor_voltage,
            inductor_current,
        }
    }

    /// Convenience constructor from raw SI magnitudes (volt, ampere).
    pub fn from_si(vc_volt: f64, il_ampere: f64) -> Self {
        Self::new(volt(vc_volt), ampere(il_ampere))
    }

    /// State vector x0 = [vc; il].
    pub fn to_vector(&self) -> StateVector {
        Vector2::new(self.capacitor_voltage.value, self.inductor_current.value)
    }
}

impl Default for InitialState {
    fn default() -> Self {
        Self::from_si(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrices_follow_the_component_values() {
        let params = CircuitParams::from_si(3.0, 1.0, 0.5).unwrap();
        let sys = params.state_space();

        assert_eq!(sys.a, Matrix2::new(0.0, -2.0, 1.0, -3.0));
        assert_eq!(sys.b, Vector2::new(2.0, 0.0));
        assert_eq!(sys.c, RowVector2::new(0.0, 3.0));
        assert_eq!(sys.d, 0.0);
    }

    #[test]
    fn non_positive_components_are_rejected() {
        assert!(CircuitParams::from_si(0.0, 1.0, 0.5).is_err());
        assert!(CircuitParams::from_si(-3.0, 1.0, 0.5).is_err());
        assert!(CircuitParams::from_si(3.0, 0.0, 0.5).is_err());
        assert!(CircuitParams::from_si(3.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn non_finite_components_are_rejected() {
        assert!(CircuitParams::from_si(f64::NAN, 1.0, 0.5).is_err());
        assert!(CircuitParams::from_si(3.0, f64::INFINITY, 0.5).is_err());
    }

    #[test]
    fn initial_state_maps_to_vector() {
        let x0 = InitialState::from_si(2.0, -0.5);
        assert_eq!(x0.to_vector(), Vector2::new(2.0, -0.5));
        assert_eq!(InitialState::default().to_vector(), Vector2::zeros());
    }
}
