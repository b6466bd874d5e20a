//! Discrete trajectory simulation.

use cf_model::{CircuitParams, DiscreteStateSpace, InitialState, StateVector, build_discrete_model};
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::input::{InputKind, time_grid};

/// Options for a response run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimOptions {
    /// Fixed sample interval (seconds).
    pub dt: f64,
    /// Final simulation time (seconds).
    pub t_end: f64,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 0.1,
            t_end: 10.0,
        }
    }
}

/// Result of a response run: aligned time, input, output, and state
/// sequences, produced once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Response {
    /// Time points (s).
    pub t: Vec<f64>,
    /// Source current samples (A).
    pub u: Vec<f64>,
    /// Output voltage samples (V).
    pub y: Vec<f64>,
    /// State snapshots [vc; il], one per sample.
    pub x: Vec<StateVector>,
}

/// Run the linear recurrence of a discrete model over an input sequence.
///
/// x[0] = x0; for each k: y[k] = Cd x[k] + Dd u[k], x[k+1] = Ad x[k] + Bd u[k].
/// Returns the output and state sequences, index-aligned with `u`. The
/// arithmetic is plain IEEE double with no clamping; unstable parameter
/// combinations produce diverging trajectories rather than errors.
pub fn simulate(
    model: &DiscreteStateSpace,
    x0: StateVector,
    u: &[f64],
) -> SimResult<(Vec<f64>, Vec<StateVector>)> {
    if u.is_empty() {
        return Err(SimError::ShapeMismatch {
            what: "input sequence is empty",
        });
    }

    let mut y = Vec::with_capacity(u.len());
    let mut states = Vec::with_capacity(u.len());
    let mut x = x0;
    for &uk in u {
        y.push(model.output(&x, uk));
        states.push(x);
        x = model.advance(&x, uk);
    }

    Ok((y, states))
}

/// Build the discrete model, materialize the waveform on the time grid, and
/// simulate the response. This is the single call boundary the presentation
/// layer uses.
pub fn respond(
    params: &CircuitParams,
    x0: &InitialState,
    kind: InputKind,
    opts: &SimOptions,
) -> SimResult<Response> {
    let model = build_discrete_model(params, opts.dt)?;
    let t = time_grid(opts.dt, opts.t_end)?;
    let u = kind.sequence(t.len());

    tracing::debug!(samples = t.len(), input = %kind, "running response simulation");

    let (y, x) = simulate(&model, x0.to_vector(), &u)?;
    Ok(Response { t, u, y, x })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_options_defaults() {
        let opts = SimOptions::default();
        assert_eq!(opts.dt, 0.1);
        assert_eq!(opts.t_end, 10.0);
    }

    #[test]
    fn empty_input_is_a_shape_mismatch() {
        let params = CircuitParams::from_si(3.0, 1.0, 0.5).unwrap();
        let model = build_discrete_model(&params, 0.1).unwrap();
        let err = simulate(&model, StateVector::zeros(), &[]).unwrap_err();
        assert!(matches!(err, SimError::ShapeMismatch { .. }));
    }

    #[test]
    fn response_sequences_stay_aligned() {
        let params = CircuitParams::from_si(3.0, 1.0, 0.5).unwrap();
        let opts = SimOptions::default();
        let resp = respond(&params, &InitialState::default(), InputKind::Step, &opts).unwrap();

        assert_eq!(resp.t.len(), 101);
        assert_eq!(resp.u.len(), resp.t.len());
        assert_eq!(resp.y.len(), resp.t.len());
        assert_eq!(resp.x.len(), resp.t.len());
    }
}
