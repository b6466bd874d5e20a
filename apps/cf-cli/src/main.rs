use std::time::Instant;

use cf_core::units::{ampere, farad, henry, ohm, volt};
use cf_model::{CircuitParams, InitialState};
use cf_plot::TracePlot;
use cf_sim::{InputKind, Response, SimOptions, respond};
use clap::{Parser, ValueEnum};
use thiserror::Error;

/// Simulate the time response of a series RLC circuit driven by a current
/// source.
#[derive(Parser)]
#[command(name = "cf-cli")]
#[command(about = "Circuitflow CLI - series RLC circuit response simulator", long_about = None)]
struct Cli {
    /// Resistance in ohms
    #[arg(short = 'r', long, default_value_t = 3.0)]
    resistance: f64,

    /// Capacitance in farads
    #[arg(short = 'c', long, default_value_t = 0.5)]
    capacitance: f64,

    /// Inductance in henries
    #[arg(short = 'i', long, default_value_t = 1.0)]
    inductance: f64,

    /// Input waveform of the current source
    #[arg(short = 'u', long = "input", value_enum, default_value_t = InputArg::Step)]
    input: InputArg,

    /// Initial capacitor voltage in volts
    #[arg(long, default_value_t = 0.0)]
    vc: f64,

    /// Initial inductor current in amperes
    #[arg(long, default_value_t = 0.0)]
    il: f64,

    /// Time step for simulation in seconds
    #[arg(long = "step", default_value_t = 0.1)]
    step: f64,

    /// Total simulation time in seconds
    #[arg(long, default_value_t = 10.0)]
    simtime: f64,

    /// Print the result summary without opening the plot window
    #[arg(long)]
    no_plot: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum InputArg {
    Step,
    Impulse,
}

impl From<InputArg> for InputKind {
    fn from(arg: InputArg) -> Self {
        match arg {
            InputArg::Step => InputKind::Step,
            InputArg::Impulse => InputKind::Impulse,
        }
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error("model error: {0}")]
    Model(#[from] cf_model::ModelError),

    #[error("simulation error: {0}")]
    Sim(#[from] cf_sim::SimError),

    #[error("plot error: {0}")]
    Plot(#[from] eframe::Error),
}

fn main() -> Result<(), CliError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let kind: InputKind = cli.input.into();

    print_run_parameters(&cli, kind);

    let params = CircuitParams::new(
        ohm(cli.resistance),
        henry(cli.inductance),
        farad(cli.capacitance),
    )?;
    let x0 = InitialState::new(volt(cli.vc), ampere(cli.il));
    let opts = SimOptions {
        dt: cli.step,
        t_end: cli.simtime,
    };

    let start = Instant::now();
    let response = respond(&params, &x0, kind, &opts)?;
    let elapsed = start.elapsed().as_secs_f64();

    println!("✓ Simulation completed");
    println!("  Time points: {}", response.t.len());
    println!("  Elapsed: {:.3}s", elapsed);

    if !cli.no_plot {
        show_plot(&response, kind)?;
    }

    Ok(())
}

fn print_run_parameters(cli: &Cli, kind: InputKind) {
    println!("Simulation parameters:");
    println!("  R = {} ohm", cli.resistance);
    println!("  L = {} H", cli.inductance);
    println!("  C = {} F", cli.capacitance);
    println!("  input: {}", kind);
    println!("  vc0 = {} V", cli.vc);
    println!("  il0 = {} A", cli.il);
    println!("  time step: {} s", cli.step);
    println!("  simulation time: {} s", cli.simtime);
    println!();
}

fn show_plot(response: &Response, kind: InputKind) -> Result<(), eframe::Error> {
    // Plotted input starts at zero so the edge at t = 0 is visible; the
    // computed trajectory is untouched.
    let mut u_display = response.u.clone();
    if let Some(first) = u_display.first_mut() {
        *first = 0.0;
    }

    let vc: Vec<f64> = response.x.iter().map(|x| x[0]).collect();
    let il: Vec<f64> = response.x.iter().map(|x| x[1]).collect();

    let title = match kind {
        InputKind::Step => "Step response of circuit",
        InputKind::Impulse => "Impulse response of circuit",
    };

    TracePlot::new(title)
        .x_label("Time (s)")
        .with_series("Input current (A)", &response.t, &u_display)
        .with_series("Output voltage (V)", &response.t, &response.y)
        .with_series("Voltage of the capacitor (V)", &response.t, &vc)
        .with_series("Current of the inductor (A)", &response.t, &il)
        .show()
}
