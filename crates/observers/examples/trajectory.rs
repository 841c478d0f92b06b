//! Prints a thinned trajectory of the unit harmonic oscillator.
//!
//! # Usage
//!
//! ```text
//! cargo run --example trajectory
//! cargo run --example trajectory -- 0.2
//! ```
//!
//! The optional argument is the step size (default `0.1`). The table shows the
//! RK4 state next to the exact solution `(sin t, cos t)` and the energy
//! `x² + v²`, which drifts slowly away from 1 as the step grows.

use std::{error::Error, f64::consts::PI, num::NonZeroUsize};

use stepwise_core::{HarmonicOscillator, Problem};
use stepwise_observers::Trajectory;
use stepwise_solvers::rk4::{self, Config};

fn main() -> Result<(), Box<dyn Error>> {
    let dt = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()?
        .unwrap_or(0.1);

    let problem = Problem::new(0.0, [0.0, 1.0], dt, 12.0 * PI)?;
    let stride = NonZeroUsize::new(20).ok_or("stride must be non-zero")?;
    let mut trajectory = Trajectory::every(stride);

    let solution = rk4::solve(
        &HarmonicOscillator::default(),
        &problem,
        &Config::default(),
        &mut trajectory,
    )?;

    println!(
        "{:>6} {:>10} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "step", "t", "x", "v", "sin t", "cos t", "x² + v²"
    );
    for point in trajectory.points() {
        let [x, v] = [point.state[0], point.state[1]];
        println!(
            "{:>6} {:>10.4} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12.9}",
            point.step,
            point.t,
            x,
            v,
            point.t.sin(),
            point.t.cos(),
            x * x + v * v,
        );
    }

    println!(
        "\nfinal: t = {:.6} after {} steps, state = {:?}",
        solution.t, solution.steps, solution.state
    );

    Ok(())
}
