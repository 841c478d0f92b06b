//! Integrates the unit harmonic oscillator over six periods.
//!
//! # Usage
//!
//! ```text
//! cargo run --example oscillator
//! cargo run --example oscillator -- 0.01
//! ```
//!
//! Solves `(t0, x0, v0, tmax) = (0, 0, 1, 12π)` with the given step (default
//! `0.1`) and prints the final `[x, v]`, which should be close to `[0, 1]`.
//! Both horizon policies are shown: the default overshoots `12π` by up to one
//! step, the clamped run ends exactly on it.

use std::{error::Error, f64::consts::PI, time::Instant};

use stepwise_core::{HarmonicOscillator, OscillatorProblem, Problem};
use stepwise_solvers::rk4::{self, Config, Horizon};

fn main() -> Result<(), Box<dyn Error>> {
    let dt = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()?
        .unwrap_or(0.1);

    let row = OscillatorProblem {
        t0: 0.0,
        x0: 0.0,
        v0: 1.0,
        tmax: 12.0 * PI,
        dt,
    };

    let start = Instant::now();
    let [x, v] = rk4::integrate(row)?;
    println!("[{x:.12} {v:.12}]  ({:?})", start.elapsed());

    let problem = Problem::try_from(row)?;
    let field = HarmonicOscillator::default();
    for horizon in [Horizon::Overshoot, Horizon::Clamp] {
        let config = Config::default().with_horizon(horizon);
        let solution = rk4::solve_unobserved(&field, &problem, &config)?;
        println!(
            "{horizon:?}: t = {:.12} (tmax = {:.12}), {} steps, state = {:?}",
            solution.t,
            problem.tmax(),
            solution.steps,
            solution.state,
        );
    }

    Ok(())
}
