//! Classical fourth-order Runge-Kutta with a fixed step.
//!
//! # Algorithm
//!
//! Each step samples the derivative four times and combines the samples with
//! weights 1:2:2:1:
//!
//! ```text
//! f1 = f(t,        u)
//! f2 = f(t + dt/2, u + dt*f1/2)
//! f3 = f(t + dt/2, u + dt*f2/2)
//! f4 = f(t + dt,   u + dt*f3)
//! u' = u + dt/6 * (f1 + 2*f2 + 2*f3 + f4)
//! ```
//!
//! [`step`] and [`step_scalar`] take one step. [`solve`] repeats [`step`] with
//! a constant `dt` until the time reaches the problem's horizon, and returns
//! only the final state.
//!
//! # Horizon
//!
//! Termination is checked at step boundaries. With the default
//! [`Horizon::Overshoot`] the driver stops at `t0 + k*dt` for the smallest `k`
//! that meets or exceeds `tmax`, so the final time can lie past the horizon by
//! up to one step. [`Horizon::Clamp`] shortens the last step to land on `tmax`,
//! and treats a full step that falls a few ulps short of `tmax` as the last one.
//!
//! # Observer Events
//!
//! The driver emits an [`Event`] for the initial state (step 0) and after every
//! accepted step. Observers can return [`Action::StopEarly`] to end the run with
//! [`Status::StoppedByObserver`].
//!
//! # Example
//!
//! ```
//! use std::f64::consts::PI;
//!
//! use stepwise_core::OscillatorProblem;
//! use stepwise_solvers::rk4;
//!
//! let [x, v] = rk4::integrate(OscillatorProblem {
//!     t0: 0.0,
//!     x0: 0.0,
//!     v0: 1.0,
//!     tmax: 2.0 * PI,
//!     dt: 0.01,
//! })?;
//!
//! assert!((x * x + v * v - 1.0).abs() < 1e-6);
//! # Ok::<(), rk4::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;
mod step;


pub use action::Action;
pub use config::{Config, FiniteCheck, Horizon};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use step::{step, step_scalar};

use stepwise_core::{HarmonicOscillator, Observer, OscillatorProblem, Problem, VectorField};

/// Integrates a problem to its time horizon with fixed RK4 steps.
///
/// # Algorithm
///
/// 1. Start from `(t, u) = (t0, u0)` and emit step 0 to the observer.
/// 2. While `t < tmax`:
///    - Pick the step size (`dt`, or the remaining time under [`Horizon::Clamp`]).
///    - Advance `u` with [`step`] and set `t` to the end of the step.
///    - Under [`FiniteCheck::Strict`], fail if the new state is not finite.
///    - Emit an [`Event`]; stop if the observer returns [`Action::StopEarly`].
/// 3. Return the final time and state.
///
/// # Errors
///
/// Returns an error if the problem's dimension differs from the field's, the
/// field returns a derivative of the wrong length, the step is too small to
/// advance time, or (in strict mode) the state becomes non-finite.
pub fn solve<F, Obs>(
    field: &F,
    problem: &Problem,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorField + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let expected = field.dimension();
    if problem.dimension() != expected {
        return Err(Error::StateDimension {
            expected,
            found: problem.dimension(),
        });
    }

    let strict = config.finite_check() == FiniteCheck::Strict;
    let tmax = problem.tmax();

    let mut t = problem.t0();
    let mut state = problem.initial_state().to_vec();
    let mut steps = 0;

    if strict && !is_finite(&state) {
        return Err(Error::NonFinite { t });
    }

    let action = observer.observe(&Event {
        step: 0,
        t,
        state: &state,
    });
    if let Some(Action::StopEarly) = action {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            t,
            state,
            steps,
        });
    }

    while t < tmax {
        let (dt, t_next) = match config.horizon() {
            Horizon::Clamp if reaches_horizon(t + problem.dt(), tmax) => (tmax - t, tmax),
            Horizon::Overshoot | Horizon::Clamp => (problem.dt(), t + problem.dt()),
        };
        if t_next <= t {
            return Err(Error::Stalled { t, dt });
        }

        let next = step(field, t, &state, dt)?;
        if strict && !is_finite(&next) {
            return Err(Error::NonFinite { t: t_next });
        }

        t = t_next;
        state = next;
        steps += 1;

        let action = observer.observe(&Event {
            step: steps,
            t,
            state: &state,
        });
        if let Some(Action::StopEarly) = action {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                t,
                state,
                steps,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        t,
        state,
        steps,
    })
}

/// Integrates a problem without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F>(field: &F, problem: &Problem, config: &Config) -> Result<Solution, Error>
where
    F: VectorField + ?Sized,
{
    solve(field, problem, config, ())
}

/// Integrates the unit harmonic oscillator for one row-shaped problem.
///
/// Builds `u0 = [x0, v0]`, integrates `f(t, [x, v]) = [v, -x]` with the
/// default [`Config`], and returns the final `[x, v]`. The final time may
/// overshoot `tmax` by up to one step.
///
/// # Errors
///
/// Returns [`Error::Problem`] if the row has a non-positive step or
/// non-finite times.
pub fn integrate(problem: OscillatorProblem) -> Result<[f64; 2], Error> {
    let problem = Problem::try_from(problem)?;
    let solution = solve_unobserved(&HarmonicOscillator::default(), &problem, &Config::default())?;

    match solution.state[..] {
        [x, v] => Ok([x, v]),
        _ => Err(Error::StateDimension {
            expected: 2,
            found: solution.state.len(),
        }),
    }
}

/// Whether a step ending at `t` reaches `tmax`, within the rounding that
/// accumulates when `dt` is added to `t` many times.
fn reaches_horizon(t: f64, tmax: f64) -> bool {
    tmax - t <= 4.0 * f64::EPSILON * tmax.abs().max(1.0)
}

fn is_finite(state: &[f64]) -> bool {
    state.iter().all(|u| u.is_finite())
}
