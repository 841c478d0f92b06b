use stepwise_core::Observer;

use crate::traits::{CanStopEarly, HasState, HasTime};

/// Stops a solver once a predicate on `(t, state)` holds.
///
/// The predicate is checked on every event, including the initial state, and
/// the solver stops at the first event for which it returns `true`.
///
/// ```
/// use stepwise_core::{HarmonicOscillator, Problem};
/// use stepwise_observers::StopWhen;
/// use stepwise_solvers::rk4::{self, Config, Status};
///
/// // Stop once the oscillator swings past x = 0 on its way down.
/// let problem = Problem::new(0.0, [0.0, 1.0], 0.01, 10.0)?;
/// let observer = StopWhen::new(|_t, u: &[f64]| u[0] < 0.0);
///
/// let solution = rk4::solve(&HarmonicOscillator::default(), &problem, &Config::default(), observer)?;
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert!((solution.t - std::f64::consts::PI).abs() <= 0.01);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StopWhen<P> {
    predicate: P,
}

impl<P> StopWhen<P>
where
    P: FnMut(f64, &[f64]) -> bool,
{
    /// Creates an observer that stops when `predicate(t, state)` is `true`.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<E, A, P> Observer<E, A> for StopWhen<P>
where
    E: HasTime + HasState,
    A: CanStopEarly,
    P: FnMut(f64, &[f64]) -> bool,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (self.predicate)(event.time(), event.state()).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use stepwise_core::{HarmonicOscillator, Problem};
    use stepwise_solvers::rk4::{self, Config, Status};

    #[test]
    fn stops_at_first_zero_crossing() {
        let dt = 0.05;
        let problem = Problem::new(0.0, [0.0, 1.0], dt, 20.0).expect("valid problem");
        let observer = StopWhen::new(|_t, u: &[f64]| u[0] < 0.0);

        let solution = rk4::solve(
            &HarmonicOscillator::default(),
            &problem,
            &Config::default(),
            observer,
        )
        .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.t > PI);
        assert!(solution.t <= PI + dt);
    }

    #[test]
    fn runs_to_horizon_when_predicate_never_holds() {
        let problem = Problem::new(0.0, [0.0, 1.0], 0.1, 1.0).expect("valid problem");
        let observer = StopWhen::new(|_t, u: &[f64]| u[0].abs() > 2.0);

        let solution = rk4::solve(
            &HarmonicOscillator::default(),
            &problem,
            &Config::default(),
            observer,
        )
        .expect("should integrate");

        assert_eq!(solution.status, Status::Complete);
    }

    #[test]
    fn checks_the_initial_state() {
        let problem = Problem::new(0.0, [5.0, 0.0], 0.1, 1.0).expect("valid problem");
        let observer = StopWhen::new(|_t, u: &[f64]| u[0] > 1.0);

        let solution = rk4::solve(
            &HarmonicOscillator::default(),
            &problem,
            &Config::default(),
            observer,
        )
        .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 0);
    }
}
