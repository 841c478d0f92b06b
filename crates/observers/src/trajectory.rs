use std::num::NonZeroUsize;

use stepwise_core::Observer;

use crate::traits::{HasState, HasStep, HasTime};

/// One recorded `(t, state)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// The step number the point was recorded at.
    pub step: usize,

    /// Time at this point.
    pub t: f64,

    /// State at this point.
    pub state: Vec<f64>,
}

/// Records the trajectory a solver visits.
///
/// Drivers keep only the final state; pass `&mut Trajectory` as the observer
/// to keep the intermediate states too. Use [`Trajectory::every`] to record
/// only every `n`-th step on long runs.
///
/// A `Trajectory` never stops the solver.
#[derive(Debug, Clone)]
pub struct Trajectory {
    stride: NonZeroUsize,
    points: Vec<Point>,
}

impl Trajectory {
    /// Creates a trajectory that records every step.
    #[must_use]
    pub fn new() -> Self {
        Self::every(NonZeroUsize::MIN)
    }

    /// Creates a trajectory that records steps `0, n, 2n, ...`.
    #[must_use]
    pub fn every(stride: NonZeroUsize) -> Self {
        Self {
            stride,
            points: Vec::new(),
        }
    }

    /// Returns the recorded points in step order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the trajectory and returns the recorded points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    fn record<E: HasStep + HasTime + HasState>(&mut self, event: &E) {
        if event.step() % self.stride.get() == 0 {
            self.points.push(Point {
                step: event.step(),
                t: event.time(),
                state: event.state().to_vec(),
            });
        }
    }
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Observer<E, A> for Trajectory
where
    E: HasStep + HasTime + HasState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

impl<E, A> Observer<E, A> for &mut Trajectory
where
    E: HasStep + HasTime + HasState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use stepwise_core::{HarmonicOscillator, Problem};
    use stepwise_solvers::rk4::{self, Config};

    fn unit_oscillator(tmax: f64, dt: f64) -> Problem {
        Problem::new(0.0, [0.0, 1.0], dt, tmax).expect("valid problem")
    }

    #[test]
    fn records_every_step_including_initial() {
        let mut trajectory = Trajectory::new();

        let solution = rk4::solve(
            &HarmonicOscillator::default(),
            &unit_oscillator(1.0, 0.25),
            &Config::default(),
            &mut trajectory,
        )
        .expect("should integrate");

        let points = trajectory.points();
        assert_eq!(points.len(), solution.steps + 1);
        assert_eq!(points[0].state, vec![0.0, 1.0]);
        assert_eq!(points[0].t, 0.0);

        let last = points.last().expect("at least one point");
        assert_eq!(last.step, solution.steps);
        assert_eq!(last.t, solution.t);
        assert_eq!(last.state, solution.state);
    }

    #[test]
    fn recorded_points_follow_the_exact_solution() {
        let mut trajectory = Trajectory::new();

        rk4::solve(
            &HarmonicOscillator::default(),
            &unit_oscillator(3.0, 0.01),
            &Config::default(),
            &mut trajectory,
        )
        .expect("should integrate");

        for point in trajectory.points() {
            assert_relative_eq!(point.state[0], point.t.sin(), epsilon = 1e-8);
            assert_relative_eq!(point.state[1], point.t.cos(), epsilon = 1e-8);
        }
    }

    #[test]
    fn stride_thins_the_record() {
        let stride = NonZeroUsize::new(3).expect("non-zero");
        let mut trajectory = Trajectory::every(stride);

        rk4::solve(
            &HarmonicOscillator::default(),
            &unit_oscillator(2.5, 0.25),
            &Config::default(),
            &mut trajectory,
        )
        .expect("should integrate");

        let steps: Vec<usize> = trajectory.into_points().iter().map(|p| p.step).collect();
        assert_eq!(steps, vec![0, 3, 6, 9]);
    }

    #[test]
    fn owned_trajectory_is_an_observer() {
        let solution = rk4::solve(
            &HarmonicOscillator::default(),
            &unit_oscillator(1.0, 0.5),
            &Config::default(),
            Trajectory::default(),
        )
        .expect("should integrate");

        assert_eq!(solution.steps, 2);
    }
}
