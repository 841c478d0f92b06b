use thiserror::Error;

/// A validated initial-value problem `(t0, u0, dt, tmax)`.
///
/// The derivative function is supplied separately so the same problem can be
/// integrated against different fields. Construction guarantees a positive,
/// finite step and finite start and horizon times, so a fixed-step driver
/// always terminates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
pub struct Problem {
    t0: f64,
    initial_state: Vec<f64>,
    dt: f64,
    tmax: f64,
}

/// Errors that can occur when validating a [`Problem`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProblemError {
    #[error("time step must be positive and finite, got {dt}")]
    InvalidStep { dt: f64 },

    #[error("start and horizon times must be finite, got t0 = {t0}, tmax = {tmax}")]
    NonFiniteTime { t0: f64, tmax: f64 },
}

impl Problem {
    /// Creates a problem starting from `initial_state` at `t0`.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::InvalidStep`] if `dt` is not positive and finite,
    /// or [`ProblemError::NonFiniteTime`] if `t0` or `tmax` is NaN or infinite.
    pub fn new(
        t0: f64,
        initial_state: impl Into<Vec<f64>>,
        dt: f64,
        tmax: f64,
    ) -> Result<Self, ProblemError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ProblemError::InvalidStep { dt });
        }
        if !t0.is_finite() || !tmax.is_finite() {
            return Err(ProblemError::NonFiniteTime { t0, tmax });
        }

        Ok(Self {
            t0,
            initial_state: initial_state.into(),
            dt,
            tmax,
        })
    }

    /// Returns the start time.
    #[must_use]
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Returns the state at the start time.
    #[must_use]
    pub fn initial_state(&self) -> &[f64] {
        &self.initial_state
    }

    /// Returns the number of state components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.initial_state.len()
    }

    /// Returns the fixed step size.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the time horizon.
    #[must_use]
    pub fn tmax(&self) -> f64 {
        self.tmax
    }
}

/// An oscillator problem in row form: `(t0, x0, v0, tmax, dt)`.
///
/// This is the shape a batch of independent problems usually arrives in. It is
/// not validated until converted into a [`Problem`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct OscillatorProblem {
    pub t0: f64,
    pub x0: f64,
    pub v0: f64,
    pub tmax: f64,
    pub dt: f64,
}

impl TryFrom<OscillatorProblem> for Problem {
    type Error = ProblemError;

    fn try_from(row: OscillatorProblem) -> Result<Self, Self::Error> {
        Problem::new(row.t0, [row.x0, row.v0], row.dt, row.tmax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_problem() {
        let problem = Problem::new(0.0, vec![1.0, 2.0, 3.0], 0.5, 10.0).expect("valid problem");

        assert_eq!(problem.t0(), 0.0);
        assert_eq!(problem.initial_state(), &[1.0, 2.0, 3.0]);
        assert_eq!(problem.dimension(), 3);
        assert_eq!(problem.dt(), 0.5);
        assert_eq!(problem.tmax(), 10.0);
    }

    #[test]
    fn horizon_before_start_is_allowed() {
        // Nothing to integrate, but not an error.
        assert!(Problem::new(5.0, [0.0], 0.1, 1.0).is_ok());
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(
            Problem::new(0.0, [1.0], 0.0, 1.0),
            Err(ProblemError::InvalidStep { dt: 0.0 })
        );
        assert_eq!(
            Problem::new(0.0, [1.0], -0.1, 1.0),
            Err(ProblemError::InvalidStep { dt: -0.1 })
        );
    }

    #[test]
    fn rejects_non_finite_step() {
        assert!(matches!(
            Problem::new(0.0, [1.0], f64::NAN, 1.0),
            Err(ProblemError::InvalidStep { .. })
        ));
        assert!(matches!(
            Problem::new(0.0, [1.0], f64::INFINITY, 1.0),
            Err(ProblemError::InvalidStep { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_times() {
        assert!(matches!(
            Problem::new(f64::NAN, [1.0], 0.1, 1.0),
            Err(ProblemError::NonFiniteTime { .. })
        ));
        assert!(matches!(
            Problem::new(0.0, [1.0], 0.1, f64::INFINITY),
            Err(ProblemError::NonFiniteTime { .. })
        ));
    }

    #[test]
    fn oscillator_row_becomes_two_component_problem() {
        let row = OscillatorProblem {
            t0: 0.0,
            x0: 0.0,
            v0: 1.0,
            tmax: 1.0,
            dt: 0.1,
        };

        let problem = Problem::try_from(row).expect("valid row");

        assert_eq!(problem.initial_state(), &[0.0, 1.0]);
        assert_eq!(problem.dt(), 0.1);
        assert_eq!(problem.tmax(), 1.0);
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn oscillator_row_deserializes_from_named_fields() {
        let json = r#"{ "t0": 0.0, "x0": 0.5, "v0": -1.0, "tmax": 3.0, "dt": 0.01 }"#;

        let row: OscillatorProblem = serde_json::from_str(json).expect("valid json");

        assert_eq!(
            row,
            OscillatorProblem {
                t0: 0.0,
                x0: 0.5,
                v0: -1.0,
                tmax: 3.0,
                dt: 0.01,
            }
        );
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn problem_serializes_all_fields() {
        let problem = Problem::new(0.5, [0.0, 1.0], 0.1, 2.0).expect("valid problem");

        let json = serde_json::to_value(&problem).expect("serializable");

        assert_eq!(
            json,
            serde_json::json!({
                "t0": 0.5,
                "initial_state": [0.0, 1.0],
                "dt": 0.1,
                "tmax": 2.0,
            })
        );
    }

    #[test]
    fn invalid_oscillator_row_is_rejected() {
        let row = OscillatorProblem {
            t0: 0.0,
            x0: 0.0,
            v0: 1.0,
            tmax: 1.0,
            dt: -1.0,
        };

        assert_eq!(
            Problem::try_from(row),
            Err(ProblemError::InvalidStep { dt: -1.0 })
        );
    }
}
