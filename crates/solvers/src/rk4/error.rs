use thiserror::Error;

use stepwise_core::ProblemError;

/// Errors that can occur during RK4 integration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid problem: {0}")]
    Problem(#[from] ProblemError),

    #[error("state has {found} components but the field expects {expected}")]
    StateDimension { expected: usize, found: usize },

    #[error("derivative at t = {t} has {found} components but the field expects {expected}")]
    DerivativeDimension {
        t: f64,
        expected: usize,
        found: usize,
    },

    #[error("state became non-finite at t = {t}")]
    NonFinite { t: f64 },

    #[error("step {dt} does not advance time past t = {t}")]
    Stalled { t: f64, dt: f64 },
}
