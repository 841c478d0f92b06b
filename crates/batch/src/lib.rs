//! Parallel scatter/gather of independent stepwise problems.
//!
//! Each problem in a batch is an independent initial-value problem: no state
//! is shared between them, so they are mapped over a `rayon` thread pool with
//! no coordination and gathered back in input order.
//!
//! - [`scatter`] — maps any pure, fallible function over a slice of items
//! - [`integrate_all`] — solves a batch of oscillator [`Row`]s with
//!   [`rk4::integrate`] and reports each row's [`Outcome`]
//!
//! A failing problem never affects the others. Failures are deterministic, so
//! they are reported once and never retried.
//!
//! [`rk4::integrate`]: stepwise_solvers::rk4::integrate

mod error;
mod options;
mod oscillator;
mod outcome;
mod scatter;

pub use error::Error;
pub use options::Options;
pub use oscillator::{Entry, Output, Report, Row, integrate_all};
pub use outcome::Outcome;
pub use scatter::scatter;
