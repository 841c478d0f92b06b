//! Numerical solvers for stepwise problems.
//!
//! # Solvers
//!
//! - [`rk4`] — classical fourth-order Runge-Kutta with a fixed step, plus a
//!   driver that advances a [`Problem`] to its time horizon
//!
//! [`Problem`]: stepwise_core::Problem

pub mod rk4;
