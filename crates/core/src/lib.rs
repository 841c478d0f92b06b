//! Core traits and types for fixed-step ODE integration.
//!
//! This crate defines the shared abstractions that the stepper, observers, and
//! batch runner build on:
//!
//! - [`VectorField`] — a pure derivative function `f(t, u)` of fixed dimension
//! - [`FnField`] — adapts a closure into a [`VectorField`]
//! - [`HarmonicOscillator`] — the canonical two-dimensional field `[v, -ω²x]`
//! - [`Problem`], [`OscillatorProblem`] — validated initial-value problems
//! - [`Observer`] — receives solver events and optionally returns control actions

mod field;
mod observer;
mod oscillator;
mod problem;

pub use field::{FnField, VectorField};
pub use observer::Observer;
pub use oscillator::{HarmonicOscillator, Stiffness};
pub use problem::{OscillatorProblem, Problem, ProblemError};
