//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to be written once and reused.
//!
//! # Event traits
//!
//! - [`HasStep`] — events that carry a step number
//! - [`HasTime`] — events that carry the current time
//! - [`HasState`] — events that carry the current state vector
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use stepwise_core::Observer;
//! use stepwise_observers::traits::{CanStopEarly, HasState};
//!
//! struct Bounded {
//!     limit: f64,
//! }
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for Bounded {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let escaped = event.state().iter().any(|u| u.abs() > self.limit);
//!         escaped.then(A::stop_early)
//!     }
//! }
//! ```

use stepwise_solvers::rk4;

/// An event that carries a step number.
pub trait HasStep {
    /// Returns the step number, with 0 for the initial state.
    fn step(&self) -> usize;
}

/// An event that carries the current time.
pub trait HasTime {
    /// Returns the time at this event.
    fn time(&self) -> f64;
}

/// An event that carries the current state vector.
pub trait HasState {
    /// Returns the state at this event.
    fn state(&self) -> &[f64];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- rk4::Event ---

impl HasStep for rk4::Event<'_> {
    fn step(&self) -> usize {
        self.step
    }
}

impl HasTime for rk4::Event<'_> {
    fn time(&self) -> f64 {
        self.t
    }
}

impl HasState for rk4::Event<'_> {
    fn state(&self) -> &[f64] {
        self.state
    }
}

// --- rk4::Action ---

impl CanStopEarly for rk4::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
