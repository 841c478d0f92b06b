//! Reusable observers for stepwise solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver event carrying a step, time, and state.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasStep`], [`HasTime`], [`HasState`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Trajectory`] — records the `(t, state)` pairs a run visits
//! - [`StopWhen`] — stops a run once a predicate on `(t, state)` holds
//!
//! [`Observer`]: stepwise_core::Observer
//! [`HasStep`]: traits::HasStep
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop_when;
mod trajectory;

pub use stop_when::StopWhen;
pub use trajectory::{Point, Trajectory};
