/// Indicates how the driver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached or passed the time horizon.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an RK4 integration.
///
/// Only the final state is kept. With [`Horizon::Overshoot`] the final time
/// may lie past the problem's horizon by less than one step.
///
/// [`Horizon::Overshoot`]: super::Horizon::Overshoot
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the driver terminated.
    pub status: Status,

    /// Time of the final state.
    pub t: f64,

    /// The final state.
    pub state: Vec<f64>,

    /// Number of integration steps taken.
    pub steps: usize,
}
