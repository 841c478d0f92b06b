/// Event emitted by the RK4 driver.
///
/// Step 0 carries the initial state before any integration.
/// Steps 1..N are emitted after each accepted step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number (0 for the initial state).
    pub step: usize,

    /// Time at this step.
    pub t: f64,

    /// State at this step.
    pub state: &'a [f64],
}
