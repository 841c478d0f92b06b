/// Control actions supported by the RK4 driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop integrating and return the state reached so far.
    StopEarly,
}
