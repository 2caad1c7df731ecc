/// Control actions supported by the false-position solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest estimate.
    StopEarly,
}
