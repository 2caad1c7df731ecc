/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `|f(root)|` is within the residual tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a false-position solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The root estimate `c`.
    pub root: f64,

    /// `f(c)`.
    pub f_at_root: f64,

    /// Iteration that produced the estimate (1-based).
    pub iterations: usize,
}

impl Solution {
    pub(super) fn new(status: Status, root: f64, f_at_root: f64, iterations: usize) -> Self {
        Self {
            status,
            root,
            f_at_root,
            iterations,
        }
    }
}
