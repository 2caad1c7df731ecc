use super::{Bracket, Endpoint};

/// Events emitted by the false-position solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A new estimate was computed.
    Estimate {
        /// Iteration counter (1-based).
        iter: usize,
        /// The secant intercept.
        c: f64,
        /// `f(c)`.
        fc: f64,
    },

    /// An iteration did not converge and the bracket is about to shrink.
    Iteration(IterationTrace),
}

/// Snapshot of one non-converged iteration, taken before the bracket update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationTrace {
    pub iter: usize,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub fa: f64,
    pub fb: f64,
    pub fc: f64,
    /// `f(b) - f(a)`.
    pub delta_y: f64,
    /// `b - a`.
    pub delta_x: f64,
    /// Slope of the secant through the endpoints.
    pub slope: f64,
    /// The endpoint `c` is about to replace.
    pub replaced: Endpoint,
}

impl IterationTrace {
    pub(super) fn new(
        iter: usize,
        bracket: &Bracket,
        c: f64,
        fc: f64,
        replaced: Endpoint,
    ) -> Self {
        let delta_y = bracket.fb() - bracket.fa();
        let delta_x = bracket.b() - bracket.a();

        Self {
            iter,
            a: bracket.a(),
            b: bracket.b(),
            c,
            fa: bracket.fa(),
            fb: bracket.fb(),
            fc,
            delta_y,
            delta_x,
            slope: delta_y / delta_x,
            replaced,
        }
    }
}
