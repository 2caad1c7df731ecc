//! Fixed-step scans of a function over an interval.
//!
//! Three independent scans classify a function on `[a, b]`:
//!
//! - [`continuity`] — a finite-difference heuristic, see [`FiniteDifference`]
//! - [`sign_change`] — whether `f(a)` and `f(b)` have strictly opposite signs
//! - [`root_count`] — how many times the sign of `f` flips along the grid
//!
//! All grid scans visit `a + i * step` for `i = 0, 1, …` up to and including
//! `b`. Each visited point is reported to the observer as an [`Event`]; the
//! observer may return [`Action::Abort`] to cancel the scan.
//!
//! These are heuristics. They are sensitive to the step size and tolerances,
//! miss features narrower than one step, and prove nothing about the function
//! between grid points.

mod config;
mod continuity;
mod error;
mod event;
mod grid;
mod root_count;
mod sign;
mod sign_change;

pub use config::{ALPHA, Config, ConfigError, EPSILON, STEP_SIZE};
pub use continuity::{
    ContinuityTest, ContinuityVerdict, Discontinuity, DiscontinuityKind, FiniteDifference,
};
pub use error::Error;
pub use event::{Action, Event};
pub use grid::Grid;
pub use root_count::RootCountReport;
pub use sign::Sign;
pub use sign_change::SignChangeVerdict;

use falsi_core::{Function, Interval, Observer};

/// Runs the finite-difference continuity heuristic over the interval.
///
/// # Errors
///
/// Returns an error if a function evaluation fails or the observer aborts.
pub fn continuity<F, Obs>(
    f: &F,
    interval: &Interval,
    config: &Config,
    mut observer: Obs,
) -> Result<ContinuityVerdict, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    FiniteDifference::new(config).check(f, interval, &mut observer)
}

/// Checks whether `f(a) * f(b) < 0`.
///
/// # Errors
///
/// Returns an error if a function evaluation fails.
pub fn sign_change<F: Function>(f: &F, interval: &Interval) -> Result<SignChangeVerdict, Error> {
    sign_change::scan(f, interval)
}

/// Counts the sign flips of `f` along the scan grid.
///
/// # Errors
///
/// Returns an error if a function evaluation fails or the observer aborts.
pub fn root_count<F, Obs>(
    f: &F,
    interval: &Interval,
    config: &Config,
    mut observer: Obs,
) -> Result<RootCountReport, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    root_count::scan(f, interval, config, &mut observer)
}

/// Evaluates `f` at `x`, boxing any evaluation error.
pub(crate) fn evaluate<F: Function>(f: &F, x: f64) -> Result<f64, Error> {
    f.call(x).map_err(|source| Error::Function {
        x,
        source: Box::new(source),
    })
}
