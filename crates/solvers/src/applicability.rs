//! Decides whether false position can be applied to a function on an interval.
//!
//! An interval is workable when the function is continuous on it (by the
//! [`ContinuityTest`] in use), `f(a)` and `f(b)` have opposite signs, and the
//! root-count scan finds exactly one root.
//!
//! # Observer Events
//!
//! The checker forwards every scanned point as [`Event::Scan`], emits
//! [`Event::Failed`] once per failing criterion, and finishes with
//! [`Event::Checked`]. Observers can return [`Action::Abort`] on a scan event
//! to cancel the check.

mod event;
mod verdict;

pub use event::{Event, Failure, Summary};
pub use verdict::WorkabilityVerdict;

pub use crate::sampling::{Action, Error};

use falsi_core::{Function, Interval, Observer};

use crate::sampling::{self, Config, ContinuityTest, FiniteDifference};

/// Checks workability using the finite-difference continuity heuristic.
///
/// # Errors
///
/// Returns an error if a function evaluation fails or the observer aborts.
pub fn check<F, Obs>(
    f: &F,
    interval: &Interval,
    config: &Config,
    observer: Obs,
) -> Result<WorkabilityVerdict, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    check_with(f, interval, &FiniteDifference::new(config), config, observer)
}

/// Checks workability without observation.
///
/// # Errors
///
/// Returns an error if a function evaluation fails.
pub fn check_unobserved<F: Function>(
    f: &F,
    interval: &Interval,
    config: &Config,
) -> Result<WorkabilityVerdict, Error> {
    check(f, interval, config, ())
}

/// Checks workability with a caller-supplied continuity test.
///
/// All three criteria are always evaluated so the verdict reports every
/// failure, not just the first.
///
/// # Errors
///
/// Returns an error if a function evaluation fails or the observer aborts.
pub fn check_with<F, C, Obs>(
    f: &F,
    interval: &Interval,
    continuity_test: &C,
    config: &Config,
    mut observer: Obs,
) -> Result<WorkabilityVerdict, Error>
where
    F: Function,
    C: ContinuityTest,
    Obs: Observer<Event, Action>,
{
    let mut forward = |event: &sampling::Event| observer.observe(&Event::Scan(*event));

    let continuity = continuity_test.check(f, interval, &mut forward)?;
    let sign_change = sampling::sign_change(f, interval)?;
    let root_count = sampling::root_count(f, interval, config, &mut forward)?;

    let verdict = WorkabilityVerdict {
        interval: *interval,
        continuity,
        sign_change,
        root_count,
    };

    for failure in verdict.failures() {
        observer.observe(&Event::Failed(failure));
    }
    observer.observe(&Event::Checked(verdict.summary()));

    Ok(verdict)
}
