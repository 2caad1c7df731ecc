use falsi_core::{Function, Interval, Observer};

use super::{Action, Config, Error, Event, Grid, evaluate};

/// A test that classifies a function as continuous or not on an interval.
///
/// The applicability check is generic over this trait so the
/// finite-difference heuristic can be swapped for a stricter test without
/// touching the root finder.
pub trait ContinuityTest {
    /// Checks `f` on `interval`, reporting scanned points to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if a function evaluation fails or the observer aborts.
    fn check<F, Obs>(
        &self,
        f: &F,
        interval: &Interval,
        observer: &mut Obs,
    ) -> Result<ContinuityVerdict, Error>
    where
        F: Function,
        Obs: Observer<Event, Action>;
}

/// Why a scanned point failed the continuity test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscontinuityKind {
    /// The point or one of its neighbours evaluated to NaN or infinity.
    NonFinite,
    /// A neighbour differs from the point by more than the jump tolerance.
    Jump,
}

/// The first scanned point that failed the continuity test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discontinuity {
    pub kind: DiscontinuityKind,
    pub x: f64,
    pub left: f64,
    pub actual: f64,
    pub right: f64,
}

/// Outcome of a continuity scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuityVerdict {
    /// Number of grid points examined, including a failing one.
    pub points_checked: usize,
    /// The point where the scan stopped, if it failed.
    pub discontinuity: Option<Discontinuity>,
}

impl ContinuityVerdict {
    /// Returns true if every scanned point passed.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.discontinuity.is_none()
    }
}

/// Finite-difference continuity heuristic.
///
/// At each grid point `p` the function is evaluated at `p - offset`, `p`, and
/// `p + offset`, with the neighbours clamped to the interval so the function is
/// never judged outside it. The point passes if all three values are finite
/// and both neighbours lie within `jump_tol` of `f(p)`. The scan stops at the
/// first failing point.
///
/// This approximates continuity at scan resolution. It can reject steep but
/// continuous functions and accept discontinuities narrower than the offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteDifference {
    step: f64,
    offset: f64,
    jump_tol: f64,
}

impl FiniteDifference {
    /// Creates the heuristic from a sampling config.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            step: config.step_size(),
            offset: config.neighbour_offset(),
            jump_tol: config.jump_tol(),
        }
    }
}

impl Default for FiniteDifference {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ContinuityTest for FiniteDifference {
    fn check<F, Obs>(
        &self,
        f: &F,
        interval: &Interval,
        observer: &mut Obs,
    ) -> Result<ContinuityVerdict, Error>
    where
        F: Function,
        Obs: Observer<Event, Action>,
    {
        let [lower, upper] = interval.as_array();
        let mut points_checked = 0;

        for x in Grid::new(interval, self.step) {
            points_checked += 1;

            let left = evaluate(f, (x - self.offset).max(lower))?;
            let actual = evaluate(f, x)?;
            let right = evaluate(f, (x + self.offset).min(upper))?;

            let event = Event::Continuity {
                x,
                left,
                actual,
                right,
            };
            if let Some(Action::Abort) = observer.observe(&event) {
                return Err(Error::Aborted { x });
            }

            let kind = if !(left.is_finite() && actual.is_finite() && right.is_finite()) {
                Some(DiscontinuityKind::NonFinite)
            } else if (actual - left).abs() > self.jump_tol || (actual - right).abs() > self.jump_tol
            {
                Some(DiscontinuityKind::Jump)
            } else {
                None
            };

            if let Some(kind) = kind {
                return Ok(ContinuityVerdict {
                    points_checked,
                    discontinuity: Some(Discontinuity {
                        kind,
                        x,
                        left,
                        actual,
                        right,
                    }),
                });
            }
        }

        Ok(ContinuityVerdict {
            points_checked,
            discontinuity: None,
        })
    }
}
