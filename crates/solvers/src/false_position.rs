//! False position (regula falsi) for bracketed single-variable roots.
//!
//! # Algorithm
//!
//! Given a bracket `[a, b]` where `f(a)` and `f(b)` have opposite signs, each
//! iteration takes the x-intercept of the secant through `(a, f(a))` and
//! `(b, f(b))`:
//!
//! ```text
//! c = b - f(b) * (b - a) / (f(b) - f(a))
//! ```
//!
//! and stops once `|f(c)| <= residual_tol`. Otherwise `c` replaces `b` when
//! `f(a) * f(c) < 0` (the root lies in `[a, c]`) and replaces `a` in every
//! other case, including the `f(a) * f(c) == 0` tie.
//!
//! # Failure Modes
//!
//! - A zero or non-finite secant slope, a non-finite `c`, or a non-finite
//!   `f(c)` ends the run with [`Error::DivergentIteration`] instead of looping.
//! - Exhausting [`Config::max_iters`] ends the run with [`Error::MaxIters`].
//!
//! # Observer Events
//!
//! Each iteration emits [`Event::Estimate`] with `c` and `f(c)`. Iterations
//! that do not converge then emit [`Event::Iteration`] with an
//! [`IterationTrace`] of the pre-update bracket. Returning
//! [`Action::StopEarly`] from either ends the run with the latest estimate.
//! Traces are diagnostic only; they never affect control flow.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use bracket::{Bracket, BracketError, Endpoint};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, IterationTrace};
pub use solution::{Solution, Status};

use falsi_core::{Function, Observer};

use bracket::Bounds;

/// Finds a root of `f` in `bracket` using false position.
///
/// The bracket endpoints may be given in either order.
/// See the [module docs](self) for the iteration and observer events.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, an endpoint value is not
/// finite, the iteration diverges, the iteration limit is reached, or `f`
/// fails to evaluate.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let [a, b] = bounds.as_array();

    let fa = evaluate_finite(f, a)?;
    let fb = evaluate_finite(f, b)?;
    let mut bracket = Bracket::new(bounds, fa, fb)?;

    let mut last = (a, fa);

    for iter in 1..=config.max_iters() {
        let diverged = |c: f64, fc: f64| Error::DivergentIteration {
            iter,
            a: bracket.a(),
            b: bracket.b(),
            c,
            fc,
        };

        let c = bracket.secant().ok_or_else(|| diverged(f64::NAN, f64::NAN))?;
        let fc = evaluate(f, c)?;
        if !fc.is_finite() {
            return Err(diverged(c, fc));
        }

        if let Some(Action::StopEarly) = observer.observe(&Event::Estimate { iter, c, fc }) {
            return Ok(Solution::new(Status::StoppedByObserver, c, fc, iter));
        }

        if fc.abs() <= config.residual_tol() {
            return Ok(Solution::new(Status::Converged, c, fc, iter));
        }

        let replaced = bracket.side_for(fc);
        let trace = IterationTrace::new(iter, &bracket, c, fc, replaced);
        if let Some(Action::StopEarly) = observer.observe(&Event::Iteration(trace)) {
            return Ok(Solution::new(Status::StoppedByObserver, c, fc, iter));
        }

        bracket.replace(replaced, c, fc);
        last = (c, fc);
    }

    let (c, fc) = last;
    Err(Error::MaxIters {
        max_iters: config.max_iters(),
        c,
        fc,
    })
}

/// Finds a root of `f` in `bracket` without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}

fn evaluate<F: Function>(f: &F, x: f64) -> Result<f64, Error> {
    f.call(x).map_err(|source| Error::Function {
        x,
        source: Box::new(source),
    })
}

/// Evaluates an endpoint, rejecting NaN and infinite values.
fn evaluate_finite<F: Function>(f: &F, x: f64) -> Result<f64, Error> {
    let value = evaluate(f, x)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteValue { x, value })
    }
}
