//! Shared helpers for the end-to-end scenarios.

use falsi_core::Interval;
use falsi_expr::Expression;
use falsi_solvers::{Error, Outcome, Settings, find_root};

/// Parses `text` and runs the gated pipeline on `[lower, upper]`.
///
/// # Panics
///
/// Panics if the expression or interval is invalid.
pub fn find_root_in(text: &str, lower: f64, upper: f64) -> Result<Outcome, Error> {
    let expression = Expression::parse(text).expect("valid expression");
    let interval = Interval::new(lower, upper).expect("finite interval");

    find_root(&expression.function(), &interval, &Settings::default(), ())
}
