//! Root finding by false position, gated by an applicability check.
//!
//! # Modules
//!
//! - [`sampling`] — fixed-step scans of a function over an interval
//!   (continuity heuristic, endpoint sign change, sign-flip count)
//! - [`applicability`] — combines the scans into a workability verdict
//! - [`false_position`] — the regula falsi iteration
//!
//! [`find_root`] runs the whole pipeline: the root finder only runs on an
//! interval the applicability check accepts.

pub mod applicability;
pub mod false_position;
pub mod sampling;

mod pipeline;

pub use pipeline::{Error, Outcome, Settings, find_root};
