//! Core traits and types for the falsi workspace.
//!
//! This crate defines the shared abstractions that the solvers, observers, and
//! expression evaluator build on:
//!
//! - [`Function`] — a callable that maps a real `x` to a real `f(x)`
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Interval`] — a finite search interval `[lower, upper]`

mod function;
mod interval;
mod observer;

pub use function::Function;
pub use interval::{Interval, IntervalError};
pub use observer::Observer;
