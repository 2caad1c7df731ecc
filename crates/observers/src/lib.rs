//! Reusable observers for falsi solvers.
//!
//! Solvers report progress as typed events through [`Observer`]. This crate
//! turns those events into console output.
//!
//! # Modules
//!
//! - [`log`] — [`ConsoleLog`], a verbosity-controlled observer for the
//!   applicability check and the root finder, and the [`log_value`] helper
//! - [`report`] — the workability summary and the result banner
//!
//! Every logged number uses [`PRECISION`] fraction digits.
//!
//! [`Observer`]: falsi_core::Observer

pub mod log;
pub mod report;

pub use log::{ConsoleLog, PRECISION, Verbosity, log_value};
pub use report::{print_solution, print_verdict};
