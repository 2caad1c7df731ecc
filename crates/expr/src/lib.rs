//! Single-variable expression evaluation for falsi.
//!
//! An [`Expression`] is parsed once from text such as `x^2 - 4` or
//! `sin(x) - x / 2`, and then bound to an [`ExprFunction`] that implements
//! [`falsi_core::Function`] so it can be handed to any solver.
//!
//! Parsing and evaluation are backed by [`evalexpr`]. On top of its grammar
//! this crate registers the usual real functions and the constants `pi` and
//! `e`. See [`FUNCTIONS`] and [`CONSTANTS`] for the full list.

mod builtins;
mod error;
mod expression;
mod function;

pub use builtins::{CONSTANTS, FUNCTIONS};
pub use error::{EvalError, ParseError};
pub use expression::{Expression, VARIABLE};
pub use function::ExprFunction;
