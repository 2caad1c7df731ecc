use std::error::Error as StdError;

use thiserror::Error;

use super::{BracketError, ConfigError};

/// Errors that can occur during false-position solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("non-finite value f({x}) = {value} at a bracket endpoint")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("iteration {iter} diverged on [{a}, {b}]: c = {c}, f(c) = {fc}")]
    DivergentIteration {
        iter: usize,
        a: f64,
        b: f64,
        c: f64,
        fc: f64,
    },

    #[error("no convergence after {max_iters} iterations: last estimate f({c}) = {fc}")]
    MaxIters { max_iters: usize, c: f64, fc: f64 },

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}
