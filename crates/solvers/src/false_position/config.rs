use thiserror::Error;

/// Configuration for the false-position solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    residual_tol: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a false-position config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            residual_tol: 0.01,
            max_iters: 10_000,
        }
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite, or if
    /// `max_iters` is zero.
    pub fn new(residual_tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            residual_tol,
            max_iters,
        })
    }

    /// Returns the convergence threshold on `|f(c)|`.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
