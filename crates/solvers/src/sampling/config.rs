use thiserror::Error;

/// Default distance between consecutive scan points.
pub const STEP_SIZE: f64 = 0.001;

/// Default offset of the left and right neighbours around each scanned point.
pub const ALPHA: f64 = 0.01;

/// Default largest difference between a point and its neighbours that still
/// counts as locally continuous.
pub const EPSILON: f64 = 0.1;

/// Configuration for the sampling scans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    step_size: f64,
    neighbour_offset: f64,
    jump_tol: f64,
}

/// Errors that can occur when validating a sampling config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step_size must be finite and positive")]
    StepSize,

    #[error("neighbour_offset must be finite and non-negative")]
    NeighbourOffset,

    #[error("jump_tol must be finite and non-negative")]
    JumpTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_size: STEP_SIZE,
            neighbour_offset: ALPHA,
            jump_tol: EPSILON,
        }
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the step size is not finite and positive, or if
    /// the neighbour offset or jump tolerance is negative or non-finite.
    pub fn new(step_size: f64, neighbour_offset: f64, jump_tol: f64) -> Result<Self, ConfigError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::StepSize);
        }
        if !neighbour_offset.is_finite() || neighbour_offset < 0.0 {
            return Err(ConfigError::NeighbourOffset);
        }
        if !jump_tol.is_finite() || jump_tol < 0.0 {
            return Err(ConfigError::JumpTol);
        }

        Ok(Self {
            step_size,
            neighbour_offset,
            jump_tol,
        })
    }

    /// Returns the distance between consecutive scan points.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the offset of the continuity neighbours.
    #[must_use]
    pub fn neighbour_offset(&self) -> f64 {
        self.neighbour_offset
    }

    /// Returns the continuity jump tolerance.
    #[must_use]
    pub fn jump_tol(&self) -> f64 {
        self.jump_tol
    }
}
