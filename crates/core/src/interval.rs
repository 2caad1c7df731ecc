use std::fmt;

use thiserror::Error;

/// Errors that can occur when creating an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    /// One or both endpoints are NaN or infinite.
    #[error("interval endpoint is not finite: {value}")]
    NonFinite { value: f64 },
}

/// A finite search interval `[lower, upper]`.
///
/// The endpoints are kept in the order given. Scans over an interval with
/// `lower > upper` visit no points, so a reversed interval is never workable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Creates an interval from its endpoints.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::NonFinite` if either endpoint is NaN or infinite.
    pub fn new(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        for value in [lower, upper] {
            if !value.is_finite() {
                return Err(IntervalError::NonFinite { value });
            }
        }
        Ok(Self { lower, upper })
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the endpoints as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Returns `upper - lower`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn keeps_endpoint_order() {
        let interval = Interval::new(5.0, -1.0).expect("finite endpoints");
        assert_relative_eq!(interval.lower(), 5.0);
        assert_relative_eq!(interval.upper(), -1.0);
        assert_relative_eq!(interval.width(), -6.0);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            Interval::new(f64::NAN, 1.0),
            Err(IntervalError::NonFinite { .. })
        ));
        assert!(matches!(
            Interval::new(0.0, f64::INFINITY),
            Err(IntervalError::NonFinite { .. })
        ));
    }

    #[test]
    fn displays_as_bracket() {
        let interval = Interval::new(0.0, 5.0).expect("finite endpoints");
        assert_eq!(interval.to_string(), "[0, 5]");
    }
}
