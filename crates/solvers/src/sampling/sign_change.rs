use falsi_core::{Function, Interval};

use super::{Error, evaluate};

/// Endpoint values of `f` and whether they bracket a sign change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignChangeVerdict {
    /// `f(lower)`.
    pub lower_value: f64,
    /// `f(upper)`.
    pub upper_value: f64,
}

impl SignChangeVerdict {
    /// Returns true if `f(lower) * f(upper) < 0`.
    ///
    /// A zero or NaN at either endpoint is not a sign change.
    #[must_use]
    pub fn has_sign_change(&self) -> bool {
        self.lower_value * self.upper_value < 0.0
    }
}

pub(super) fn scan<F: Function>(f: &F, interval: &Interval) -> Result<SignChangeVerdict, Error> {
    Ok(SignChangeVerdict {
        lower_value: evaluate(f, interval.lower())?,
        upper_value: evaluate(f, interval.upper())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict<F: Function>(f: &F, lower: f64, upper: f64) -> SignChangeVerdict {
        let interval = Interval::new(lower, upper).expect("finite interval");
        scan(f, &interval).expect("evaluation should succeed")
    }

    #[test]
    fn detects_opposite_signs() {
        assert!(verdict(&|x: f64| x * x - 4.0, 0.0, 5.0).has_sign_change());
    }

    #[test]
    fn equal_signs_are_not_a_change() {
        assert!(!verdict(&|x: f64| x * x + 1.0, -5.0, 5.0).has_sign_change());
        assert!(!verdict(&|x: f64| x * x - 4.0, -5.0, 5.0).has_sign_change());
    }

    #[test]
    fn zero_endpoint_is_not_a_change() {
        assert!(!verdict(&|x: f64| x, 0.0, 1.0).has_sign_change());
    }
}
