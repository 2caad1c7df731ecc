use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`] or validating bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
    /// Endpoint values have the same strict sign.
    #[error("no sign change")]
    NoSignChange,
}

/// A bracket endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The `a` endpoint.
    Lower,
    /// The `b` endpoint.
    Upper,
}

/// Current bracket endpoints and their function values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    a: f64,
    b: f64,
    fa: f64,
    fb: f64,
}

impl Bracket {
    /// Creates a validated bracket with known endpoint values.
    ///
    /// An exact zero at an endpoint is accepted: the first secant step then
    /// lands on that endpoint.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if `fa * fb > 0`.
    pub(super) fn new(bounds: Bounds, fa: f64, fb: f64) -> Result<Self, BracketError> {
        if fa * fb > 0.0 {
            return Err(BracketError::NoSignChange);
        }

        Ok(Self {
            a: bounds.left,
            b: bounds.right,
            fa,
            fb,
        })
    }

    /// Returns the `a` endpoint.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the `b` endpoint.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns `f(a)`.
    #[must_use]
    pub fn fa(&self) -> f64 {
        self.fa
    }

    /// Returns `f(b)`.
    #[must_use]
    pub fn fb(&self) -> f64 {
        self.fb
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// Returns the secant x-intercept, or `None` if the step is degenerate.
    ///
    /// The step is degenerate when `f(b) - f(a)` is zero or non-finite, or
    /// when the intercept itself is not finite.
    pub(super) fn secant(&self) -> Option<f64> {
        let delta_y = self.fb - self.fa;

        #[allow(clippy::float_cmp)]
        if delta_y == 0.0 || !delta_y.is_finite() {
            return None;
        }

        let c = self.b - self.fb * (self.b - self.a) / delta_y;
        c.is_finite().then_some(c)
    }

    /// Returns the endpoint that a new point with value `fc` replaces.
    pub(super) fn side_for(&self, fc: f64) -> Endpoint {
        if self.fa * fc < 0.0 {
            Endpoint::Upper
        } else {
            Endpoint::Lower
        }
    }

    /// Replaces an endpoint with `c`.
    pub(super) fn replace(&mut self, endpoint: Endpoint, c: f64, fc: f64) {
        match endpoint {
            Endpoint::Lower => {
                self.a = c;
                self.fa = fc;
            }
            Endpoint::Upper => {
                self.b = c;
                self.fb = fc;
            }
        }
    }
}

/// Ordered finite bounds for a false-position bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}
