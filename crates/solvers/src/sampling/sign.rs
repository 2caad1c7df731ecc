/// The sign of a function value for sign-flip logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Value is positive, zero, or NaN.
    NonNegative,
    /// Value is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Sign::Negative
        } else {
            Sign::NonNegative
        }
    }

    /// Returns the opposite sign.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Sign::NonNegative => Sign::Negative,
            Sign::Negative => Sign::NonNegative,
        }
    }
}
