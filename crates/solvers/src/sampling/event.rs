use super::Sign;

/// Events emitted for each point visited by a scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A point checked by the continuity scan.
    Continuity {
        /// The scanned point.
        x: f64,
        /// `f(x - offset)`.
        left: f64,
        /// `f(x)`.
        actual: f64,
        /// `f(x + offset)`.
        right: f64,
    },

    /// A point visited by the root-count scan.
    RootScan {
        /// The scanned point.
        x: f64,
        /// `f(x)`.
        value: f64,
        /// The sign of `value`.
        sign: Sign,
        /// Roots counted so far, including this point.
        roots: usize,
    },
}

impl Event {
    /// Returns the scanned point.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Continuity { x, .. } | Self::RootScan { x, .. } => *x,
        }
    }
}

/// Actions an observer can take during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Cancel the scan; it returns [`super::Error::Aborted`].
    Abort,
}
