use crate::sampling::{self, Discontinuity};

/// Events emitted by the applicability check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A point visited by one of the scans.
    Scan(sampling::Event),

    /// A workability criterion failed.
    Failed(Failure),

    /// The check finished.
    Checked(Summary),
}

/// A failed workability criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Failure {
    /// The continuity test rejected the function at a point.
    Discontinuous(Discontinuity),

    /// `f(lower)` and `f(upper)` do not have opposite signs.
    EqualSigns {
        lower: f64,
        upper: f64,
        lower_value: f64,
        upper_value: f64,
    },

    /// The root-count scan did not find exactly one root.
    RootCount { roots: usize },
}

/// Criteria outcomes of a finished check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub continuous: bool,
    pub sign_change: bool,
    pub roots: usize,
    pub workable: bool,
}
