use falsi_core::Interval;

use crate::sampling::{ContinuityVerdict, RootCountReport, SignChangeVerdict};

use super::{Failure, Summary};

/// The combined outcome of the three workability scans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkabilityVerdict {
    pub interval: Interval,
    pub continuity: ContinuityVerdict,
    pub sign_change: SignChangeVerdict,
    pub root_count: RootCountReport,
}

impl WorkabilityVerdict {
    /// Returns true if the continuity test passed.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.continuity.is_continuous()
    }

    /// Returns true if the endpoint values have opposite signs.
    #[must_use]
    pub fn has_sign_change(&self) -> bool {
        self.sign_change.has_sign_change()
    }

    /// Returns the number of roots found by the root-count scan.
    #[must_use]
    pub fn roots(&self) -> usize {
        self.root_count.roots
    }

    /// Returns true if false position may be applied.
    #[must_use]
    pub fn is_workable(&self) -> bool {
        self.is_continuous() && self.has_sign_change() && self.roots() == 1
    }

    /// Returns the failed criteria in check order.
    #[must_use]
    pub fn failures(&self) -> Vec<Failure> {
        let mut failures = Vec::new();

        if let Some(discontinuity) = self.continuity.discontinuity {
            failures.push(Failure::Discontinuous(discontinuity));
        }
        if !self.has_sign_change() {
            failures.push(Failure::EqualSigns {
                lower: self.interval.lower(),
                upper: self.interval.upper(),
                lower_value: self.sign_change.lower_value,
                upper_value: self.sign_change.upper_value,
            });
        }
        if self.roots() != 1 {
            failures.push(Failure::RootCount {
                roots: self.roots(),
            });
        }

        failures
    }

    /// Returns the criteria outcomes.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            continuous: self.is_continuous(),
            sign_change: self.has_sign_change(),
            roots: self.roots(),
            workable: self.is_workable(),
        }
    }
}
