use falsi_core::Interval;

/// Relative slack that keeps `upper` on the grid when the interval spans a
/// whole number of steps up to rounding.
const SLACK: f64 = 1e-9;

/// Fixed-step scan points `lower + i * step`, up to and including `upper`.
///
/// Points are computed from their index rather than by repeated addition, so
/// rounding does not accumulate along long scans. The last point is clamped
/// to `upper`.
#[derive(Debug, Clone)]
pub struct Grid {
    lower: f64,
    upper: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Grid {
    /// Creates the scan grid for an interval.
    ///
    /// An interval with `upper < lower` produces an empty grid.
    /// The step must be finite and positive, which [`super::Config`] ensures.
    #[must_use]
    pub fn new(interval: &Interval, step: f64) -> Self {
        let [lower, upper] = interval.as_array();
        let span = upper - lower;

        let len = if span < 0.0 {
            0
        } else {
            let steps = (span / step * (1.0 + SLACK)).floor();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let steps = steps as usize;
            steps.saturating_add(1)
        };

        Self {
            lower,
            upper,
            step,
            index: 0,
            len,
        }
    }
}

impl Iterator for Grid {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let x = (self.lower + self.index as f64 * self.step).min(self.upper);
        self.index += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Grid {}
