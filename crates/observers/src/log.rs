//! Console logging for the applicability check and the root finder.
//!
//! See [`ConsoleLog`] for what each [`Verbosity`] prints.

use std::io::{self, Write};

use falsi_core::Observer;
use falsi_solvers::{
    applicability::{self, Failure},
    false_position::{self, Endpoint, IterationTrace},
    sampling::{self, Sign},
};

/// Number of fraction digits for every logged number.
pub const PRECISION: usize = 10;

/// Writes `label` followed by `value` with [`PRECISION`] fraction digits.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn log_value<W: Write>(out: &mut W, label: &str, value: f64) -> io::Result<()> {
    writeln!(out, "{label}{value:.PRECISION$}")
}

/// How much a [`ConsoleLog`] prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Workability failures and each root estimate.
    Quiet,

    /// Adds the check summary and a trace of every iteration.
    #[default]
    Normal,

    /// Adds every point visited by the scans.
    Trace,
}

/// An observer that logs solver events to a writer.
///
/// `ConsoleLog` observes both the applicability check and the root finder, so
/// one instance can be passed to [`falsi_solvers::find_root`]. It never
/// steers the solvers.
///
/// Write errors do not interrupt solving. The first one is kept, later output
/// is dropped, and [`finish`](Self::finish) reports it.
///
/// # Example
///
/// ```
/// use falsi_core::Interval;
/// use falsi_observers::{ConsoleLog, Verbosity};
/// use falsi_solvers::{Settings, find_root};
///
/// let interval = Interval::new(0.0, 5.0).unwrap();
/// let mut log = ConsoleLog::new(Vec::new(), "x*x - 4", Verbosity::Quiet);
///
/// let outcome = find_root(&|x: f64| x * x - 4.0, &interval, &Settings::default(), &mut log).unwrap();
/// let output = String::from_utf8(log.finish().unwrap()).unwrap();
///
/// assert!(outcome.solution().is_some());
/// assert!(output.starts_with("c = "));
/// ```
#[derive(Debug)]
pub struct ConsoleLog<W: Write> {
    out: W,
    expression: String,
    verbosity: Verbosity,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleLog<W> {
    /// Creates a log for the function `f(x) = expression`.
    pub fn new(out: W, expression: impl Into<String>, verbosity: Verbosity) -> Self {
        Self {
            out,
            expression: expression.into(),
            verbosity,
            error: None,
        }
    }

    /// Returns the configured verbosity.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Returns the writer, or the first write error encountered.
    ///
    /// # Errors
    ///
    /// Returns the first error the writer produced while logging.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    /// Runs `write` unless an earlier write failed, keeping the first error.
    fn record(&mut self, write: impl FnOnce(&mut Self) -> io::Result<()>) {
        if self.error.is_none()
            && let Err(error) = write(self)
        {
            self.error = Some(error);
        }
    }

    fn log_check(&mut self, event: &applicability::Event) -> io::Result<()> {
        match event {
            applicability::Event::Scan(scan) => {
                if self.verbosity >= Verbosity::Trace {
                    self.log_scan(scan)?;
                }
            }
            applicability::Event::Failed(failure) => self.log_failure(failure)?,
            applicability::Event::Checked(summary) => {
                if self.verbosity >= Verbosity::Normal {
                    writeln!(self.out, "continuous: {}", summary.continuous)?;
                    writeln!(self.out, "unequal signs: {}", summary.sign_change)?;
                    writeln!(self.out, "roots: {}", summary.roots)?;
                }
            }
        }
        Ok(())
    }

    fn log_scan(&mut self, event: &sampling::Event) -> io::Result<()> {
        let out = &mut self.out;
        match *event {
            sampling::Event::Continuity {
                x,
                left,
                actual,
                right,
            } => {
                log_value(out, "x: ", x)?;
                log_value(out, "left: ", left)?;
                log_value(out, "right: ", right)?;
                log_value(out, "actual: ", actual)?;
            }
            sampling::Event::RootScan {
                x,
                value,
                sign,
                roots,
            } => {
                log_value(out, "x: ", x)?;
                log_value(out, "value: ", value)?;
                let sign = match sign {
                    Sign::Negative => "negative",
                    Sign::NonNegative => "non-negative",
                };
                writeln!(out, "sign: {sign}")?;
                writeln!(out, "roots: {roots}")?;
            }
        }
        Ok(())
    }

    fn log_failure(&mut self, failure: &Failure) -> io::Result<()> {
        let expression = &self.expression;
        let out = &mut self.out;
        match *failure {
            Failure::Discontinuous(discontinuity) => writeln!(
                out,
                "f(x) = {expression} is not workable due to a discontinuity at {:.PRECISION$}",
                discontinuity.x
            ),
            Failure::EqualSigns { lower, upper, .. } => writeln!(
                out,
                "f(x) = {expression} is not workable because the signs of f({lower}) and f({upper}) are equal"
            ),
            Failure::RootCount { roots: 0 } => writeln!(
                out,
                "f(x) = {expression} is not workable because no root was detected on the given interval"
            ),
            Failure::RootCount { .. } => writeln!(
                out,
                "f(x) = {expression} is not workable because it has more than one root on the given interval"
            ),
        }
    }

    fn log_solve(&mut self, event: &false_position::Event) -> io::Result<()> {
        match event {
            false_position::Event::Estimate { c, fc, .. } => {
                log_value(&mut self.out, "c = ", *c)?;
                log_value(&mut self.out, "f(c) = ", *fc)?;
            }
            false_position::Event::Iteration(trace) => {
                if self.verbosity >= Verbosity::Normal {
                    self.log_trace(trace)?;
                }
            }
        }
        Ok(())
    }

    fn log_trace(&mut self, trace: &IterationTrace) -> io::Result<()> {
        let out = &mut self.out;

        log_value(out, "f(a) = ", trace.fa)?;
        log_value(out, "f(b) = ", trace.fb)?;
        writeln!(out)?;

        log_value(out, "a = ", trace.a)?;
        log_value(out, "b = ", trace.b)?;
        log_value(out, "c = ", trace.c)?;
        writeln!(out)?;

        log_value(out, "delta y: ", trace.delta_y)?;
        log_value(out, "delta x: ", trace.delta_x)?;
        log_value(out, "slope: ", trace.slope)?;
        writeln!(out)?;

        match trace.replaced {
            Endpoint::Upper => writeln!(out, "f(a) and f(c) have opposite signs, so c replaces b")?,
            Endpoint::Lower => writeln!(out, "f(a) and f(c) do not have opposite signs, so c replaces a")?,
        }
        writeln!(out, "________________________")
    }
}

impl<W: Write> Observer<applicability::Event, applicability::Action> for ConsoleLog<W> {
    fn observe(&mut self, event: &applicability::Event) -> Option<applicability::Action> {
        self.record(|log| log.log_check(event));
        None
    }
}

impl<W: Write> Observer<false_position::Event, false_position::Action> for ConsoleLog<W> {
    fn observe(&mut self, event: &false_position::Event) -> Option<false_position::Action> {
        self.record(|log| log.log_solve(event));
        None
    }
}

impl<W: Write> Observer<applicability::Event, applicability::Action> for &mut ConsoleLog<W> {
    fn observe(&mut self, event: &applicability::Event) -> Option<applicability::Action> {
        Observer::<applicability::Event, applicability::Action>::observe(*self, event)
    }
}

impl<W: Write> Observer<false_position::Event, false_position::Action> for &mut ConsoleLog<W> {
    fn observe(&mut self, event: &false_position::Event) -> Option<false_position::Action> {
        Observer::<false_position::Event, false_position::Action>::observe(*self, event)
    }
}
