use thiserror::Error;

use falsi_core::{Function, Interval, Observer};

use crate::{
    applicability::{self, WorkabilityVerdict},
    false_position::{self, Solution},
    sampling,
};

/// Settings for the gated pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Settings {
    /// Scan resolution and tolerances for the applicability check.
    pub sampling: sampling::Config,

    /// Convergence settings for the root finder.
    pub solver: false_position::Config,
}

/// The outcome of [`find_root`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The interval was workable and the root finder returned a solution.
    Found {
        verdict: WorkabilityVerdict,
        solution: Solution,
    },

    /// The interval failed at least one workability criterion.
    NotWorkable(WorkabilityVerdict),
}

impl Outcome {
    /// Returns the applicability verdict.
    #[must_use]
    pub fn verdict(&self) -> &WorkabilityVerdict {
        match self {
            Self::Found { verdict, .. } | Self::NotWorkable(verdict) => verdict,
        }
    }

    /// Returns the solution, if the root finder ran.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Found { solution, .. } => Some(solution),
            Self::NotWorkable(_) => None,
        }
    }
}

/// Errors that can occur in [`find_root`].
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Applicability(#[from] applicability::Error),

    #[error(transparent)]
    Solver(#[from] false_position::Error),
}

/// Checks applicability and, if the interval is workable, finds a root.
///
/// A non-workable interval is not an error: it is returned as
/// [`Outcome::NotWorkable`] with the verdict explaining why.
///
/// The observer receives the events of both stages and must handle both
/// event types.
///
/// # Errors
///
/// Returns an error if a function evaluation fails, the observer aborts the
/// check, or the root finder fails.
pub fn find_root<F, Obs>(
    f: &F,
    interval: &Interval,
    settings: &Settings,
    mut observer: Obs,
) -> Result<Outcome, Error>
where
    F: Function,
    Obs: Observer<applicability::Event, applicability::Action>
        + Observer<false_position::Event, false_position::Action>,
{
    let verdict = applicability::check(
        f,
        interval,
        &settings.sampling,
        |event: &applicability::Event| {
            Observer::<applicability::Event, applicability::Action>::observe(&mut observer, event)
        },
    )?;

    if !verdict.is_workable() {
        return Ok(Outcome::NotWorkable(verdict));
    }

    let solution = false_position::solve(
        f,
        interval.as_array(),
        &settings.solver,
        |event: &false_position::Event| {
            Observer::<false_position::Event, false_position::Action>::observe(
                &mut observer,
                event,
            )
        },
    )?;

    Ok(Outcome::Found { verdict, solution })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{applicability::Failure, false_position::Status};

    /// Records how many events of each stage it sees.
    #[derive(Default)]
    struct Counter {
        checks: usize,
        estimates: usize,
    }

    impl Observer<applicability::Event, applicability::Action> for Counter {
        fn observe(&mut self, event: &applicability::Event) -> Option<applicability::Action> {
            if let applicability::Event::Checked(_) = event {
                self.checks += 1;
            }
            None
        }
    }

    impl Observer<false_position::Event, false_position::Action> for Counter {
        fn observe(&mut self, event: &false_position::Event) -> Option<false_position::Action> {
            if let false_position::Event::Estimate { .. } = event {
                self.estimates += 1;
            }
            None
        }
    }

    impl Observer<applicability::Event, applicability::Action> for &mut Counter {
        fn observe(&mut self, event: &applicability::Event) -> Option<applicability::Action> {
            Observer::<applicability::Event, applicability::Action>::observe(*self, event)
        }
    }

    impl Observer<false_position::Event, false_position::Action> for &mut Counter {
        fn observe(&mut self, event: &false_position::Event) -> Option<false_position::Action> {
            Observer::<false_position::Event, false_position::Action>::observe(*self, event)
        }
    }

    fn interval(lower: f64, upper: f64) -> Interval {
        Interval::new(lower, upper).expect("finite interval")
    }

    #[test]
    fn finds_root_on_workable_interval() {
        let mut counter = Counter::default();

        let outcome = find_root(
            &|x: f64| x * x - 4.0,
            &interval(0.0, 5.0),
            &Settings::default(),
            &mut counter,
        )
        .expect("should succeed");

        let solution = outcome.solution().expect("workable interval");
        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.root, 2.0, epsilon = 0.01);
        assert!(outcome.verdict().is_workable());

        assert_eq!(counter.checks, 1);
        assert_eq!(counter.estimates, solution.iterations);
    }

    #[test]
    fn skips_solver_on_non_workable_interval() {
        let mut counter = Counter::default();

        let outcome = find_root(
            &|x: f64| x * x - 4.0,
            &interval(-5.0, 5.0),
            &Settings::default(),
            &mut counter,
        )
        .expect("should succeed");

        assert!(outcome.solution().is_none());
        assert_eq!(
            outcome.verdict().failures(),
            vec![
                Failure::EqualSigns {
                    lower: -5.0,
                    upper: 5.0,
                    lower_value: 21.0,
                    upper_value: 21.0,
                },
                Failure::RootCount { roots: 2 },
            ]
        );
        assert_eq!(counter.checks, 1);
        assert_eq!(counter.estimates, 0);
    }

    /// Fails to evaluate anywhere.
    struct Broken;

    impl Function for Broken {
        type Error = std::fmt::Error;

        fn call(&self, _x: f64) -> Result<f64, Self::Error> {
            Err(std::fmt::Error)
        }
    }

    #[test]
    fn stage_errors_are_wrapped() {
        let err = find_root(
            &Broken,
            &interval(0.0, 1.0),
            &Settings::default(),
            &mut Counter::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Applicability(applicability::Error::Function { .. })
        ));

        // A coarse grid never samples the hole, but the first secant step lands in it.
        let settings = Settings {
            sampling: sampling::Config::new(0.5, 0.01, 10.0).expect("valid"),
            ..Settings::default()
        };
        let holed = |x: f64| if x > 0.2 && x < 0.3 { f64::NAN } else { x - 0.25 };

        let err = find_root(&holed, &interval(0.0, 1.0), &settings, ()).unwrap_err();
        assert!(matches!(
            err,
            Error::Solver(false_position::Error::DivergentIteration { iter: 1, .. })
        ));
    }
}
