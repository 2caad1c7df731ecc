use approx::assert_relative_eq;

use falsi_core::{Function, Interval};
use falsi_expr::{Expression, ParseError};
use falsi_observers::{ConsoleLog, Verbosity};
use falsi_solvers::{
    Outcome, Settings,
    applicability::Failure,
    false_position::{self, Status},
    find_root,
    sampling::DiscontinuityKind,
};
use integration_tests::find_root_in;

#[test]
fn quadratic_with_one_root_converges() {
    let outcome = find_root_in("x*x - 4", 0.0, 5.0).expect("should solve");

    let Outcome::Found { verdict, solution } = outcome else {
        panic!("expected a workable interval");
    };
    assert!(verdict.is_workable());
    assert_eq!(solution.status, Status::Converged);
    assert!(solution.f_at_root.abs() <= 0.01);
    assert_relative_eq!(solution.root, 2.0, epsilon = 0.01);
}

#[test]
fn no_sign_change_is_not_workable() {
    let outcome = find_root_in("x*x + 1", -5.0, 5.0).expect("should check");

    let Outcome::NotWorkable(verdict) = outcome else {
        panic!("expected a non-workable interval");
    };
    assert!(verdict.is_continuous());
    assert!(!verdict.has_sign_change());
    assert!(verdict.failures().contains(&Failure::EqualSigns {
        lower: -5.0,
        upper: 5.0,
        lower_value: 26.0,
        upper_value: 26.0,
    }));
}

#[test]
fn two_roots_are_not_workable() {
    let outcome = find_root_in("X^2 - 4", -5.0, 5.0).expect("should check");

    assert!(outcome.solution().is_none());
    assert_eq!(outcome.verdict().roots(), 2);
    assert!(
        outcome
            .verdict()
            .failures()
            .contains(&Failure::RootCount { roots: 2 })
    );
}

#[test]
fn pole_is_a_discontinuity() {
    let outcome = find_root_in("1/x", -1.0, 1.0).expect("should check");

    let discontinuity = outcome
        .verdict()
        .continuity
        .discontinuity
        .expect("pole at zero");
    assert!(discontinuity.x < 0.0 && discontinuity.x > -1.0);
    assert_eq!(discontinuity.kind, DiscontinuityKind::Jump);
    assert!(outcome.solution().is_none());
}

#[test]
fn undefined_region_is_not_workable() {
    // ln is NaN left of zero, so the very first scanned point fails.
    let outcome = find_root_in("ln(x + 0.5)", -1.0, 1.0).expect("should check");

    let discontinuity = outcome
        .verdict()
        .continuity
        .discontinuity
        .expect("undefined at the lower end");
    assert_eq!(discontinuity.kind, DiscontinuityKind::NonFinite);
    assert_relative_eq!(discontinuity.x, -1.0);
}

#[test]
fn nan_mid_iteration_diverges_instead_of_hanging() {
    // NaN on (1.3, 1.5), x² - 2 elsewhere.
    let expression =
        Expression::parse("x*x - 2 + 0 * sqrt(abs(x - 1.4) - 0.1)").expect("valid expression");
    let function = expression.function();

    let err = false_position::solve_unobserved(
        &function,
        [0.0, 2.0],
        &false_position::Config::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        false_position::Error::DivergentIteration { iter: 2, .. }
    ));

    // The applicability gate sees the same hole and never starts the solver.
    let outcome = find_root_in("x*x - 2 + 0 * sqrt(abs(x - 1.4) - 0.1)", 0.0, 2.0)
        .expect("should check");
    assert!(!outcome.verdict().is_continuous());
}

#[test]
fn zero_denominator_diverges() {
    let expression = Expression::parse("x*x - 1").expect("valid expression");

    let err = false_position::solve_unobserved(
        &expression.function(),
        [-1.0, 1.0],
        &false_position::Config::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        false_position::Error::DivergentIteration { iter: 1, .. }
    ));
}

#[test]
fn transcendental_functions_solve() {
    // x·sin(x) - 1 has a single root near 1.114 on [0, 2].
    let outcome = find_root_in("x*sin(x) - 1", 0.0, 2.0).expect("should solve");
    let solution = outcome.solution().expect("workable interval");
    assert_relative_eq!(solution.root, 1.114_157, epsilon = 1e-2);

    let outcome = find_root_in("exp(x) - 2", 0.0, 1.0).expect("should solve");
    let solution = outcome.solution().expect("workable interval");
    assert_relative_eq!(solution.root, 2.0_f64.ln(), epsilon = 1e-2);
}

#[test]
fn root_at_lower_endpoint_is_counted_once() {
    let outcome = find_root_in("x - 1", 1.0, 3.0).expect("should check");

    let verdict = outcome.verdict();
    assert_eq!(verdict.roots(), 1);
    assert!(verdict.root_count.zero_at_lower);
    // f(a) * f(b) == 0 is not a strict sign change.
    assert!(!verdict.has_sign_change());
}

#[test]
fn invalid_expressions_are_rejected() {
    assert!(matches!(Expression::parse(""), Err(ParseError::Empty)));
    assert!(matches!(
        Expression::parse("(x + 2"),
        Err(ParseError::Syntax(_))
    ));
    assert!(matches!(
        Expression::parse("x + y"),
        Err(ParseError::UnknownVariable(_))
    ));
}

#[test]
fn console_log_captures_the_whole_run() {
    let expression = Expression::parse("x*x - 4").expect("valid expression");
    let interval = Interval::new(0.0, 5.0).expect("finite interval");
    let mut log = ConsoleLog::new(Vec::new(), expression.source(), Verbosity::Normal);

    let outcome = find_root(
        &expression.function(),
        &interval,
        &Settings::default(),
        &mut log,
    )
    .expect("should solve");
    let output = String::from_utf8(log.finish().expect("no write errors")).expect("utf-8");

    let solution = outcome.solution().expect("workable interval");
    assert_eq!(output.matches("f(c) = ").count(), solution.iterations);
    assert_eq!(
        output.matches("________________________").count(),
        solution.iterations - 1
    );
}

#[test]
fn repeated_checks_agree() {
    let expression = Expression::parse("x^3 - 2*x - 5").expect("valid expression");
    let function = expression.function();
    let interval = Interval::new(2.0, 3.0).expect("finite interval");

    let first = find_root(&function, &interval, &Settings::default(), ()).expect("first run");
    let second = find_root(&function, &interval, &Settings::default(), ()).expect("second run");
    assert_eq!(first, second);

    // The handle's variable slot does not leak between calls.
    assert_relative_eq!(function.call(2.0).expect("evaluates"), -1.0);

    let expression = Expression::parse("x*x - 4").expect("valid expression");
    let function = expression.function();
    let interval = Interval::new(0.0, 5.0).expect("finite interval");

    let first = find_root(&function, &interval, &Settings::default(), ()).expect("first run");
    let second = find_root(&function, &interval, &Settings::default(), ()).expect("second run");
    assert!(first.solution().is_some());
    assert_eq!(first, second);
}
