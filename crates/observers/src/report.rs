//! End-of-run console reports.

use std::io::{self, Write};

use falsi_solvers::{applicability::WorkabilityVerdict, false_position::Solution};

use crate::PRECISION;

const BORDER: &str = "************************************";
const INNER_WIDTH: usize = 28;

/// Writes the workability outcome of `f(x) = expression`.
///
/// A workable verdict is followed by the function, the interval, and the
/// logging precision, as a header for the iteration log.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_verdict<W: Write>(
    out: &mut W,
    expression: &str,
    verdict: &WorkabilityVerdict,
) -> io::Result<()> {
    if !verdict.is_workable() {
        return writeln!(out, "False Position is NOT workable");
    }

    writeln!(out, "False Position is workable.")?;
    writeln!(out, "f(x) = {expression}")?;
    writeln!(out, "Interval: {}", verdict.interval)?;
    writeln!(out)?;
    writeln!(out, "Logging precision: {PRECISION}")?;
    writeln!(out, "Starting False Position")?;
    writeln!(out, "********************")
}

/// Writes the boxed result banner: root, `f(root)`, and iteration count.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_solution<W: Write>(out: &mut W, solution: &Solution) -> io::Result<()> {
    let root = format!("root    = {:.PRECISION$}", solution.root);
    let value = format!("f(root) = {:.PRECISION$}", solution.f_at_root);
    let iterations = format!("Number of iterations: {}", solution.iterations);

    writeln!(out)?;
    writeln!(out, "{BORDER}")?;
    banner_line(out, "")?;
    banner_line(out, &root)?;
    banner_line(out, &value)?;
    banner_line(out, &"_".repeat(INNER_WIDTH))?;
    banner_line(out, "")?;
    banner_line(out, &iterations)?;
    banner_line(out, "")?;
    writeln!(out, "{BORDER}")
}

fn banner_line<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "*** {text:<INNER_WIDTH$} ***")
}

#[cfg(test)]
mod tests {
    use super::*;

    use falsi_core::Interval;
    use falsi_solvers::{
        applicability::check_unobserved,
        false_position::{Config, solve_unobserved},
        sampling,
    };

    fn verdict(f: impl Fn(f64) -> f64, lower: f64, upper: f64) -> WorkabilityVerdict {
        let interval = Interval::new(lower, upper).expect("finite interval");
        check_unobserved(&f, &interval, &sampling::Config::default()).expect("check")
    }

    #[test]
    fn prints_workable_header() {
        let mut out = Vec::new();
        print_verdict(&mut out, "x*x - 4", &verdict(|x| x * x - 4.0, 0.0, 5.0)).expect("write");

        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.starts_with("False Position is workable.\nf(x) = x*x - 4\nInterval: [0, 5]\n"));
        assert!(text.contains("Logging precision: 10\n"));
    }

    #[test]
    fn prints_not_workable() {
        let mut out = Vec::new();
        print_verdict(&mut out, "x*x + 1", &verdict(|x| x * x + 1.0, -5.0, 5.0)).expect("write");

        assert_eq!(
            String::from_utf8(out).expect("utf-8"),
            "False Position is NOT workable\n"
        );
    }

    #[test]
    fn banner_lines_are_aligned() {
        let solution =
            solve_unobserved(&|x: f64| x * x - 4.0, [2.0, 5.0], &Config::default()).expect("solve");

        let mut out = Vec::new();
        print_solution(&mut out, &solution).expect("write");
        let text = String::from_utf8(out).expect("utf-8");

        assert!(text.contains("*** root    = 2.0000000000       ***\n"));
        assert!(text.contains("*** f(root) = 0.0000000000       ***\n"));
        assert!(text.contains("*** Number of iterations: 1      ***\n"));

        let widths: Vec<usize> = text.lines().skip(1).map(str::len).collect();
        assert!(widths.iter().all(|&w| w == BORDER.len()));
    }
}
