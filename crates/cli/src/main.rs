//! Interactive false-position session.
//!
//! Reads an expression of `x` and an interval from standard input, reports
//! whether false position applies, and if it does, logs the iteration and
//! prints the root.

mod args;
mod input;

use std::{
    error::Error,
    io::{self, Write},
};

use falsi_core::Interval;
use falsi_expr::Expression;
use falsi_observers::{ConsoleLog, log_value, print_solution, print_verdict};
use falsi_solvers::{applicability, false_position};

use args::{Command, Options, USAGE};
use input::Tokens;

fn main() -> Result<(), Box<dyn Error>> {
    let options = match Command::parse(std::env::args().skip(1))? {
        Command::Run(options) => options,
        Command::Help => {
            print!("{USAGE}");
            return Ok(());
        }
    };

    let mut tokens = Tokens::new(io::stdin().lock());
    let mut out = io::stdout().lock();

    write!(out, "Enter an expression (the variable should be x): ")?;
    out.flush()?;
    let expression = Expression::parse(&tokens.next_token("expression")?)?;

    writeln!(out, "Enter the interval, lower limit then upper limit")?;
    out.flush()?;
    let lower = tokens.next_f64("lower limit")?;
    let upper = tokens.next_f64("upper limit")?;
    let interval = Interval::new(lower, upper)?;

    writeln!(out, "\n")?;
    run(&expression, &interval, &options, &mut out)
}

/// Checks applicability, then solves and prints the result if workable.
///
/// A non-workable interval is reported and is not an error.
fn run<W: Write>(
    expression: &Expression,
    interval: &Interval,
    options: &Options,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let function = expression.function();
    let settings = &options.settings;

    log_value(out, "STEP_SIZE: ", settings.sampling.step_size())?;

    let mut log = ConsoleLog::new(&mut *out, expression.source(), options.verbosity);
    let verdict = applicability::check(&function, interval, &settings.sampling, &mut log)?;
    log.finish()?;

    print_verdict(out, expression.source(), &verdict)?;
    if !verdict.is_workable() {
        return Ok(());
    }

    let mut log = ConsoleLog::new(&mut *out, expression.source(), options.verbosity);
    let solution = false_position::solve(
        &function,
        interval.as_array(),
        &settings.solver,
        &mut log,
    );
    log.finish()?;

    print_solution(out, &solution?)?;
    Ok(())
}
