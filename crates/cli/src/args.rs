use thiserror::Error;

use falsi_observers::Verbosity;
use falsi_solvers::{Settings, false_position};

pub const USAGE: &str = "\
Usage: falsi [OPTIONS]

Reads an expression of x and an interval from standard input, checks that
false position applies, and finds the root.

Options:
  --quiet          Log failures and root estimates only
  --trace          Also log every point visited by the applicability scans
  --max-iters N    Stop after N iterations (default 10000)
  --tol T          Converge once |f(c)| <= T (default 0.01)
  -h, --help       Print this help
";

/// What the command line asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Run(Options),
    Help,
}

/// Options for a solving session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    pub verbosity: Verbosity,
    pub settings: Settings,
}

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("unknown option `{0}`\n\n{USAGE}")]
    UnknownFlag(String),

    #[error("option `{0}` needs a value")]
    MissingValue(&'static str),

    #[error("option `{flag}` expects a number, got `{value}`")]
    InvalidValue { flag: &'static str, value: String },

    #[error(transparent)]
    Config(#[from] false_position::ConfigError),
}

impl Command {
    /// Parses command-line arguments, excluding the program name.
    ///
    /// When `--quiet` and `--trace` are both given, the last one wins.
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let defaults = false_position::Config::default();
        let mut verbosity = Verbosity::Normal;
        let mut residual_tol = defaults.residual_tol();
        let mut max_iters = defaults.max_iters();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Self::Help),
                "--quiet" => verbosity = Verbosity::Quiet,
                "--trace" => verbosity = Verbosity::Trace,
                "--max-iters" => max_iters = value(&mut args, "--max-iters")?,
                "--tol" => residual_tol = value(&mut args, "--tol")?,
                _ => return Err(ArgsError::UnknownFlag(arg)),
            }
        }

        let settings = Settings {
            solver: false_position::Config::new(residual_tol, max_iters)?,
            ..Settings::default()
        };

        Ok(Self::Run(Options {
            verbosity,
            settings,
        }))
    }
}

fn value<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| ArgsError::InvalidValue { flag, value })
}
