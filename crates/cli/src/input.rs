use std::io::{self, BufRead};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] io::Error),

    #[error("input ended before the {0} was given")]
    Eof(&'static str),

    #[error("the {what} must be a number, got `{token}`")]
    InvalidNumber { what: &'static str, token: String },
}

/// Reads whitespace-delimited tokens, possibly spread across lines.
pub struct Tokens<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    /// Returns the next token; `what` names it in errors.
    pub fn next_token(&mut self, what: &'static str) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::Eof(what));
            }
            self.pending = line.split_whitespace().rev().map(str::to_owned).collect();
        }
    }

    /// Returns the next token parsed as a float.
    pub fn next_f64(&mut self, what: &'static str) -> Result<f64, InputError> {
        let token = self.next_token(what)?;
        token
            .parse()
            .map_err(|_| InputError::InvalidNumber { what, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reads_tokens_across_lines() {
        let mut tokens = Tokens::new("x*x-4\n\n  0\n 5  \n".as_bytes());

        assert_eq!(tokens.next_token("expression").expect("token"), "x*x-4");
        assert_relative_eq!(tokens.next_f64("lower limit").expect("number"), 0.0);
        assert_relative_eq!(tokens.next_f64("upper limit").expect("number"), 5.0);
        assert!(matches!(tokens.next_token("extra"), Err(InputError::Eof("extra"))));
    }

    #[test]
    fn reads_several_tokens_per_line() {
        let mut tokens = Tokens::new("-1.5 2e1".as_bytes());

        assert_relative_eq!(tokens.next_f64("lower limit").expect("number"), -1.5);
        assert_relative_eq!(tokens.next_f64("upper limit").expect("number"), 20.0);
    }

    #[test]
    fn rejects_non_numbers() {
        let mut tokens = Tokens::new("zero".as_bytes());
        assert!(matches!(
            tokens.next_f64("lower limit"),
            Err(InputError::InvalidNumber { what: "lower limit", token }) if token == "zero"
        ));
    }
}
