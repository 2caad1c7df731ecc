use std::{cell::RefCell, fmt};

use evalexpr::{
    ContextWithMutableFunctions, ContextWithMutableVariables, HashMapContext, Node, Value,
};

use crate::{
    ExprFunction, ParseError,
    builtins::{self, CONSTANTS, FUNCTIONS},
};

/// Name of the free variable inside a parsed expression.
///
/// Users write `x` or `X`; a standalone `x` is rewritten to `X` before parsing.
pub const VARIABLE: &str = "X";

/// A parsed single-variable expression.
#[derive(Debug, Clone)]
pub struct Expression {
    source: String,
    normalized: String,
    node: Node,
    context: HashMapContext,
}

impl Expression {
    /// Parses `text` into an expression of `x`.
    ///
    /// Integer literals are read as floats, so `1/2` is `0.5`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is blank, is not valid syntax, or refers to
    /// a variable or function that is not available.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let source = text.trim();
        if source.is_empty() {
            return Err(ParseError::Empty);
        }

        let normalized = normalize(source);
        let node = evalexpr::build_operator_tree(&normalized).map_err(ParseError::Syntax)?;

        if let Some(name) = node
            .iter_variable_identifiers()
            .find(|name| *name != VARIABLE && !builtins::is_constant(name))
        {
            return Err(ParseError::UnknownVariable(name.to_owned()));
        }
        if let Some(name) = node
            .iter_function_identifiers()
            .find(|name| !builtins::is_function(name))
        {
            return Err(ParseError::UnknownFunction(name.to_owned()));
        }

        let context = base_context().map_err(ParseError::Syntax)?;

        Ok(Self {
            source: source.to_owned(),
            normalized,
            node,
            context,
        })
    }

    /// Returns the expression as the user wrote it.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the text that was handed to the parser.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Binds the free variable and returns an evaluable function.
    ///
    /// Each handle owns its own variable slot.
    #[must_use]
    pub fn function(&self) -> ExprFunction<'_> {
        ExprFunction::new(&self.node, RefCell::new(self.context.clone()))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Builds the evaluation context shared by every handle of an expression.
fn base_context() -> evalexpr::EvalexprResult<HashMapContext> {
    let mut context = HashMapContext::new();

    for (name, value) in CONSTANTS {
        context.set_value(name.to_owned(), Value::Float(value))?;
    }
    for (name, op) in FUNCTIONS {
        context.set_function(name.to_owned(), builtins::wrap(op))?;
    }
    context.set_value(VARIABLE.to_owned(), Value::Float(0.0))?;

    Ok(context)
}

/// Rewrites user input into the form the parser expects.
///
/// A standalone `x` becomes `X`, and integer literals gain a `.0` suffix so
/// arithmetic stays in floating point.
fn normalize(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch.is_ascii_digit() || (ch == '.' && chars.get(i + 1).is_some_and(char::is_ascii_digit))
        {
            let start = i;
            let mut is_float = false;

            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                is_float |= chars[i] == '.';
                i += 1;
            }
            if i < chars.len() && matches!(chars[i], 'e' | 'E') {
                is_float = true;
                i += 1;
                if i < chars.len() && matches!(chars[i], '+' | '-') {
                    i += 1;
                }
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            out.extend(&chars[start..i]);
            if !is_float {
                out.push_str(".0");
            }
        } else if is_identifier_char(ch) {
            let start = i;
            while i < chars.len() && is_identifier_char(chars[i]) {
                i += 1;
            }

            let word: String = chars[start..i].iter().collect();
            if word == "x" {
                out.push_str(VARIABLE);
            } else {
                out.push_str(&word);
            }
        } else {
            out.push(ch);
            i += 1;
        }
    }

    out
}

/// Characters that continue an identifier such as `math::log10`.
fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == ':'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_variable_and_literals() {
        assert_eq!(normalize("x*x - 4"), "X*X - 4.0");
        assert_eq!(normalize("X^2"), "X^2.0");
        assert_eq!(normalize("exp(x) - 1/2"), "exp(X) - 1.0/2.0");
        assert_eq!(normalize("max(x, 0.5) + 1e-3"), "max(X, 0.5) + 1e-3");
        assert_eq!(normalize("math::log10(x)"), "math::log10(X)");
        assert_eq!(normalize("xx + x2"), "xx + x2");
    }

    #[test]
    fn parses_and_keeps_source() {
        let expr = Expression::parse("  x*x - 4 ").expect("valid");
        assert_eq!(expr.source(), "x*x - 4");
        assert_eq!(expr.normalized(), "X*X - 4.0");
        assert_eq!(expr.to_string(), "x*x - 4");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(Expression::parse("   "), Err(ParseError::Empty)));
    }

    #[test]
    fn rejects_invalid_syntax() {
        assert!(matches!(
            Expression::parse("x*(x - 4"),
            Err(ParseError::Syntax(_))
        ));
    }

    #[test]
    fn rejects_unknown_identifiers() {
        assert!(matches!(
            Expression::parse("y + 1"),
            Err(ParseError::UnknownVariable(name)) if name == "y"
        ));
        assert!(matches!(
            Expression::parse("sine(x)"),
            Err(ParseError::UnknownFunction(name)) if name == "sine"
        ));
    }

    #[test]
    fn accepts_builtins_and_constants() {
        for text in ["sin(x) + cos(x)", "ln(x) * log(x)", "sqrt(abs(x)) - pi", "e^x", "min(x, 1)"] {
            assert!(Expression::parse(text).is_ok(), "{text} should parse");
        }
    }
}
