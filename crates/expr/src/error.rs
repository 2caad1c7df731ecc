use evalexpr::EvalexprError;
use thiserror::Error;

/// Errors that can occur when parsing an [`Expression`](crate::Expression).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("invalid expression: {0}")]
    Syntax(#[source] EvalexprError),

    #[error("unknown variable `{0}`: expressions may only use `x`, `pi`, and `e`")]
    UnknownVariable(String),

    #[error("unknown function `{0}`")]
    UnknownFunction(String),
}

/// Errors that can occur when evaluating an [`ExprFunction`](crate::ExprFunction).
#[derive(Debug, Error)]
pub enum EvalError {
    /// The expression does not evaluate to a number.
    #[error("evaluation failed: {0}")]
    Evaluation(#[from] EvalexprError),

    /// The variable slot is held by an evaluation already in progress.
    #[error("function is already being evaluated")]
    Busy,
}
