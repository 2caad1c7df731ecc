use std::f64::consts;

use evalexpr::{EvalexprResult, Value};

/// Real functions registered under their usual names.
///
/// `log` is the base-10 logarithm and `ln` the natural one.
pub const FUNCTIONS: [(&str, fn(f64) -> f64); 14] = [
    ("sin", f64::sin),
    ("cos", f64::cos),
    ("tan", f64::tan),
    ("asin", f64::asin),
    ("acos", f64::acos),
    ("atan", f64::atan),
    ("sinh", f64::sinh),
    ("cosh", f64::cosh),
    ("tanh", f64::tanh),
    ("exp", f64::exp),
    ("ln", f64::ln),
    ("log", f64::log10),
    ("sqrt", f64::sqrt),
    ("abs", f64::abs),
];

/// Named constants available in expressions.
pub const CONSTANTS: [(&str, f64); 2] = [("pi", consts::PI), ("e", consts::E)];

/// `evalexpr` built-ins that are meaningful for real functions.
const PASSTHROUGH: [&str; 5] = ["min", "max", "floor", "round", "ceil"];

/// Returns true if `name` is a function an expression may call.
pub(crate) fn is_function(name: &str) -> bool {
    FUNCTIONS.iter().any(|(known, _)| *known == name)
        || PASSTHROUGH.contains(&name)
        || name.starts_with("math::")
}

/// Returns true if `name` is a named constant.
pub(crate) fn is_constant(name: &str) -> bool {
    CONSTANTS.iter().any(|(known, _)| *known == name)
}

/// Wraps a real function as an `evalexpr` function of one numeric argument.
pub(crate) fn wrap(op: fn(f64) -> f64) -> evalexpr::Function {
    evalexpr::Function::new(move |argument: &Value| -> EvalexprResult<Value> {
        Ok(Value::Float(op(argument.as_number()?)))
    })
}
