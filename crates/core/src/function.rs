use std::convert::Infallible;

/// A real function of a single real variable.
///
/// Evaluation may fail with a typed error (for example a runtime type error in
/// a parsed expression). Mathematically undefined points are not errors: they
/// are reported as NaN or infinite values and it is up to the caller to
/// classify them.
///
/// Plain closures `Fn(f64) -> f64` implement `Function` with an
/// [`Infallible`] error.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluation itself fails.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval<F: Function>(f: &F, x: f64) -> f64 {
        f.call(x).expect("infallible")
    }

    #[test]
    fn closures_are_functions() {
        let square = |x: f64| x * x;
        assert_relative_eq!(eval(&square, 3.0), 9.0);
    }

    #[test]
    fn undefined_points_are_values_not_errors() {
        let reciprocal = |x: f64| 1.0 / x;
        assert!(eval(&reciprocal, 0.0).is_infinite());

        let log = |x: f64| x.ln();
        assert!(eval(&log, -1.0).is_nan());
    }
}
