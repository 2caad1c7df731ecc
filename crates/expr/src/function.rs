use std::cell::RefCell;

use evalexpr::{ContextWithMutableVariables, HashMapContext, Node, Value};

use falsi_core::Function;

use crate::{EvalError, VARIABLE};

/// An [`Expression`](crate::Expression) with its variable bound to a slot.
///
/// The handle owns the slot, so separate handles never interfere. It is not
/// `Sync`; a reentrant call while an evaluation is in flight fails with
/// [`EvalError::Busy`].
#[derive(Debug)]
pub struct ExprFunction<'a> {
    node: &'a Node,
    context: RefCell<HashMapContext>,
}

impl<'a> ExprFunction<'a> {
    pub(crate) fn new(node: &'a Node, context: RefCell<HashMapContext>) -> Self {
        Self { node, context }
    }
}

impl Function for ExprFunction<'_> {
    type Error = EvalError;

    /// Evaluates the expression at `x`.
    ///
    /// Undefined operations such as `1/0` or `ln(-1)` produce infinite or NaN
    /// values, not errors.
    fn call(&self, x: f64) -> Result<f64, EvalError> {
        let mut context = self
            .context
            .try_borrow_mut()
            .map_err(|_| EvalError::Busy)?;

        context.set_value(VARIABLE.to_owned(), Value::Float(x))?;
        Ok(self.node.eval_number_with_context(&*context)?)
    }
}
