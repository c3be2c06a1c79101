use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::core::{Context, EvalResult},
};

/// A pending unit of work for the iterative evaluator.
enum Frame<'a> {
    /// Evaluate this subtree and push its value.
    Visit(&'a Expr),
    /// Pop two values, apply the operator, push the result.
    Apply(BinaryOperator),
}

impl Context {
    /// Evaluates an expression on an explicit work stack.
    ///
    /// The tree is folded in post-order: a node's operator is applied once
    /// both operand values are on the value stack. Operands are visited left
    /// first, so under the checked policy the reported overflow is the same
    /// one the recursive strategy reports. Memory use grows with tree depth
    /// on the heap rather than the call stack.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` under the checked policy.
    ///
    /// # Example
    /// ```
    /// use arithtree::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let mut expr = Expr::number(1);
    /// for _ in 1..100_000 {
    ///     expr = Expr::addition(Expr::number(1), expr);
    /// }
    ///
    /// assert_eq!(Context::new().eval_iterative(&expr), Ok(100_000));
    /// ```
    pub fn eval_iterative(&self, expr: &Expr) -> EvalResult<i64> {
        let mut frames = vec![Frame::Visit(expr)];
        let mut values: Vec<i64> = Vec::new();

        while let Some(frame) = frames.pop() {
            match frame {
                Frame::Visit(Expr::Number(value)) => values.push(*value),
                Frame::Visit(node) => {
                    let Some((op, left, right)) = node.split() else {
                        unreachable!("non-leaf nodes always split")
                    };
                    frames.push(Frame::Apply(op));
                    frames.push(Frame::Visit(right));
                    frames.push(Frame::Visit(left));
                },
                Frame::Apply(op) => {
                    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                        unreachable!("both operands are evaluated before their operator")
                    };
                    values.push(self.eval_binary(op, left, right)?);
                },
            }
        }

        Ok(values.pop().unwrap_or_default())
    }
}
