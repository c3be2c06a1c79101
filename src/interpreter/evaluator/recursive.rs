use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates an expression by structural recursion.
    ///
    /// Each node is evaluated in its own call, left operand first. Before
    /// descending below `recursion_limit` levels the evaluation stops with
    /// `RuntimeError::RecursionLimitExceeded`, so a deep tree is reported
    /// instead of exhausting the call stack.
    ///
    /// # Errors
    /// - `RuntimeError::RecursionLimitExceeded` for trees deeper than the
    ///   limit.
    /// - `RuntimeError::Overflow` under the checked policy.
    ///
    /// # Example
    /// ```
    /// use arithtree::{ast::Expr, error::RuntimeError, interpreter::evaluator::core::Context};
    ///
    /// let expr = Expr::addition(Expr::number(1),
    ///                           Expr::addition(Expr::number(2), Expr::number(3)));
    ///
    /// let context = Context::new();
    /// assert_eq!(context.eval_recursive(&expr), Ok(6));
    ///
    /// let shallow = context.with_recursion_limit(2);
    /// assert_eq!(shallow.eval_recursive(&expr),
    ///            Err(RuntimeError::RecursionLimitExceeded { limit: 2 }));
    /// ```
    pub fn eval_recursive(&self, expr: &Expr) -> EvalResult<i64> {
        self.eval_at_depth(expr, 1)
    }

    fn eval_at_depth(&self, expr: &Expr, depth: usize) -> EvalResult<i64> {
        if depth > self.recursion_limit {
            return Err(RuntimeError::RecursionLimitExceeded { limit: self.recursion_limit });
        }

        match expr {
            Expr::Number(value) => Ok(*value),
            Expr::Addition(left, right) => {
                self.eval_operands(BinaryOperator::Add, left, right, depth)
            },
            Expr::Multiplication(left, right) => {
                self.eval_operands(BinaryOperator::Mul, left, right, depth)
            },
        }
    }

    fn eval_operands(&self,
                     op: BinaryOperator,
                     left: &Expr,
                     right: &Expr,
                     depth: usize)
                     -> EvalResult<i64> {
        let left = self.eval_at_depth(left, depth + 1)?;
        let right = self.eval_at_depth(right, depth + 1)?;
        self.eval_binary(op, left, right)
    }
}
