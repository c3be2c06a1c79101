use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::{Context, EvalResult, OverflowPolicy},
    util::num,
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// The operation is routed to the helper of the configured overflow
    /// policy. Only the checked policy can fail; wrapping and saturating
    /// arithmetic are total.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` when the checked policy is active and
    /// the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use arithtree::{
    ///     ast::BinaryOperator,
    ///     interpreter::evaluator::core::{Context, OverflowPolicy},
    /// };
    ///
    /// let context = Context::new();
    /// assert_eq!(context.eval_binary(BinaryOperator::Add, 3, 4), Ok(7));
    /// assert!(context.eval_binary(BinaryOperator::Mul, i64::MAX, 2).is_err());
    ///
    /// let context = context.with_overflow(OverflowPolicy::Wrapping);
    /// assert_eq!(context.eval_binary(BinaryOperator::Mul, i64::MAX, 2), Ok(-2));
    /// ```
    pub fn eval_binary(&self, op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        match self.overflow {
            OverflowPolicy::Checked => num::checked(op, left, right),
            OverflowPolicy::Wrapping => Ok(num::wrapping(op, left, right)),
            OverflowPolicy::Saturating => Ok(num::saturating(op, left, right)),
        }
    }
}
