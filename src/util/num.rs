use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Applies `op` and fails if the exact result does not fit in an `i64`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` carrying the operator and both operands
/// when the result is out of range.
///
/// ## Example
/// ```
/// use arithtree::{ast::BinaryOperator, error::RuntimeError, util::num::checked};
///
/// assert_eq!(checked(BinaryOperator::Mul, 6, 7), Ok(42));
///
/// let err = checked(BinaryOperator::Add, i64::MAX, 1).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { op: BinaryOperator::Add, .. }));
/// ```
pub fn checked(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Mul => left.checked_mul(right),
    };

    result.ok_or(RuntimeError::Overflow { op, left, right })
}

/// Applies `op` with two's complement wrap-around.
///
/// ## Example
/// ```
/// use arithtree::{ast::BinaryOperator, util::num::wrapping};
///
/// assert_eq!(wrapping(BinaryOperator::Add, i64::MAX, 1), i64::MIN);
/// assert_eq!(wrapping(BinaryOperator::Mul, i64::MIN, -1), i64::MIN);
/// ```
#[must_use]
pub const fn wrapping(op: BinaryOperator, left: i64, right: i64) -> i64 {
    match op {
        BinaryOperator::Add => left.wrapping_add(right),
        BinaryOperator::Mul => left.wrapping_mul(right),
    }
}

/// Applies `op` and clamps an out-of-range result to `i64::MIN` or
/// `i64::MAX`.
///
/// ## Example
/// ```
/// use arithtree::{ast::BinaryOperator, util::num::saturating};
///
/// assert_eq!(saturating(BinaryOperator::Add, i64::MAX, 1), i64::MAX);
/// assert_eq!(saturating(BinaryOperator::Mul, i64::MIN, 2), i64::MIN);
/// assert_eq!(saturating(BinaryOperator::Mul, i64::MIN, -1), i64::MAX);
/// ```
#[must_use]
pub const fn saturating(op: BinaryOperator, left: i64, right: i64) -> i64 {
    match op {
        BinaryOperator::Add => left.saturating_add(right),
        BinaryOperator::Mul => left.saturating_mul(right),
    }
}
