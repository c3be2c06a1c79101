/// Fixed-width integer arithmetic helpers.
///
/// This module provides one function per overflow policy. Each applies a
/// [`BinaryOperator`](crate::ast::BinaryOperator) to two `i64` operands and
/// handles the out-of-range case the way its policy prescribes: failing,
/// wrapping around, or clamping to the nearest bound.
pub mod num;
