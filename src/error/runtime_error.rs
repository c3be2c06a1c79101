use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An arithmetic operation overflowed under the checked policy.
    Overflow {
        /// The operator that overflowed.
        op:    BinaryOperator,
        /// The value of the left operand.
        left:  i64,
        /// The value of the right operand.
        right: i64,
    },
    /// The tree is deeper than the recursive strategy allows.
    RecursionLimitExceeded {
        /// The configured recursion limit.
        limit: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { op, left, right } => write!(f,
                                                         "Integer overflow while computing {left} {op} {right}."),
            Self::RecursionLimitExceeded { limit } => write!(f,
                                                             "Expression is nested deeper than the recursion limit of {limit}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
