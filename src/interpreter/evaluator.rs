/// Binary operator evaluation logic.
///
/// Applies addition and multiplication to two already evaluated operands
/// under the context's overflow policy.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation entry point, the runtime configuration and the
/// result type shared by every strategy.
pub mod core;

/// Structural recursion over the tree.
///
/// Mirrors the evaluation algebra one call per node and refuses trees deeper
/// than the configured recursion limit.
pub mod recursive;

/// Explicit work-stack evaluation.
///
/// Performs the same post-order fold as the recursive strategy without using
/// the call stack, so tree depth is bounded only by available memory.
pub mod stack;
