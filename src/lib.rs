//! # arithtree
//!
//! arithtree represents arithmetic expressions as owned trees and evaluates
//! them with a tree-walking interpreter. Trees are built from integer
//! literals, additions and multiplications, and evaluate to a single `i64`
//! under an explicit overflow policy.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        loader::load_tree,
    },
};

/// Defines the structure of expression trees.
///
/// This module declares the `Expr` enum and the `BinaryOperator` carried by
/// its interior nodes. Trees are built bottom-up by the caller and traversed
/// by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression variants.
/// - Provides construction helpers and shape queries.
/// - Renders trees as infix text and tears them down without recursion.
pub mod ast;
/// Provides unified error types for loading and evaluation.
///
/// This module defines all errors that can be raised while reading a tree
/// from its serialized form or while evaluating it.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (loading, evaluation).
/// - Carries the operands of a failed operation or the input position.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of expression trees.
///
/// This module ties together tree loading, evaluation strategies and the
/// evaluation context.
///
/// # Responsibilities
/// - Evaluates trees under a configurable overflow policy and strategy.
/// - Loads trees from their JSON form.
pub mod interpreter;
/// General numeric helpers.
///
/// This module holds the fixed-width arithmetic used by the evaluator, one
/// function per overflow policy.
pub mod util;

/// Evaluates `expr` with the default [`Context`].
///
/// The default context uses checked arithmetic and the iterative strategy,
/// so trees of any depth are accepted and every overflow is reported.
///
/// # Errors
/// Returns `RuntimeError::Overflow` if any addition or multiplication
/// overflows an `i64`.
///
/// # Examples
/// ```
/// use arithtree::{ast::Expr, evaluate};
///
/// assert_eq!(evaluate(&Expr::number(5)), Ok(5));
///
/// let sum = Expr::addition(Expr::number(-3), Expr::number(3));
/// assert_eq!(evaluate(&sum), Ok(0));
///
/// let overflow = Expr::multiplication(Expr::number(i64::MAX), Expr::number(2));
/// assert!(evaluate(&overflow).is_err());
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    Context::new().eval(expr)
}

/// Returns the evaluation result of a tree given in JSON form.
///
/// This function loads the tree from `source` and evaluates it in `context`.
///
/// # Errors
/// Returns an error if the tree cannot be loaded or if evaluation fails.
///
/// # Examples
/// ```
/// use arithtree::{get_result, interpreter::evaluator::core::Context};
///
/// let source = r#"{"Addition":[{"Number":5},{"Number":4}]}"#;
/// assert_eq!(get_result(source, &Context::new()).unwrap(), 9);
///
/// // Malformed trees are reported instead of evaluated.
/// assert!(get_result(r#"{"Addition":[]}"#, &Context::new()).is_err());
/// ```
pub fn get_result(source: &str, context: &Context) -> Result<i64, Box<dyn std::error::Error>> {
    let expr = load_tree(source)?;
    Ok(context.eval(&expr)?)
}
