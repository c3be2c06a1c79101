/// The evaluator module reduces expression trees to integers.
///
/// The evaluator folds a tree bottom-up, applying each interior node's
/// operator to the values of its children. It is the core execution engine
/// of the interpreter and never mutates the tree it reads.
///
/// # Responsibilities
/// - Evaluates every node variant with exhaustive matching.
/// - Applies the configured overflow policy to every operation.
/// - Offers a stack-safe iterative strategy and a bounded recursive one.
pub mod evaluator;
/// The loader module reads expression trees from their serialized form.
///
/// Trees are exchanged as JSON using the externally tagged encoding of
/// [`Expr`](crate::ast::Expr), for example
/// `{"Addition":[{"Number":5},{"Number":4}]}`. This is a data format, not a
/// textual arithmetic syntax.
///
/// # Responsibilities
/// - Converts JSON text or files into [`Expr`](crate::ast::Expr) trees.
/// - Reports malformed input with line and column information.
pub mod loader;
