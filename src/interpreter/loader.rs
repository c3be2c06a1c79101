use std::{fs, path::Path};

use crate::{ast::Expr, error::LoadError};

/// Reads an expression tree from its JSON form.
///
/// The expected encoding is the externally tagged representation of
/// [`Expr`]: `{"Number":5}`, `{"Addition":[left, right]}` and
/// `{"Multiplication":[left, right]}`. Nesting is limited by `serde_json`'s
/// recursion guard; deeper documents are rejected as invalid rather than
/// overflowing the stack.
///
/// # Errors
/// Returns `LoadError::InvalidTree` with the position of the first problem
/// if `source` is not a well-formed tree.
///
/// # Example
/// ```
/// use arithtree::{ast::Expr, interpreter::loader::load_tree};
///
/// let expr = load_tree(r#"{"Multiplication":[{"Number":0},{"Number":999}]}"#).unwrap();
/// assert_eq!(expr, Expr::multiplication(Expr::number(0), Expr::number(999)));
///
/// assert!(load_tree(r#"{"Subtraction":[{"Number":1},{"Number":2}]}"#).is_err());
/// ```
pub fn load_tree(source: &str) -> Result<Expr, LoadError> {
    Ok(serde_json::from_str(source)?)
}

/// Reads the file at `path` and loads the tree it contains.
///
/// # Errors
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::InvalidTree` if its contents are not a well-formed tree.
pub fn load_tree_file(path: impl AsRef<Path>) -> Result<Expr, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| LoadError::Io { path:    path.display()
                                                                                    .to_string(),
                                                                      details: e.to_string(), })?;
    load_tree(&source)
}
