/// Loading errors.
///
/// Defines the errors that can occur while reading an expression tree from
/// its serialized form, before any evaluation takes place.
pub mod load_error;
/// Runtime errors.
///
/// Contains the errors that can be raised during evaluation, such as an
/// arithmetic overflow under the checked policy or a tree that is too deep
/// for the recursive strategy.
pub mod runtime_error;

pub use load_error::LoadError;
pub use runtime_error::RuntimeError;
