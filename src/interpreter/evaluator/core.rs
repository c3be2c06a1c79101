use std::{fmt, str::FromStr};

use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default maximum tree depth accepted by [`Strategy::Recursive`].
pub const DEFAULT_RECURSION_LIMIT: usize = 1_000;

/// How out-of-range results of addition and multiplication are handled.
///
/// The policy applies uniformly to every operation in a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Fail with [`RuntimeError::Overflow`] at the first overflowing
    /// operation.
    #[default]
    Checked,
    /// Wrap around using two's complement arithmetic.
    Wrapping,
    /// Clamp to `i64::MIN` or `i64::MAX`.
    Saturating,
}

/// How the evaluator walks the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Post-order fold on an explicit work stack. Accepts trees of any depth.
    #[default]
    Iterative,
    /// One call per node, limited to [`Context::recursion_limit`] levels.
    Recursive,
}

impl OverflowPolicy {
    /// The lowercase name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Wrapping => "wrapping",
            Self::Saturating => "saturating",
        }
    }
}

impl Strategy {
    /// The lowercase name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Iterative => "iterative",
            Self::Recursive => "recursive",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checked" => Ok(Self::Checked),
            "wrapping" => Ok(Self::Wrapping),
            "saturating" => Ok(Self::Saturating),
            _ => Err(format!("unknown overflow policy '{s}', expected one of: checked, wrapping, saturating")),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iterative" => Ok(Self::Iterative),
            "recursive" => Ok(Self::Recursive),
            _ => Err(format!("unknown strategy '{s}', expected one of: iterative, recursive")),
        }
    }
}

/// Stores the evaluation configuration.
///
/// A `Context` holds no state that changes during evaluation, so one value
/// can be shared by any number of callers, including across threads, and
/// evaluating the same tree always yields the same result.
///
/// ## Usage
///
/// `Context::new()` gives checked arithmetic on the iterative strategy. The
/// `with_*` methods adjust single settings.
///
/// ```
/// use arithtree::{
///     ast::Expr,
///     interpreter::evaluator::core::{Context, OverflowPolicy},
/// };
///
/// let context = Context::new().with_overflow(OverflowPolicy::Saturating);
/// let expr = Expr::multiplication(Expr::number(i64::MAX), Expr::number(2));
///
/// assert_eq!(context.eval(&expr), Ok(i64::MAX));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Handling of out-of-range results.
    pub overflow:        OverflowPolicy,
    /// Tree walking strategy.
    pub strategy:        Strategy,
    /// Deepest tree accepted by [`Strategy::Recursive`].
    pub recursion_limit: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with checked overflow, the iterative strategy and
    /// [`DEFAULT_RECURSION_LIMIT`].
    #[must_use]
    pub const fn new() -> Self {
        Self { overflow:        OverflowPolicy::Checked,
               strategy:        Strategy::Iterative,
               recursion_limit: DEFAULT_RECURSION_LIMIT, }
    }

    /// Returns a copy of `self` using `overflow`.
    #[must_use]
    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Returns a copy of `self` using `strategy`.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns a copy of `self` using `recursion_limit`.
    #[must_use]
    pub const fn with_recursion_limit(mut self, recursion_limit: usize) -> Self {
        self.recursion_limit = recursion_limit;
        self
    }

    /// Evaluates an expression and returns its integer value.
    ///
    /// This is the main entry point for expression evaluation. It dispatches
    /// to the configured strategy; both compute
    ///
    /// - `Number(v)` as `v`,
    /// - `Addition(l, r)` as `l + r`,
    /// - `Multiplication(l, r)` as `l * r`,
    ///
    /// with every operation applied under the overflow policy.
    ///
    /// # Errors
    /// - `RuntimeError::Overflow` if an operation overflows under
    ///   [`OverflowPolicy::Checked`].
    /// - `RuntimeError::RecursionLimitExceeded` if the recursive strategy
    ///   meets a tree deeper than `recursion_limit`.
    ///
    /// # Example
    /// ```
    /// use arithtree::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let expr = Expr::multiplication(Expr::addition(Expr::number(5), Expr::number(4)),
    ///                                 Expr::number(2));
    ///
    /// assert_eq!(Context::new().eval(&expr), Ok(18));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        match self.strategy {
            Strategy::Iterative => self.eval_iterative(expr),
            Strategy::Recursive => self.eval_recursive(expr),
        }
    }
}
