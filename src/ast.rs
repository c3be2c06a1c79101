use std::{fmt, mem};

use serde::{Deserialize, Serialize};

/// A binary arithmetic operator.
///
/// Every interior node of an [`Expr`] tree carries exactly one operator. The
/// evaluator applies it to the values of the two children under the
/// configured overflow policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Integer addition (`+`).
    Add,
    /// Integer multiplication (`*`).
    Mul,
}

impl BinaryOperator {
    /// Returns the infix symbol of the operator.
    /// ## Example
    /// ```
    /// use arithtree::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Add.symbol(), "+");
    /// assert_eq!(BinaryOperator::Mul.symbol(), "*");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "*",
        }
    }

    const fn precedence(self) -> u8 {
        match self {
            Self::Add => 1,
            Self::Mul => 2,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed set of three variants. A `Number` is a leaf, while
/// `Addition` and `Multiplication` each own exactly two children. Children
/// are boxed and owned by their parent alone, so a tree can never contain
/// itself and is torn down together with its root.
///
/// Trees are built bottom-up and never mutated afterwards. Evaluation, node
/// counting, depth measurement, rendering and dropping all run on an explicit
/// work stack and are safe for trees of any depth. The derived `Clone`,
/// `PartialEq`, `Hash`, `Debug` and serde implementations are structural and
/// recurse once per level.
///
/// ## Example
/// ```
/// use arithtree::ast::Expr;
///
/// let sum = Expr::addition(Expr::number(5), Expr::number(4));
/// let product = Expr::multiplication(sum, Expr::number(2));
///
/// assert_eq!(product.to_string(), "(5 + 4) * 2");
/// assert_eq!(product.node_count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// An integer literal.
    Number(i64),
    /// The sum of the left and right operands.
    Addition(Box<Self>, Box<Self>),
    /// The product of the left and right operands.
    Multiplication(Box<Self>, Box<Self>),
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl Expr {
    /// Creates a leaf holding `value`.
    #[must_use]
    pub const fn number(value: i64) -> Self {
        Self::Number(value)
    }

    /// Creates an `Addition` node owning both operands.
    #[must_use]
    pub fn addition(left: Self, right: Self) -> Self {
        Self::Addition(Box::new(left), Box::new(right))
    }

    /// Creates a `Multiplication` node owning both operands.
    #[must_use]
    pub fn multiplication(left: Self, right: Self) -> Self {
        Self::Multiplication(Box::new(left), Box::new(right))
    }

    /// Creates the interior node that corresponds to `op`.
    ///
    /// ## Example
    /// ```
    /// use arithtree::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Mul, Expr::number(3), Expr::number(7));
    /// assert_eq!(expr, Expr::multiplication(Expr::number(3), Expr::number(7)));
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        match op {
            BinaryOperator::Add => Self::addition(left, right),
            BinaryOperator::Mul => Self::multiplication(left, right),
        }
    }

    /// Returns `true` if `self` is a `Number`.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Gets the operator of an interior node, or `None` for a leaf.
    /// ## Example
    /// ```
    /// use arithtree::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::addition(Expr::number(1), Expr::number(2));
    ///
    /// assert_eq!(expr.operator(), Some(BinaryOperator::Add));
    /// assert_eq!(Expr::number(1).operator(), None);
    /// ```
    #[must_use]
    pub fn operator(&self) -> Option<BinaryOperator> {
        self.split().map(|(op, _, _)| op)
    }

    /// Borrows the `(left, right)` children of an interior node, or returns
    /// `None` for a leaf.
    #[must_use]
    pub fn operands(&self) -> Option<(&Self, &Self)> {
        self.split().map(|(_, left, right)| (left, right))
    }

    /// Splits an interior node into its operator and children.
    pub(crate) fn split(&self) -> Option<(BinaryOperator, &Self, &Self)> {
        match self {
            Self::Number(_) => None,
            Self::Addition(left, right) => Some((BinaryOperator::Add, &**left, &**right)),
            Self::Multiplication(left, right) => Some((BinaryOperator::Mul, &**left, &**right)),
        }
    }

    /// Counts every node of the tree, leaves included.
    ///
    /// ## Example
    /// ```
    /// use arithtree::ast::Expr;
    ///
    /// let expr = Expr::addition(Expr::number(1),
    ///                           Expr::multiplication(Expr::number(2), Expr::number(3)));
    /// assert_eq!(expr.node_count(), 5);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            count += 1;
            if let Some((left, right)) = node.operands() {
                pending.push(left);
                pending.push(right);
            }
        }

        count
    }

    /// Measures the number of nodes on the longest root-to-leaf path.
    ///
    /// A single leaf has depth 1.
    ///
    /// ## Example
    /// ```
    /// use arithtree::ast::Expr;
    ///
    /// let expr = Expr::addition(Expr::number(1),
    ///                           Expr::multiplication(Expr::number(2), Expr::number(3)));
    /// assert_eq!(expr.depth(), 3);
    /// assert_eq!(Expr::number(9).depth(), 1);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            if let Some((left, right)) = node.operands() {
                pending.push((left, depth + 1));
                pending.push((right, depth + 1));
            }
        }

        deepest
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);

        // Each popped node has only leaf children left, so its own drop
        // returns without recursing.
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

/// Moves the interior children of `node` onto `pending`, leaving leaves in
/// their place.
fn detach_children(node: &mut Expr, pending: &mut Vec<Expr>) {
    if let Expr::Addition(left, right) | Expr::Multiplication(left, right) = node {
        for child in [left, right] {
            if !child.is_leaf() {
                pending.push(mem::replace(&mut **child, Expr::Number(0)));
            }
        }
    }
}

enum Piece<'a> {
    Node { expr: &'a Expr, grouped: bool },
    Operator(BinaryOperator),
    Text(&'static str),
}

/// Decides whether `child` needs parentheses below an operator `parent`.
///
/// Looser-binding operands are grouped, a right operand with the same
/// operator is grouped to keep the tree shape visible, and negative literals
/// are grouped so that `5 * -3` reads as `5 * (-3)`.
fn needs_group(child: &Expr, parent: BinaryOperator, is_right: bool) -> bool {
    match child.operator() {
        None => matches!(child, Expr::Number(value) if *value < 0),
        Some(op) => op.precedence() < parent.precedence() || (is_right && op == parent),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node { expr:    self,
                                             grouped: false, }];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Operator(op) => write!(f, " {op} ")?,
                Piece::Node { expr: Self::Number(value),
                              grouped, } => {
                    if grouped {
                        write!(f, "({value})")?;
                    } else {
                        write!(f, "{value}")?;
                    }
                },
                Piece::Node { expr, grouped } => {
                    let Some((op, left, right)) = expr.split() else {
                        continue;
                    };

                    if grouped {
                        pending.push(Piece::Text(")"));
                    }
                    pending.push(Piece::Node { expr:    right,
                                               grouped: needs_group(right, op, true), });
                    pending.push(Piece::Operator(op));
                    pending.push(Piece::Node { expr:    left,
                                               grouped: needs_group(left, op, false), });
                    if grouped {
                        pending.push(Piece::Text("("));
                    }
                },
            }
        }

        Ok(())
    }
}
