/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The tree is built bottom-up by the parser and never mutated afterwards.
/// Every `BinaryOp` owns its two operands exclusively, so the tree has no
/// sharing and no cycles, and dropping the root releases the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value:    f64,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl Expr {
    /// Creates a literal node.
    #[must_use]
    pub const fn number(value: f64, position: usize) -> Self {
        Self::Number { value, position }
    }

    /// Creates a binary node from two finished operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, position: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }

    /// Gets the source position from `self`.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Counts the nodes in the tree.
    ///
    /// # Example
    /// ```
    /// let expr = reckon::parse("1 + 2 * 3").unwrap();
    /// assert_eq!(expr.node_count(), 5);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Height of the tree; a lone literal has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Formats the tree fully parenthesized, making grouping explicit.
///
/// # Example
/// ```
/// let expr = reckon::parse("8 - 3 - 2 * 1.5").unwrap();
/// assert_eq!(expr.to_string(), "((8 - 3) - (2 * 1.5))");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
