use crate::ast::BinaryOperator;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Division by zero at position {position}.")]
    DivisionByZero {
        /// Position of the `/` operator.
        position: usize,
    },
    /// An operation produced a value too large to represent.
    #[error("Numeric overflow while computing '{op}' at position {position}.")]
    Overflow {
        /// The operator whose result was not finite.
        op:       BinaryOperator,
        /// Position of the operator.
        position: usize,
    },
    /// A node that the parser can never produce, such as a non-finite literal.
    #[error("Invalid AST node at position {position}.")]
    InvalidNode {
        /// Position recorded in the node.
        position: usize,
    },
}
