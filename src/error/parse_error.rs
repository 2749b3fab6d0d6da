use crate::interpreter::token::Token;

/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the source expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A factor was required but the lookahead was neither a number nor `(`.
    #[error("Expected number or '(' at position {position}, found {found}.")]
    ExpectedOperand {
        /// The token encountered.
        found:    Token,
        /// Where it starts.
        position: usize,
    },
    /// A parenthesized expression was not closed.
    #[error("Expected ')' at position {position}, found {found}.")]
    ExpectedClosingParen {
        /// The token encountered instead of `)`.
        found:    Token,
        /// Where it starts.
        position: usize,
    },
    /// A complete expression was followed by more input.
    #[error("Unexpected token after expression at position {position}: {found}.")]
    UnexpectedTrailingToken {
        /// The first extra token.
        found:    Token,
        /// Where it starts.
        position: usize,
    },
    /// The lexer could not map a character to a token.
    #[error("Invalid character '{lexeme}' at position {position}.")]
    InvalidCharacter {
        /// The offending source text.
        lexeme:   String,
        /// Where it starts.
        position: usize,
    },
    /// A numeric literal is too large to be represented as a finite number.
    #[error("Number literal at position {position} is too large to represent.")]
    NumberTooLarge {
        /// Where the literal starts.
        position: usize,
    },
    /// The tree would need more nodes than the parser may construct.
    #[error("Out of memory: expression needs more than {limit} nodes.")]
    OutOfMemory {
        /// The node budget that was exhausted.
        limit: usize,
    },
    /// Parentheses were nested deeper than the parser allows.
    #[error("Nesting too deep at position {position}: more than {limit} levels of parentheses.")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// Position of the `(` that crossed the limit.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset the error points at, if it has one.
    ///
    /// # Example
    /// ```
    /// let err = reckon::parse("2 @ 3").unwrap_err();
    /// assert_eq!(err.position(), Some(2));
    ///
    /// let limits = reckon::ParserLimits { max_nodes: 1,
    ///                                     ..Default::default() };
    /// let err = reckon::parse_with("1 + 2", limits).unwrap_err();
    /// assert_eq!(err.position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::ExpectedOperand { position, .. }
            | Self::ExpectedClosingParen { position, .. }
            | Self::UnexpectedTrailingToken { position, .. }
            | Self::InvalidCharacter { position, .. }
            | Self::NumberTooLarge { position }
            | Self::NestingTooDeep { position, .. } => Some(*position),
            Self::OutOfMemory { .. } => None,
        }
    }
}
