use std::ops::Range;

/// Represents a lexical token in the source input.
///
/// A token is the smallest meaningful unit produced by the lexer. The set is
/// closed: numbers, the four arithmetic operators, parentheses, and two
/// sentinels. `End` marks the end of input and `Error` stands in for any
/// character the lexer cannot map, leaving the decision about it to the
/// parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    Number(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input. Requesting more tokens keeps returning `End`.
    End,
    /// A character (or run of characters) that is not part of the language.
    Error,
}

impl Token {
    /// Returns `true` for the `End` sentinel.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Multiply => write!(f, "'*'"),
            Self::Divide => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::End => write!(f, "end of input"),
            Self::Error => write!(f, "invalid character"),
        }
    }
}

/// A token together with the byte range it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The token itself.
    pub token: Token,
    /// Byte offsets of the token in the source. Empty for `End`.
    pub span:  Range<usize>,
}
