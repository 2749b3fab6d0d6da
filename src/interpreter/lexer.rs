use std::ops::Range;

use logos::Logos;
use tracing::{error, trace};

use crate::interpreter::token::{Spanned, Token};

/// Why the lexer produced a [`Token::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// The text matches no token of the language.
    #[default]
    InvalidCharacter,
    /// A numeric literal whose value does not fit a finite `f64`.
    NumberTooLarge,
}

/// Raw lexemes recognised by the generated scanner.
///
/// This is the scanner's private vocabulary. [`Lexer`] maps it onto the
/// public [`Token`] model and adds the `End` and `Error` sentinels, which the
/// scanner expresses as `None` and `Err(LexError)`.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"\s+", error = LexError)]
enum Lexeme {
    /// Numeric literals: `42`, `3.14`, `2.` and `.5`. No sign, no exponent.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Multiply,
    #[token("/")]
    Divide,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Parses a numeric literal from the current slice.
///
/// Literals too long to fit a finite `f64` are rejected, which turns them
/// into an `Error` token instead of a silent infinity.
fn parse_number(lex: &mut logos::Lexer<Lexeme>) -> Result<f64, LexError> {
    let value = lex.slice().parse::<f64>().map_err(|_| LexError::InvalidCharacter)?;
    if value.is_finite() { Ok(value) } else { Err(LexError::NumberTooLarge) }
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number(value) => Self::Number(value),
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Multiply => Self::Multiply,
            Lexeme::Divide => Self::Divide,
            Lexeme::LParen => Self::LParen,
            Lexeme::RParen => Self::RParen,
        }
    }
}

/// Pull-based lexer over a single expression string.
///
/// Each call to [`Lexer::next_token`] skips whitespace, consumes exactly one
/// token and advances the cursor past it. Once the input is exhausted the
/// lexer keeps returning [`Token::End`] without moving.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::Lexer, token::Token};
///
/// let mut lexer = Lexer::new("2 * (3.5)");
/// assert_eq!(lexer.next_token(), Token::Number(2.0));
/// assert_eq!(lexer.next_token(), Token::Multiply);
/// assert_eq!(lexer.next_token(), Token::LParen);
/// assert_eq!(lexer.next_token(), Token::Number(3.5));
/// assert_eq!(lexer.slice(), "3.5");
/// assert_eq!(lexer.next_token(), Token::RParen);
/// assert_eq!(lexer.next_token(), Token::End);
/// assert_eq!(lexer.next_token(), Token::End);
/// ```
pub struct Lexer<'src> {
    source:  &'src str,
    scanner: logos::Lexer<'src, Lexeme>,
    /// Byte offset just past the last consumed token.
    cursor:  usize,
    /// Span of the most recently returned token.
    span:    Range<usize>,
    /// Reason for the most recent `Error` token.
    error:   Option<LexError>,
    done:    bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               scanner: Lexeme::lexer(source),
               cursor: 0,
               span: 0..0,
               error: None,
               done: false }
    }

    /// Returns the next token and advances past it.
    ///
    /// Unmapped characters are reported as [`Token::Error`] rather than as an
    /// error value; the parser decides what to do with them.
    pub fn next_token(&mut self) -> Token {
        let end = self.source.len();
        self.error = None;
        if self.done {
            self.span = end..end;
            return Token::End;
        }

        let Some(lexeme) = self.scanner.next() else {
            self.done = true;
            self.cursor = end;
            self.span = end..end;
            trace!(position = end, "end of input");
            return Token::End;
        };

        let mut span = self.scanner.span();
        if span.is_empty() {
            // A token that does not advance would make the parser spin forever.
            error!(position = span.start, "scanner produced a zero-width token");
            self.done = true;
            self.span = span;
            self.error = Some(LexError::InvalidCharacter);
            return Token::Error;
        }

        let token = match lexeme {
            Ok(lexeme) => Token::from(lexeme),
            Err(reason) => {
                // Keep the cursor on a char boundary so the offending text can be sliced.
                let boundary = (span.end..=end).find(|&i| self.source.is_char_boundary(i))
                                               .unwrap_or(end);
                if boundary > span.end {
                    self.scanner.bump(boundary - span.end);
                    span.end = boundary;
                }
                self.error = Some(reason);
                Token::Error
            },
        };

        self.cursor = span.end;
        self.span = span;
        trace!(?token, span = ?self.span, "token");
        token
    }

    /// Byte range of the most recently returned token.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Source text of the most recently returned token. Empty for `End`.
    #[must_use]
    pub fn slice(&self) -> &'src str {
        self.source.get(self.span.clone()).unwrap_or_default()
    }

    /// Current scan position: the byte offset just past the last token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Why the most recent token is [`Token::Error`]; `None` for any other
    /// token.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{lexer::{LexError, Lexer}, token::Token};
    ///
    /// let mut lexer = Lexer::new("1 ?");
    /// assert_eq!(lexer.next_token(), Token::Number(1.0));
    /// assert_eq!(lexer.error(), None);
    /// assert_eq!(lexer.next_token(), Token::Error);
    /// assert_eq!(lexer.error(), Some(LexError::InvalidCharacter));
    /// ```
    #[must_use]
    pub const fn error(&self) -> Option<LexError> {
        self.error
    }
}

/// Collects the complete token stream of `source`, ending with `End`.
///
/// Scanning does not stop at `Error` tokens, so the result shows every
/// problem in the input at once.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::tokenize, token::Token};
///
/// let tokens: Vec<Token> = tokenize("1 @ 2").into_iter().map(|t| t.token).collect();
/// assert_eq!(tokens,
///            vec![Token::Number(1.0), Token::Error, Token::Number(2.0), Token::End]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Spanned> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        tokens.push(Spanned { token,
                              span: lexer.span() });
        if token.is_end() {
            break;
        }
    }

    tokens
}
