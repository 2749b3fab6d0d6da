use std::ops::Range;

use tracing::{debug, warn};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{LexError, Lexer},
        token::Token,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default number of nodes a single parse may construct.
pub const DEFAULT_MAX_NODES: usize = 4096;
/// Default maximum nesting of parentheses.
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Largest node budget a parser accepts. Bigger requests are clamped.
pub const MAX_NODES_LIMIT: usize = 8192;
/// Largest nesting limit a parser accepts. Bigger requests are clamped.
pub const MAX_DEPTH_LIMIT: usize = 512;

/// Resource limits enforced while building a tree.
///
/// `max_nodes` is the parser's node store: once it is exhausted the parse
/// fails with [`ParseError::OutOfMemory`]. `max_depth` bounds parenthesis
/// nesting, and with it the recursion depth of parsing and evaluation.
///
/// Both values are capped at [`MAX_NODES_LIMIT`] and [`MAX_DEPTH_LIMIT`] when
/// a parser is built, since parsing, evaluating and dropping a tree all
/// recurse once per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserLimits {
    /// Maximum number of AST nodes.
    pub max_nodes: usize,
    /// Maximum number of simultaneously open parentheses.
    pub max_depth: usize,
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self { max_nodes: DEFAULT_MAX_NODES,
               max_depth: DEFAULT_MAX_DEPTH, }
    }
}

impl ParserLimits {
    /// Returns these limits with each value capped at its hard maximum.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ParserLimits,
    ///     interpreter::parser::core::{MAX_DEPTH_LIMIT, MAX_NODES_LIMIT},
    /// };
    ///
    /// let limits = ParserLimits { max_nodes: usize::MAX,
    ///                             max_depth: usize::MAX, }.clamped();
    /// assert_eq!(limits,
    ///            ParserLimits { max_nodes: MAX_NODES_LIMIT,
    ///                           max_depth: MAX_DEPTH_LIMIT, });
    ///
    /// let small = ParserLimits { max_nodes: 10,
    ///                            max_depth: 2, };
    /// assert_eq!(small.clamped(), small);
    /// ```
    #[must_use]
    pub fn clamped(self) -> Self {
        Self { max_nodes: self.max_nodes.min(MAX_NODES_LIMIT),
               max_depth: self.max_depth.min(MAX_DEPTH_LIMIT), }
    }
}

/// Recursive-descent parser with one token of lookahead.
///
/// After construction, and after every successfully parsed construct,
/// `current` holds the next unconsumed token. Errors are returned as soon as
/// they are found; subtrees built before the error are dropped on the way
/// out, so no partial tree ever escapes.
///
/// The grammar, lowest precedence first:
///
/// ```text
/// expression := term (("+" | "-") term)*
/// term       := factor (("*" | "/") factor)*
/// factor     := NUMBER | "(" expression ")"
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
    span:    Range<usize>,
    limits:  ParserLimits,
    nodes:   usize,
    depth:   usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser with default limits and fetches the first token.
    #[must_use]
    pub fn new(lexer: Lexer<'src>) -> Self {
        Self::with_limits(lexer, ParserLimits::default())
    }

    /// Creates a parser enforcing `limits` and fetches the first token.
    ///
    /// Limits above [`MAX_NODES_LIMIT`] or [`MAX_DEPTH_LIMIT`] are clamped.
    #[must_use]
    pub fn with_limits(mut lexer: Lexer<'src>, limits: ParserLimits) -> Self {
        let clamped = limits.clamped();
        if clamped != limits {
            warn!(requested = ?limits, applied = ?clamped, "parser limits clamped");
        }
        let current = lexer.next_token();
        let span = lexer.span();
        Self { lexer,
               current,
               span,
               limits: clamped,
               nodes: 0,
               depth: 0 }
    }

    /// Parses the whole input as one expression.
    ///
    /// # Errors
    /// - Any error from the grammar rules.
    /// - `UnexpectedTrailingToken` (or `InvalidCharacter`/`NumberTooLarge`) if input remains
    ///   after a complete expression, as in `2 + 3)`.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;

        if !self.current.is_end() {
            return Err(self.unexpected(|found, position| {
                           ParseError::UnexpectedTrailingToken { found, position }
                       }));
        }

        debug!(nodes = self.nodes, depth = expr.depth(), "parsed expression");
        Ok(expr)
    }

    /// The current lookahead token.
    pub(in crate::interpreter::parser) const fn current(&self) -> Token {
        self.current
    }

    /// Consumes the lookahead and fetches the next token.
    ///
    /// Returns the consumed token and the byte offset it started at.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> (Token, usize) {
        let consumed = (self.current, self.span.start);
        self.current = self.lexer.next_token();
        self.span = self.lexer.span();
        consumed
    }

    /// Builds the error for an unwanted lookahead.
    ///
    /// An `Error` token becomes `NumberTooLarge` or `InvalidCharacter`,
    /// depending on why the lexer rejected it; any other token is handed to
    /// `make`.
    pub(in crate::interpreter::parser) fn unexpected(&self,
                                                     make: impl FnOnce(Token, usize) -> ParseError)
                                                     -> ParseError {
        let position = self.span.start;
        match (self.current, self.lexer.error()) {
            (Token::Error, Some(LexError::NumberTooLarge)) => {
                ParseError::NumberTooLarge { position }
            },
            (Token::Error, _) => ParseError::InvalidCharacter { lexeme: self.lexer.slice().to_string(),
                                                                position },
            (found, _) => make(found, position),
        }
    }

    /// Claims one slot of the node budget before a node is constructed.
    pub(in crate::interpreter::parser) fn reserve_node(&mut self) -> ParseResult<()> {
        if self.nodes >= self.limits.max_nodes {
            return Err(ParseError::OutOfMemory { limit: self.limits.max_nodes });
        }
        self.nodes += 1;
        Ok(())
    }

    /// Records entry into a parenthesized group opened at `position`.
    pub(in crate::interpreter::parser) fn enter_group(&mut self,
                                                      position: usize)
                                                      -> ParseResult<()> {
        if self.depth >= self.limits.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.limits.max_depth,
                                                    position });
        }
        self.depth += 1;
        Ok(())
    }

    pub(in crate::interpreter::parser) const fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parses `source` into an expression tree using default limits.
///
/// # Errors
/// Returns a `ParseError` if the input is not a single well-formed
/// expression.
///
/// # Example
/// ```
/// use reckon::{ast::Expr, error::ParseError, interpreter::token::Token};
///
/// let expr = reckon::parse("1 + 2").unwrap();
/// assert!(matches!(expr, Expr::BinaryOp { .. }));
///
/// let err = reckon::parse("(1 + 2").unwrap_err();
/// assert_eq!(err,
///            ParseError::ExpectedClosingParen { found:    Token::End,
///                                               position: 6, });
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    parse_with(source, ParserLimits::default())
}

/// Parses `source` into an expression tree enforcing `limits`.
///
/// # Errors
/// Returns a `ParseError` if the input is malformed or exceeds `limits`.
pub fn parse_with(source: &str, limits: ParserLimits) -> ParseResult<Expr> {
    Parser::with_limits(Lexer::new(source), limits).parse()
}
