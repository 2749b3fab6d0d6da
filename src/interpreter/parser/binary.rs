use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::Token,
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles the left-associative operators `+` and `-`: each repetition
    /// folds the tree built so far into the left operand of a new node, so
    /// `8 - 3 - 2` becomes `(8 - 3) - 2`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        loop {
            if let Some(op) = token_to_binary_operator(&self.current())
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                let (_, position) = self.advance();
                let right = self.parse_term()?;
                self.reserve_node()?;
                left = Expr::binary(left, op, right, position);
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles the left-associative operators `*` and `/`, binding tighter
    /// than `+` and `-`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        loop {
            if let Some(op) = token_to_binary_operator(&self.current())
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                let (_, position) = self.advance();
                let right = self.parse_factor()?;
                self.reserve_node()?;
                left = Expr::binary(left, op, right, position);
                continue;
            }
            break;
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not `+`, `-`, `*` or `/`.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{parser::binary::token_to_binary_operator, token::Token},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Divide), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Multiply => Some(BinaryOperator::Mul),
        Token::Divide => Some(BinaryOperator::Div),
        _ => None,
    }
}
