use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::Token,
    },
};

impl Parser<'_> {
    /// Parses a factor: a number or a parenthesized expression.
    ///
    /// The rule is: `factor := NUMBER | "(" expression ")"`
    ///
    /// # Errors
    /// - `ExpectedOperand` if the lookahead is neither a number nor `(`.
    /// - `ExpectedClosingParen` if a group is not closed.
    /// - `InvalidCharacter` or `NumberTooLarge` if either of the above meets an
    ///   `Error` token.
    /// - `NestingTooDeep` if the group exceeds the nesting limit.
    /// - `OutOfMemory` if the node budget is exhausted.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.current() {
            Token::Number(value) => {
                self.reserve_node()?;
                let (_, position) = self.advance();
                Ok(Expr::number(value, position))
            },

            Token::LParen => {
                let (_, open) = self.advance();
                self.enter_group(open)?;

                let inner = self.parse_expression()?;

                if self.current() != Token::RParen {
                    return Err(self.unexpected(|found, position| {
                                   ParseError::ExpectedClosingParen { found, position }
                               }));
                }

                self.advance();
                self.leave_group();
                Ok(inner)
            },

            _ => Err(self.unexpected(|found, position| {
                              ParseError::ExpectedOperand { found, position }
                          })),
        }
    }
}
