/// The evaluator module computes the value of a parsed tree.
///
/// The evaluator walks the AST post-order, applies the arithmetic operators
/// and reports runtime errors such as division by zero or overflow. It only
/// borrows the tree.
pub mod evaluator;
/// The lexer module tokenizes source code for the parser.
///
/// The lexer reads the raw expression text and hands out one token per
/// request, skipping whitespace. Characters outside the language become an
/// `Error` token instead of an error value.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Pulls tokens from the lexer with a single token of lookahead.
/// - Encodes operator precedence structurally, one function per tier.
/// - Reports syntax errors with the offending token and its position.
pub mod parser;
/// The token module defines the closed set of lexical categories shared by
/// the lexer and the parser.
pub mod token;
