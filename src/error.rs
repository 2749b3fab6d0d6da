/// Parsing errors.
///
/// Defines the errors that abort a parse: unexpected tokens, missing closing
/// parentheses, trailing input, invalid characters, and exhaustion of the
/// parser's node budget or nesting limit.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a tree: division by zero,
/// numeric overflow, and structurally invalid nodes.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced by the lex → parse → evaluate pipeline.
///
/// The variant records which stage failed; the message is prefixed
/// accordingly so that callers reading only the text can tell them apart.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input could not be turned into a tree.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// The tree could not be evaluated.
    #[error("Evaluation error: {0}")]
    Runtime(#[from] RuntimeError),
}
