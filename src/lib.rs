//! # reckon
//!
//! reckon is an arithmetic expression interpreter written in Rust.
//! It lexes, parses and evaluates a single expression made of numbers, the
//! operators `+ - * /` and parentheses, and reports either the numeric result
//! or an error naming the stage that failed.
//!
//! ```
//! assert_eq!(reckon::get_result("8 - 3 - 2"), Ok(3.0));
//! assert_eq!(reckon::get_result("2 + 3 * 4"), Ok(14.0));
//!
//! let err = reckon::get_result("5 / 0").unwrap_err();
//! assert_eq!(err.to_string(), "Evaluation error: Division by zero at position 2.");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` tree and the `BinaryOperator` tags. The
/// tree is built by the parser and read by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines `ParseError` for lexical, syntax and resource failures.
/// - Defines `RuntimeError` for evaluation failures.
/// - Wraps both in `Error`, whose message names the failing stage.
pub mod error;
/// Orchestrates the pipeline: tokens, lexer, parser and evaluator.
pub mod interpreter;
/// General utilities, currently result formatting.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{
        evaluator::core::evaluate,
        parser::core::{ParserLimits, parse, parse_with},
    },
    util::format::{DEFAULT_PRECISION, format_general},
};

/// Settings for a full lex → parse → evaluate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Limits enforced by the parser.
    pub limits:    ParserLimits,
    /// Significant digits used when formatting the result.
    pub precision: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { limits:    ParserLimits::default(),
               precision: DEFAULT_PRECISION, }
    }
}

/// Parses and evaluates `source` with default options.
///
/// Each call builds its own lexer, parser and tree; nothing is carried over
/// between calls.
///
/// # Errors
/// Returns `Error::Parse` if the input is malformed and `Error::Runtime` if
/// evaluation fails.
///
/// # Examples
/// ```
/// use reckon::get_result;
///
/// assert_eq!(get_result("(2 + 3) * 4"), Ok(20.0));
///
/// // Trailing input is rejected.
/// let err = get_result("2 + 3)").unwrap_err();
/// assert!(err.to_string().starts_with("Parse error: Unexpected token after expression"));
/// ```
pub fn get_result(source: &str) -> Result<f64, Error> {
    get_result_with(source, &Options::default())
}

/// Parses and evaluates `source` under `options`.
///
/// # Errors
/// Returns `Error::Parse` if the input is malformed or exceeds the parser
/// limits, and `Error::Runtime` if evaluation fails.
pub fn get_result_with(source: &str, options: &Options) -> Result<f64, Error> {
    let expr = parse_with(source, options.limits)?;
    debug!(%expr, "evaluating");
    Ok(evaluate(&expr)?)
}

/// Parses, evaluates and formats `source` as C's `%g` would print it.
///
/// # Errors
/// Same as [`get_result_with`].
///
/// # Example
/// ```
/// use reckon::{Options, format_result};
///
/// assert_eq!(format_result("1 / 3", &Options::default()).unwrap(), "0.333333");
/// assert_eq!(format_result("1000 * 1000", &Options::default()).unwrap(), "1e+06");
/// ```
pub fn format_result(source: &str, options: &Options) -> Result<String, Error> {
    let value = get_result_with(source, options)?;
    Ok(format_general(value, options.precision))
}
