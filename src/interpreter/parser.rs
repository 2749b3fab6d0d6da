/// Parser state, limits and entry points.
///
/// Declares the [`core::Parser`] struct that owns the lexer and the single
/// token of lookahead, the node and nesting limits it enforces, and the
/// top-level `parse` functions.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative tiers of the grammar: additive
/// (`+`, `-`) and multiplicative (`*`, `/`).
pub mod binary;

/// Factor parsing.
///
/// Handles the highest-precedence tier: numeric literals and parenthesized
/// sub-expressions.
pub mod factor;
