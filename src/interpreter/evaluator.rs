/// Core evaluation logic: the tree walk and its result type.
pub mod core;

/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to evaluated operands, checking for
/// division by zero and non-finite results.
pub mod binary;
