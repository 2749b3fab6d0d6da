/// Number formatting.
///
/// Renders evaluation results in the general floating-point notation of C's
/// `%g`: `2` rather than `2.000000`, `1e+06` rather than `1000000`.
pub mod format;
