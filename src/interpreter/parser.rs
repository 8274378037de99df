/// Entry point of the parser and the checks shared by every level.
///
/// Starts parsing at the lowest-precedence level, rejects empty input and
/// trailing tokens, and bounds how deeply the recursive levels may nest.
pub mod core;

/// Binary operator levels.
///
/// Parses the left-associative additive and multiplicative levels of the
/// grammar.
pub mod binary;

/// Prefix operators and primary expressions.
///
/// Parses unary `+`/`-` chains, number literals and parenthesized groups.
pub mod unary;
