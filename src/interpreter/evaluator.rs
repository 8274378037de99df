/// The tree walk.
///
/// Visits the AST with an explicit stack and combines operand values in
/// post-order.
pub mod core;

/// Binary operator semantics.
///
/// Implements addition, subtraction, multiplication and division, including
/// the division-by-zero policy.
pub mod binary;

/// Unary operator semantics.
///
/// Implements prefix negation and identity.
pub mod unary;
