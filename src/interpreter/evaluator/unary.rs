use crate::ast::UnaryOperator;

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Neg`: numeric negation.
/// - `Pos`: identity.
///
/// Unary operations cannot fail.
///
/// # Example
/// ```
/// use arithmetic_engine::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Neg, 5.0), -5.0);
/// assert_eq!(eval_unary(UnaryOperator::Pos, -5.0), -5.0);
/// ```
#[must_use]
pub const fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Neg => -value,
        UnaryOperator::Pos => value,
    }
}
