use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates a binary arithmetic operation.
///
/// Addition, subtraction and multiplication follow IEEE-754 double arithmetic,
/// so results beyond the range of `f64` become infinite. Division is the one
/// exception: a divisor equal to zero (`0.0` or `-0.0`) is reported as an
/// error instead of yielding infinity or NaN.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Offset of the operator, for error reporting.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] if `op` is division and `right` is
/// zero.
///
/// # Example
/// ```
/// use arithmetic_engine::{
///     ast::BinaryOperator, error::EvalError, interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Mul, 1.5, 2.0, 1), Ok(3.0));
/// assert_eq!(eval_binary(BinaryOperator::Div, 1.0, 0.0, 1),
///            Err(EvalError::DivisionByZero { position: 1 }));
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero { position });
            }
            Ok(left / right)
        },
    }
}
