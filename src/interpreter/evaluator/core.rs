use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{EvalError, InternalError},
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// A unit of pending work in the tree walk.
enum Step<'e> {
    /// Evaluate a node, leaving its value on the value stack.
    Visit(&'e Expr),
    /// Replace the top value with the operator applied to it.
    Unary(UnaryOperator),
    /// Replace the two top values with the operator applied to them.
    Binary(BinaryOperator, usize),
}

/// Evaluates an expression tree and returns its value.
///
/// The walk is post-order: both operands of a binary operator are evaluated,
/// left first, before the operator is applied. It keeps its own work stack
/// instead of recursing, so the depth of the tree is not limited by the call
/// stack.
///
/// # Parameters
/// - `expr`: Root of the tree to evaluate.
///
/// # Returns
/// The value of the expression under IEEE-754 double arithmetic.
///
/// # Errors
/// - [`EvalError::DivisionByZero`] if a divisor evaluates to zero. The first
///   such division in evaluation order is reported.
/// - [`EvalError::Internal`] if the walk breaks its own stack discipline.
///
/// # Example
/// ```
/// use arithmetic_engine::{interpreter::evaluator::core::eval, parse};
///
/// let ast = parse("(2 + 3) * 4").unwrap();
/// assert_eq!(eval(&ast), Ok(20.0));
/// ```
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    let mut work = vec![Step::Visit(expr)];
    let mut values: Vec<f64> = Vec::new();

    while let Some(step) = work.pop() {
        match step {
            Step::Visit(Expr::Literal { value, .. }) => values.push(*value),
            Step::Visit(Expr::UnaryOp { op, operand, .. }) => {
                work.push(Step::Unary(*op));
                work.push(Step::Visit(operand));
            },
            Step::Visit(Expr::BinaryOp { left,
                                         op,
                                         right,
                                         position, }) => {
                work.push(Step::Binary(*op, *position));
                work.push(Step::Visit(right));
                work.push(Step::Visit(left));
            },
            Step::Unary(op) => {
                let operand = pop_operand(&mut values, op.symbol())?;
                values.push(eval_unary(op, operand));
            },
            Step::Binary(op, position) => {
                let right = pop_operand(&mut values, op.symbol())?;
                let left = pop_operand(&mut values, op.symbol())?;
                values.push(eval_binary(op, left, right, position)?);
            },
        }
    }

    match values.as_slice() {
        [value] => Ok(*value),
        _ => Err(InternalError::UnbalancedStack { count: values.len() }.into()),
    }
}

/// Pops the topmost operand for `operator`.
fn pop_operand(values: &mut Vec<f64>, operator: &'static str) -> EvalResult<f64> {
    values.pop()
          .ok_or(EvalError::Internal(InternalError::MissingOperand { operator }))
}
