use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies a binary arithmetic operator to two evaluated operands.
///
/// Division checks the divisor against exactly `0.0` before dividing, so a
/// zero divisor is an error rather than an infinity or NaN. Any other
/// non-finite result, such as `1e308 * 10` overflowing, is reported as
/// `Overflow`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Position of the operator, for error reporting.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator, error::RuntimeError,
///     interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Sub, 8.0, 3.0, 2), Ok(5.0));
/// assert_eq!(eval_binary(BinaryOperator::Div, 1.0, -0.0, 2),
///            Err(RuntimeError::DivisionByZero { position: 2 }));
/// assert_eq!(eval_binary(BinaryOperator::Mul, f64::MAX, 2.0, 7),
///            Err(RuntimeError::Overflow { op:       BinaryOperator::Mul,
///                                         position: 7, }));
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            left / right
        },
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(RuntimeError::Overflow { op, position })
    }
}
