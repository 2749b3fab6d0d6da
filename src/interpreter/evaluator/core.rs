use tracing::debug;

use crate::{ast::Expr, error::RuntimeError, interpreter::evaluator::binary::eval_binary};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns its value.
///
/// This is the main entry point for evaluation. It walks the tree post-order
/// and only borrows it, so the same tree can be evaluated any number of
/// times with the same result.
///
/// # Errors
/// - `DivisionByZero` if a divisor evaluates to `0.0`.
/// - `Overflow` if an operation produces a non-finite value.
/// - `InvalidNode` if a literal is not finite.
///
/// # Example
/// ```
/// use reckon::{error::RuntimeError, evaluate, parse};
///
/// let expr = parse("(2 + 3) * 4").unwrap();
/// assert_eq!(evaluate(&expr), Ok(20.0));
///
/// let expr = parse("5 / 0").unwrap();
/// assert_eq!(evaluate(&expr), Err(RuntimeError::DivisionByZero { position: 2 }));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    let value = eval_node(expr)?;
    debug!(value, "evaluated expression");
    Ok(value)
}

/// Evaluates a single node, recursing into its operands.
///
/// The left operand is evaluated first; if it fails, the right one is never
/// touched.
fn eval_node(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number { value, position } => {
            if value.is_finite() {
                Ok(*value)
            } else {
                Err(RuntimeError::InvalidNode { position: *position })
            }
        },
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let left = eval_node(left)?;
            let right = eval_node(right)?;
            eval_binary(*op, left, right, *position)
        },
    }
}
