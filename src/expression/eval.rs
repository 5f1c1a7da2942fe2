use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

/// Applies `op` with exact non-negative integer semantics.
///
/// # Errors
///
/// Fails on overflow, on a negative difference, on division by zero and on
/// division with a remainder.
pub(crate) fn apply(op: Operator, left: u64, right: u64) -> Result<u64, ExpressionError> {
    match op {
        Operator::Add => left.checked_add(right).ok_or(ExpressionError::Overflow),
        Operator::Sub => left
            .checked_sub(right)
            .ok_or(ExpressionError::NegativeResult(left, right)),
        Operator::Mul => left.checked_mul(right).ok_or(ExpressionError::Overflow),
        Operator::Div => {
            if right == 0 {
                Err(ExpressionError::DivisionByZero)
            } else if left % right != 0 {
                Err(ExpressionError::InexactDivision(left, right))
            } else {
                Ok(left / right)
            }
        }
        Operator::Pow => u32::try_from(right)
            .ok()
            .and_then(|exp| left.checked_pow(exp))
            .ok_or(ExpressionError::Overflow),
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when a subexpression:
    /// - overflows 64 bits
    /// - subtracts a larger value from a smaller one
    /// - divides by zero or leaves a remainder
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(*n),
            Expression::Binary(op, l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                let result = apply(*op, left, right);
                if let Err(e) = &result {
                    debug!(
                        "Evaluation of {} {} {} failed: {}",
                        left,
                        op.symbol(),
                        right,
                        e
                    );
                }
                result
            }
        }
    }
}
