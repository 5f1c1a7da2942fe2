//! Operator admissibility predicates.
//!
//! Each predicate prunes part of the search space on purpose; values that are
//! only reachable through a pruned application are never found.

use crate::expression::{Operator, apply};

/// Multiplication needs at least one operand below this bound.
pub const MUL_OPERAND_LIMIT: u64 = 1000;

/// Exponents must stay below this bound.
pub const POW_EXPONENT_LIMIT: u64 = 20;

pub fn allows_add(_left: u64, _right: u64) -> bool {
    true
}

pub fn allows_mul(left: u64, right: u64) -> bool {
    left < MUL_OPERAND_LIMIT || right < MUL_OPERAND_LIMIT
}

/// Only strictly positive differences; `x - x` is never generated.
pub fn allows_sub(left: u64, right: u64) -> bool {
    left > right
}

/// Only whole quotients of a larger value by a smaller one.
pub fn allows_div(left: u64, right: u64) -> bool {
    right > 0 && left > right && left % right == 0
}

/// Small exponents, and at most one `^` in the combined expression.
pub fn allows_pow(right: u64, left_text: &str, right_text: &str) -> bool {
    right < POW_EXPONENT_LIMIT && !left_text.contains('^') && !right_text.contains('^')
}

/// Calls `emit` with every admissible combination of the two operands, in the
/// order add, mul, sub, div, pow. Applications that overflow are dropped.
pub fn for_each_candidate(
    (left, left_text): (u64, &str),
    (right, right_text): (u64, &str),
    mut emit: impl FnMut(u64, String),
) {
    let allowed = [
        (Operator::Add, allows_add(left, right)),
        (Operator::Mul, allows_mul(left, right)),
        (Operator::Sub, allows_sub(left, right)),
        (Operator::Div, allows_div(left, right)),
        (Operator::Pow, allows_pow(right, left_text, right_text)),
    ];

    for (op, allowed) in allowed {
        if !allowed {
            continue;
        }
        if let Ok(value) = apply(op, left, right) {
            emit(value, format!("({}{}{})", left_text, op.symbol(), right_text));
        }
    }
}
