use std::fmt;

use crate::expression::ast::Expression;

/// Renders the canonical fully parenthesized form, e.g. `((5^5)-(5555/5))`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Binary(op, l, r) => write!(f, "({}{}{})", l, op.symbol(), r),
        }
    }
}
