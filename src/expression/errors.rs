use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division does not produce a whole number: {0} / {1}")]
    InexactDivision(u64, u64),
    #[error("Subtraction produces a negative result: {0} - {1}")]
    NegativeResult(u64, u64),
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Literal does not fit in 64 bits: {0}")]
    LiteralTooLarge(String),
}
