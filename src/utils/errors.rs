use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Digit must be between 1 and 9: {0}")]
    InvalidDigit(u8),
    #[error("Repdigit of {digit} repeated {repeats} times does not fit in 64 bits")]
    RepdigitOverflow { digit: u8, repeats: u32 },
}
