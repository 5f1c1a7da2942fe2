use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the digit is outside `1..=9`.
pub fn validate_digit(digit: u8) -> Result<(), UtilsError> {
    debug!("Validating digit: {}", digit);

    if !(1..=9).contains(&digit) {
        warn!("Digit is out of range: {}", digit);
        return Err(UtilsError::InvalidDigit(digit));
    }

    Ok(())
}
