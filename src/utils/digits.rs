use log::debug;

use crate::utils::errors::UtilsError;

/// Number of seed literals per digit: `d`, `dd`, ... up to six repetitions.
pub const SEED_REPEATS: u32 = 6;

/// Value of `digit` written `repeats` times, e.g. `repdigit(5, 3) == 555`.
///
/// # Errors
///
/// Returns an error if the result does not fit in a `u64`.
pub fn repdigit(digit: u8, repeats: u32) -> Result<u64, UtilsError> {
    let overflow = || UtilsError::RepdigitOverflow { digit, repeats };

    let mut value: u64 = 0;
    for _ in 0..repeats {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(overflow)?;
    }
    debug!("repdigit({}, {}) = {}", digit, repeats, value);
    Ok(value)
}

/// The seed alphabet for `digit`: each repdigit with 1 to [`SEED_REPEATS`]
/// repetitions, paired with its decimal literal.
///
/// # Errors
///
/// Returns an error if a seed does not fit in a `u64`.
pub fn repdigit_seeds(digit: u8) -> Result<Vec<(u64, String)>, UtilsError> {
    (1..=SEED_REPEATS)
        .map(|repeats| repdigit(digit, repeats).map(|value| (value, value.to_string())))
        .collect()
}
