//! Utils module split into submodules

mod digits;
mod errors;
mod validation;

pub use digits::{SEED_REPEATS, repdigit, repdigit_seeds};
pub use errors::UtilsError;
pub use validation::validate_digit;

#[cfg(test)]
mod tests;
