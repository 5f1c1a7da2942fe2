use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuilderError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] UtilsError),
}
