pub mod operators;
mod core;
mod errors;
mod stats;

pub use self::core::ExpressionCatalogBuilder;
pub use errors::BuilderError;
pub use stats::RoundStats;
