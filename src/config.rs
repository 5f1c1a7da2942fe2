//! Search configuration shared by the builder, the driver and the CLI

pub const DEFAULT_MAX_VALUE: u64 = 100_000;
pub const DEFAULT_MAX_SMALL_EXPRESSION_LENGTH: usize = 16;
pub const DEFAULT_MAX_EXPRESSION_LENGTH: usize = 40;
pub const DEFAULT_ITERATIONS: usize = 6;

/// Bounds that keep the combinatorial search tractable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Largest value admitted into either catalog
    pub max_value: u64,
    /// Longest expression admitted into the `small` catalog
    pub max_small_expression_length: usize,
    /// Longest expression admitted into any catalog
    pub max_expression_length: usize,
    /// Number of expansion rounds to run
    pub iterations: usize,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            max_value: DEFAULT_MAX_VALUE,
            max_small_expression_length: DEFAULT_MAX_SMALL_EXPRESSION_LENGTH,
            max_expression_length: DEFAULT_MAX_EXPRESSION_LENGTH,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    pub fn with_iterations(self, iterations: usize) -> Self {
        Self { iterations, ..self }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
