//! Repdigit - find short arithmetic expressions written with a single digit
//!
//! For a digit `d` the search starts from the literals `d`, `dd`, ... up to six
//! repetitions and repeatedly combines known expressions with `+ - * / ^`,
//! keeping the shortest expression found for every value. The catalogs can
//! then be queried for target values, e.g. `2014 = ((5^5)-(5555/5))`.

pub mod builder;
pub mod catalog;
pub mod config;
pub mod expression;
pub mod utils;

use log::info;
use rayon::prelude::*;

// Re-export the main public API
pub use builder::{BuilderError, ExpressionCatalogBuilder, RoundStats};
pub use catalog::{Admission, Catalog};
pub use config::SearchConfig;
pub use expression::{Expression, ExpressionError, Operator};
pub use utils::{UtilsError, validate_digit};

/// Shortest known expression for one target value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub value: u64,
    pub expression: Option<String>,
}

/// Results of searching with one digit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitReport {
    pub digit: u8,
    /// Number of values reachable with this digit after the search
    pub catalog_size: usize,
    pub solutions: Vec<Solution>,
}

/// Build a catalog for every digit and look up every value in it.
///
/// Digits are searched in parallel; reports come back in the order of
/// `digits`, and solutions in the order of `values`.
///
/// # Errors
///
/// Returns an error if any digit is outside `1..=9`.
///
/// # Examples
///
/// ```
/// use repdigit::{SearchConfig, find_expressions};
///
/// let config = SearchConfig::default().with_iterations(1);
/// let reports = find_expressions(&[5], &[10], &config).unwrap_or_default();
/// if let Some(report) = reports.first() {
///     println!("{:?}", report.solutions);
/// }
/// ```
pub fn find_expressions(
    digits: &[u8],
    values: &[u64],
    config: &SearchConfig,
) -> Result<Vec<DigitReport>, BuilderError> {
    digits
        .par_iter()
        .map(|&digit| -> Result<DigitReport, BuilderError> {
            let mut builder = ExpressionCatalogBuilder::new(digit, *config)?;
            builder.run(config.iterations);

            let solutions: Vec<Solution> = values
                .iter()
                .map(|&value| Solution {
                    value,
                    expression: builder.lookup(value).map(str::to_string),
                })
                .collect();

            info!(
                "digit {} resolved {} of {} values from {} expressions",
                digit,
                solutions.iter().filter(|s| s.expression.is_some()).count(),
                values.len(),
                builder.full().len()
            );

            Ok(DigitReport {
                digit,
                catalog_size: builder.full().len(),
                solutions,
            })
        })
        .collect()
}

/// Parse and evaluate an expression text with exact integer arithmetic
///
/// # Errors
///
/// Returns an error if the text is malformed or cannot be evaluated exactly.
pub fn evaluate_text(text: &str) -> Result<u64, ExpressionError> {
    Expression::parse(text)?.evaluate()
}
