use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use repdigit::config::{
    DEFAULT_ITERATIONS, DEFAULT_MAX_EXPRESSION_LENGTH, DEFAULT_MAX_SMALL_EXPRESSION_LENGTH,
    DEFAULT_MAX_VALUE,
};
use repdigit::{DigitReport, Expression, SearchConfig, find_expressions};

/// Verbosity of the search log; `info` shows one line per expansion round
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Repdigit - Find arithmetic expressions written with a single digit
#[derive(Parser, Debug)]
#[command(name = "repdigit")]
#[command(
    about = "Find short expressions using one repeated digit and + - * / ^ that evaluate to target values"
)]
#[command(version)]
pub struct CliArgs {
    /// Largest value kept in the expression catalogs
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
    pub max_value: u64,

    /// Longest expression kept in the small catalog
    #[arg(long, default_value_t = DEFAULT_MAX_SMALL_EXPRESSION_LENGTH)]
    pub max_small_expression_length: usize,

    /// Longest expression kept in any catalog
    #[arg(long, default_value_t = DEFAULT_MAX_EXPRESSION_LENGTH)]
    pub max_expression_length: usize,

    /// Number of expansion rounds
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Digits to build expressions with
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = clap::value_parser!(u8).range(1..=9),
        default_values_t = [1u8, 2, 3, 4, 5, 6, 7, 8, 9]
    )]
    pub digits: Vec<u8>,

    /// Target values to look up
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [2010u64, 2011, 2012, 2013, 2014, 2015, 2016, 2017, 2018, 2019]
    )]
    pub values: Vec<u64>,

    /// Re-evaluate every expression found and report mismatches
    #[arg(long)]
    pub verify: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub search: SearchConfig,
    pub digits: Vec<u8>,
    pub values: Vec<u64>,
    pub verify: bool,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            search: SearchConfig {
                max_value: args.max_value,
                max_small_expression_length: args.max_small_expression_length,
                max_expression_length: args.max_expression_length,
                iterations: args.iterations,
            },
            digits: args.digits,
            values: args.values,
            verify: args.verify,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.into())
        .try_init()
        .context("Failed to initialize logging")
}

/// Check that every expression in the report evaluates to its value.
/// Returns the number of mismatches.
fn verify_report(report: &DigitReport) -> usize {
    let mut mismatches = 0;
    for solution in &report.solutions {
        let Some(text) = solution.expression.as_deref() else {
            continue;
        };
        match Expression::parse(text).and_then(|expr| expr.evaluate().map(|value| (expr, value))) {
            Ok((expr, value)) if value == solution.value && expr.uses_only_digit(report.digit) => {
                debug!(
                    "digit {}: {} = {} with {} digits",
                    report.digit,
                    value,
                    text,
                    expr.digit_count()
                );
            }
            Ok((_, value)) if value == solution.value => {
                warn!(
                    "digit {}: '{}' uses other digits than {}",
                    report.digit, text, report.digit
                );
                mismatches += 1;
            }
            Ok((_, value)) => {
                warn!(
                    "digit {}: '{}' evaluates to {}, expected {}",
                    report.digit, text, value, solution.value
                );
                mismatches += 1;
            }
            Err(e) => {
                warn!("digit {}: cannot evaluate '{}': {}", report.digit, text, e);
                mismatches += 1;
            }
        }
    }
    mismatches
}

/// Render one digit's results, one `value expression` line per target
fn format_report(report: &DigitReport) -> String {
    let mut out = format!("digit {}\n", report.digit);
    for solution in &report.solutions {
        match &solution.expression {
            Some(text) => out.push_str(&format!("{} {}\n", solution.value, text)),
            None => out.push_str(&format!("{} Unknown.\n", solution.value)),
        }
    }
    out
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    // Initialize logging
    init_logging(config.log_level)?;

    info!(
        "Searching digits {:?} for values {:?} with {:?}",
        config.digits, config.values, config.search
    );

    let reports = find_expressions(&config.digits, &config.values, &config.search)
        .context("Expression search failed")?;

    let mut mismatches = 0;
    for report in &reports {
        if config.verify {
            mismatches += verify_report(report);
        }
        print!("{}", format_report(report));
    }

    if mismatches > 0 {
        anyhow::bail!("{} expressions failed verification", mismatches);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use repdigit::Solution;

    fn report() -> DigitReport {
        DigitReport {
            digit: 5,
            catalog_size: 7,
            solutions: vec![
                Solution {
                    value: 2014,
                    expression: Some("((5^5)-(5555/5))".to_string()),
                },
                Solution {
                    value: 2015,
                    expression: None,
                },
            ],
        }
    }

    #[test]
    fn test_cli_args_defaults() {
        let result = CliArgs::try_parse_from(["repdigit"]);
        assert!(result.is_ok());
        if let Ok(args) = result {
            let config = CliConfig::from(args);
            assert_eq!(config.search, SearchConfig::default());
            assert_eq!(config.digits, (1..=9).collect::<Vec<u8>>());
            assert_eq!(config.values, (2010..=2019).collect::<Vec<u64>>());
            assert!(!config.verify);
            assert!(matches!(config.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_args_lists() {
        let result = CliArgs::try_parse_from([
            "repdigit",
            "--digits",
            "5,7",
            "--values",
            "1,2014",
            "--iterations",
            "2",
            "--verify",
        ]);
        assert!(result.is_ok());
        if let Ok(args) = result {
            assert_eq!(args.digits, vec![5, 7]);
            assert_eq!(args.values, vec![1, 2014]);
            assert_eq!(args.iterations, 2);
            assert!(args.verify);
        }
    }

    #[test]
    fn test_cli_args_rejects_digit_out_of_range() {
        assert!(CliArgs::try_parse_from(["repdigit", "--digits", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["repdigit", "--digits", "3,10"]).is_err());
    }

    #[test]
    fn test_format_report() {
        assert_eq!(
            format_report(&report()),
            "digit 5\n2014 ((5^5)-(5555/5))\n2015 Unknown.\n"
        );
    }

    #[test]
    fn test_verify_report() {
        assert_eq!(verify_report(&report()), 0);

        let mut bad = report();
        bad.solutions = vec![Solution {
            value: 2015,
            expression: Some("((5^5)-(5555/5))".to_string()),
        }];
        assert_eq!(verify_report(&bad), 1);

        bad.solutions = vec![Solution {
            value: 2014,
            expression: Some("((5^5)-(5555/5))".to_string()),
        }];
        bad.digit = 3;
        assert_eq!(verify_report(&bad), 1);
    }

    #[test]
    fn test_log_level_from_flag() {
        let cases = [
            ("off", log::LevelFilter::Off),
            ("warn", log::LevelFilter::Warn),
            ("info", log::LevelFilter::Info),
            ("trace", log::LevelFilter::Trace),
        ];
        for (flag, expected) in cases {
            let result = CliArgs::try_parse_from(["repdigit", "--log-level", flag]);
            assert!(result.is_ok(), "{} rejected", flag);
            if let Ok(args) = result {
                assert_eq!(log::LevelFilter::from(args.log_level), expected);
            }
        }
        assert!(CliArgs::try_parse_from(["repdigit", "-l", "verbose"]).is_err());
    }
}
