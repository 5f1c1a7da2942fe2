use std::collections::HashMap;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::builder::errors::BuilderError;
use crate::builder::operators::for_each_candidate;
use crate::builder::stats::RoundStats;
use crate::catalog::{Admission, Catalog};
use crate::config::SearchConfig;
use crate::utils::validate_digit;

/// Grows the catalogs of expressions written with a single digit.
///
/// Each round crosses the bounded `small` catalog with the unbounded `full`
/// one, so the work per round stays linear in the size of `full`.
#[derive(Debug, Clone)]
pub struct ExpressionCatalogBuilder {
    digit: u8,
    config: SearchConfig,
    small: Catalog,
    full: Catalog,
    rounds: usize,
}

impl ExpressionCatalogBuilder {
    /// Create a builder whose catalogs hold the repdigit seeds of `digit`
    ///
    /// # Errors
    ///
    /// Returns an error if `digit` is outside `1..=9`.
    pub fn new(digit: u8, config: SearchConfig) -> Result<Self, BuilderError> {
        validate_digit(digit)?;

        if config.max_small_expression_length > config.max_expression_length {
            warn!(
                "Small expression length {} exceeds the global limit {}",
                config.max_small_expression_length, config.max_expression_length
            );
        }

        Ok(Self {
            digit,
            config,
            small: Catalog::seeded(digit, config.max_small_expression_length)?,
            full: Catalog::seeded(digit, config.max_expression_length)?,
            rounds: 0,
        })
    }

    pub fn digit(&self) -> u8 {
        self.digit
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn small(&self) -> &Catalog {
        &self.small
    }

    pub fn full(&self) -> &Catalog {
        &self.full
    }

    pub fn rounds_completed(&self) -> usize {
        self.rounds
    }

    /// Shortest known expression for `value`
    pub fn lookup(&self, value: u64) -> Option<&str> {
        self.full.get(value)
    }

    /// Offer a candidate to both catalogs.
    ///
    /// Values above `max_value` and texts longer than `max_expression_length`
    /// are rejected; otherwise each catalog applies its own length ceiling and
    /// keeps the shorter text. Returns how `full` handled the candidate, or
    /// `None` when it was rejected outright.
    pub fn admit_candidate(&mut self, value: u64, text: &str) -> Option<Admission> {
        if value > self.config.max_value || text.len() > self.config.max_expression_length {
            return None;
        }

        self.small.admit(value, text);
        Some(self.full.admit(value, text))
    }

    /// Run one expansion round and merge its candidates.
    pub fn expand_one_round(&mut self) -> RoundStats {
        let full_size_before = self.full.len();
        let bag = self.collect_candidates();
        let generated = bag.len();

        let mut improved = 0;
        for (value, text) in &bag {
            if let Some(Admission::Improved) = self.admit_candidate(*value, text) {
                improved += 1;
            }
        }

        let stats = RoundStats {
            round: self.rounds,
            small_size: self.small.len(),
            full_size_before,
            full_size: self.full.len(),
            generated,
            admitted: self.full.len() - full_size_before,
            improved,
        };
        self.rounds += 1;

        info!("digit {} {}", self.digit, stats);
        stats
    }

    /// Run exactly `iterations` rounds; there is no early exit once the
    /// catalogs stop growing.
    pub fn run(&mut self, iterations: usize) -> Vec<RoundStats> {
        (0..iterations).map(|_| self.expand_one_round()).collect()
    }

    /// Cross `small` with `full` into a bag of value -> text.
    ///
    /// When several combinations yield the same value the one produced last
    /// (in ascending `small`, ascending `full`, operator order) wins, with no
    /// length comparison. Workers fold contiguous chunks of `small` and the
    /// partial bags are reduced in order, which gives the same bag as a
    /// sequential pass.
    fn collect_candidates(&self) -> HashMap<u64, String> {
        let small: Vec<(u64, &str)> = self.small.iter().collect();
        let full: Vec<(u64, &str)> = self.full.iter().collect();
        let max_len = self.config.max_expression_length;

        debug!(
            "digit {} crossing {} small with {} full expressions",
            self.digit,
            small.len(),
            full.len()
        );

        small
            .par_iter()
            .fold(HashMap::new, |mut bag, &left| {
                for &right in &full {
                    if left.1.len() + right.1.len() > max_len {
                        continue;
                    }
                    for_each_candidate(left, right, |value, text| {
                        bag.insert(value, text);
                    });
                }
                bag
            })
            .reduce(HashMap::new, |mut earlier, later| {
                earlier.extend(later);
                earlier
            })
    }
}
