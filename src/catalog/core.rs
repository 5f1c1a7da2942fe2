use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use log::debug;

use crate::utils::{UtilsError, repdigit_seeds};

/// Outcome of offering a candidate to a [`Catalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The value was not present and has been added.
    Inserted,
    /// The candidate is strictly shorter than the stored text and replaced it.
    Improved,
    /// The stored text is at most as long as the candidate; nothing changed.
    Dominated,
    /// The candidate exceeds this catalog's length ceiling.
    TooLong,
}

/// Mapping from achievable value to the shortest known expression text.
///
/// Entries are kept in ascending value order so that iterating a catalog,
/// and therefore a whole search, is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<u64, String>,
    max_length: usize,
}

impl Catalog {
    /// Create an empty catalog accepting texts up to `max_length` characters
    pub fn new(max_length: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            max_length,
        }
    }

    /// Create a catalog holding the repdigit seeds of `digit`.
    ///
    /// Seeds are the alphabet of the search and are inserted as-is, without
    /// going through [`Catalog::admit`].
    ///
    /// # Errors
    ///
    /// Returns an error if a seed does not fit in a `u64`.
    pub fn seeded(digit: u8, max_length: usize) -> Result<Self, UtilsError> {
        let mut catalog = Self::new(max_length);
        catalog.entries.extend(repdigit_seeds(digit)?);
        debug!(
            "Seeded catalog for digit {} with {} entries",
            digit,
            catalog.len()
        );
        Ok(catalog)
    }

    /// Offer `text` as an expression for `value`.
    ///
    /// Rejects texts longer than the catalog's ceiling. Otherwise inserts the
    /// value if absent, or replaces the stored text only when `text` is
    /// strictly shorter; equal lengths keep the incumbent.
    pub fn admit(&mut self, value: u64, text: &str) -> Admission {
        if text.len() > self.max_length {
            return Admission::TooLong;
        }

        match self.entries.entry(value) {
            Entry::Vacant(slot) => {
                slot.insert(text.to_string());
                Admission::Inserted
            }
            Entry::Occupied(mut slot) if text.len() < slot.get().len() => {
                debug!("Improved {}: '{}' -> '{}'", value, slot.get(), text);
                slot.insert(text.to_string());
                Admission::Improved
            }
            Entry::Occupied(_) => Admission::Dominated,
        }
    }

    pub fn get(&self, value: u64) -> Option<&str> {
        self.entries.get(&value).map(String::as_str)
    }

    pub fn contains(&self, value: u64) -> bool {
        self.entries.contains_key(&value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Entries in ascending value order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        self.entries.iter().map(|(v, e)| (*v, e.as_str()))
    }
}
