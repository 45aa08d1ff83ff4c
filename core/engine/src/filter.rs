//! FILENAME: core/engine/src/filter.rs
//! PURPOSE: Row filtering by genre selection and inclusive year interval.
//! CONTEXT: Both widgets on the dashboard feed a Filter. Filtering never fails:
//! an empty genre selection or a year range outside the data simply produces
//! an empty subset.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::dataset::Dataset;
use crate::record::Record;

// ============================================================================
// YEAR RANGE
// ============================================================================

/// Inclusive year interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub low: i32,
    pub high: i32,
}

impl YearRange {
    pub fn new(low: i32, high: i32) -> Self {
        YearRange { low, high }
    }

    /// True when `low <= year <= high`. An inverted range contains nothing.
    pub fn contains(&self, year: i32) -> bool {
        self.low <= year && year <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }

    /// Clamps both ends into `bounds` and orders them, the way a two-handle
    /// slider would.
    pub fn clamp_to(&self, bounds: YearRange) -> YearRange {
        let (min, max) = if bounds.is_inverted() {
            (bounds.high, bounds.low)
        } else {
            (bounds.low, bounds.high)
        };
        let a = self.low.clamp(min, max);
        let b = self.high.clamp(min, max);
        YearRange::new(a.min(b), a.max(b))
    }
}

impl From<(i32, i32)> for YearRange {
    fn from((low, high): (i32, i32)) -> Self {
        YearRange::new(low, high)
    }
}

// ============================================================================
// FILTER
// ============================================================================

/// The user's current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Selected genres, in selection order.
    pub genres: Vec<String>,
    pub years: YearRange,
}

impl Filter {
    pub fn new<I, S>(genres: I, years: YearRange) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter {
            genres: genres.into_iter().map(Into::into).collect(),
            years,
        }
    }

    /// Selected genres with duplicates removed, first occurrence wins.
    pub fn distinct_genres(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.genres
            .iter()
            .filter(|g| seen.insert(g.as_str()))
            .cloned()
            .collect()
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.years.contains(record.year) && self.genres.iter().any(|g| *g == record.genre)
    }

    /// Returns the records matching both predicates, in source order.
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> Vec<&'a Record> {
        if self.genres.is_empty() || self.years.is_inverted() {
            return Vec::new();
        }

        let selected: HashSet<&str> = self.genres.iter().map(String::as_str).collect();
        dataset
            .records()
            .iter()
            .filter(|r| self.years.contains(r.year) && selected.contains(r.genre.as_str()))
            .collect()
    }
}
