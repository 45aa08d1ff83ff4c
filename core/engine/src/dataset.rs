//! FILENAME: core/engine/src/dataset.rs
//! PURPOSE: The immutable in-memory table produced by the loader.
//! CONTEXT: A Dataset is built once and then shared read-only (behind an Arc)
//! by every request. Distinct genres and the year span are computed at build
//! time so the widgets never rescan the rows.

use serde::Serialize;
use std::collections::HashSet;

use crate::record::Record;

/// Read-only table of records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dataset {
    records: Vec<Record>,
    /// Distinct genres in first-appearance order.
    genres: Vec<String>,
    year_span: Option<(i32, i32)>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut genres = Vec::new();
        let mut year_span: Option<(i32, i32)> = None;

        for record in &records {
            if seen.insert(record.genre.as_str()) {
                genres.push(record.genre.clone());
            }
            year_span = Some(match year_span {
                None => (record.year, record.year),
                Some((lo, hi)) => (lo.min(record.year), hi.max(record.year)),
            });
        }

        Dataset {
            records,
            genres,
            year_span,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct genre values, in the order they first appear in the file.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Smallest and largest year present, or None for an empty table.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        self.year_span
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Dataset::new(records)
    }
}
