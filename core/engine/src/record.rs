//! FILENAME: core/engine/src/record.rs
//! PURPOSE: Defines a single row of the genre revenue dataset.
//! CONTEXT: Records are created once by the loader and never mutated.
//! Several records may share the same (year, genre) pair before aggregation.

use serde::{Deserialize, Serialize};

/// One row of the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    pub genre: String,
    /// Box office gross in dollars.
    pub gross: f64,
}

impl Record {
    pub fn new(year: i32, genre: impl Into<String>, gross: f64) -> Self {
        Record {
            year,
            genre: genre.into(),
            gross,
        }
    }
}
