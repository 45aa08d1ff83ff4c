//! FILENAME: core/pivot-engine/src/matrix.rs
//! Pivot Matrix - The renderable output of a pivot calculation.
//!
//! A dense year x genre grid: every row carries exactly one value per
//! column, so the table and the chart can index it without lookups.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Per-row cell storage. Dashboards rarely select more than a handful of
/// genres, so the common case stays inline.
pub type RowValues = SmallVec<[f64; 8]>;

/// One year row of the matrix. `values[i]` belongs to `columns[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotRow {
    pub year: i32,
    pub values: RowValues,
}

/// Dense pivot output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PivotMatrix {
    columns: Vec<String>,
    rows: Vec<PivotRow>,
}

impl PivotMatrix {
    /// Builds a matrix. Every row must have one value per column.
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<PivotRow>) -> Self {
        debug_assert!(rows.iter().all(|r| r.values.len() == columns.len()));
        PivotMatrix { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[PivotRow] {
        &self.rows
    }

    /// Row years in matrix order.
    pub fn years(&self) -> Vec<i32> {
        self.rows.iter().map(|r| r.year).collect()
    }

    pub fn column_index(&self, genre: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == genre)
    }

    pub fn get(&self, year: i32, genre: &str) -> Option<f64> {
        let col = self.column_index(genre)?;
        self.rows
            .iter()
            .find(|r| r.year == year)
            .map(|r| r.values[col])
    }

    /// Sum of one genre column across all rows.
    pub fn column_total(&self, genre: &str) -> Option<f64> {
        let col = self.column_index(genre)?;
        Some(self.rows.iter().map(|r| r.values[col]).sum())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when there are no year rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
