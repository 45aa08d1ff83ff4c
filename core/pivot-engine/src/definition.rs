//! FILENAME: core/pivot-engine/src/definition.rs
//! Pivot Definition - The serializable configuration.
//!
//! This module contains the types needed to DESCRIBE a year x genre pivot:
//! which genre columns to produce, how to aggregate the values that fall in
//! one cell, what to put in empty cells and how to order the year rows.

use serde::{Deserialize, Serialize};
use engine::{Filter, Record};

// ============================================================================
// AGGREGATION
// ============================================================================

/// Supported aggregation functions for the value field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AggregationType {
    #[default]
    Sum,
    Count,
    Average,
    Min,
    Max,
}

impl AggregationType {
    pub fn label(&self) -> &'static str {
        match self {
            AggregationType::Sum => "Sum",
            AggregationType::Count => "Count",
            AggregationType::Average => "Average",
            AggregationType::Min => "Min",
            AggregationType::Max => "Max",
        }
    }
}

/// Sort order for the year rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

// ============================================================================
// OBSERVATION
// ============================================================================

/// One long-form input row to the pivot: an index key (year), a column key
/// (genre) and the value to aggregate.
pub trait Observation {
    fn year(&self) -> i32;
    fn genre(&self) -> &str;
    fn value(&self) -> f64;
}

impl Observation for Record {
    fn year(&self) -> i32 {
        self.year
    }

    fn genre(&self) -> &str {
        &self.genre
    }

    fn value(&self) -> f64 {
        self.gross
    }
}

impl<T: Observation + ?Sized> Observation for &T {
    fn year(&self) -> i32 {
        (**self).year()
    }

    fn genre(&self) -> &str {
        (**self).genre()
    }

    fn value(&self) -> f64 {
        (**self).value()
    }
}

// ============================================================================
// PIVOT DEFINITION
// ============================================================================

/// Complete description of a year x genre pivot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotDefinition {
    /// Genre columns to produce, in output order. Duplicates are ignored.
    pub columns: Vec<String>,

    pub aggregation: AggregationType,

    /// Value written to (year, genre) cells that have no input rows.
    pub fill_value: f64,

    pub sort_order: SortOrder,
}

impl PivotDefinition {
    /// Sum of gross, zero-filled, newest year first.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PivotDefinition {
            columns: columns.into_iter().map(Into::into).collect(),
            aggregation: AggregationType::Sum,
            fill_value: 0.0,
            sort_order: SortOrder::Descending,
        }
    }

    /// Columns follow the filter's genre selection.
    pub fn from_filter(filter: &Filter) -> Self {
        PivotDefinition::new(filter.distinct_genres())
    }

    pub fn with_aggregation(mut self, aggregation: AggregationType) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_fill_value(mut self, fill_value: f64) -> Self {
        self.fill_value = fill_value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::YearRange;

    #[test]
    fn test_default_definition() {
        let def = PivotDefinition::new(["Drama"]);
        assert_eq!(def.aggregation, AggregationType::Sum);
        assert_eq!(def.sort_order, SortOrder::Descending);
        assert_eq!(def.fill_value, 0.0);
    }

    #[test]
    fn test_from_filter_drops_duplicate_genres() {
        let filter = Filter::new(["Drama", "Comedy", "Drama"], YearRange::new(2000, 2016));
        let def = PivotDefinition::from_filter(&filter);
        assert_eq!(def.columns, vec!["Drama", "Comedy"]);
    }

    #[test]
    fn test_record_is_an_observation() {
        let record = Record::new(2010, "Drama", 12.5);
        let by_ref = &record;
        assert_eq!(by_ref.year(), 2010);
        assert_eq!(by_ref.genre(), "Drama");
        assert_eq!(by_ref.value(), 12.5);
    }
}
