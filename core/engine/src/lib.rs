//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the dataset engine.
//! CONTEXT: Re-exports the record model, the immutable dataset and the
//! filter used by every other crate in the workspace.

pub mod dataset;
pub mod filter;
pub mod number_format;
pub mod record;

// Re-export commonly used types at the crate root
pub use dataset::Dataset;
pub use filter::{Filter, YearRange};
pub use number_format::{format_compact, format_currency, format_gross, format_year};
pub use record::Record;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_test_filter_workflow() {
        let dataset = Dataset::new(vec![
            Record::new(2010, "Drama", 100.0),
            Record::new(2010, "Drama", 50.0),
            Record::new(2011, "Comedy", 30.0),
        ]);
        let filter = Filter::new(["Drama", "Comedy"], YearRange::new(2010, 2011));

        let total: f64 = filter.apply(&dataset).iter().map(|r| r.gross).sum();
        assert_eq!(total, 180.0);
    }
}
