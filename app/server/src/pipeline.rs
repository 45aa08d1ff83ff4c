//! FILENAME: app/server/src/pipeline.rs
// PURPOSE: The filter -> pivot -> melt pipeline behind every widget change.
// CONTEXT: Pure and synchronous; reruns in full on each request against the
//          shared read-only dataset.

use engine::{Dataset, Filter};
use pivot_engine::{calculate_pivot, melt, LongRow, PivotDefinition, PivotMatrix, SortOrder};

use crate::{log_debug, log_exit};

/// Everything the presenter needs for one render.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub filter: Filter,
    /// Year x genre sums, rows in the requested order
    pub matrix: PivotMatrix,
    /// Long-form cells of `matrix`, for the chart
    pub chart_rows: Vec<LongRow>,
}

/// Runs filter, pivot and melt for one selection.
pub fn run_pipeline(dataset: &Dataset, filter: Filter, sort_order: SortOrder) -> DashboardView {
    log_debug!(
        "PIPELINE",
        "run genres={:?} years={}..{}",
        filter.genres,
        filter.years.low,
        filter.years.high
    );

    let filtered = filter.apply(dataset);
    let definition = PivotDefinition::from_filter(&filter).with_sort_order(sort_order);
    let matrix = calculate_pivot(&definition, &filtered);
    let chart_rows = melt(&matrix);

    log_exit!(
        "PIPELINE",
        "run_pipeline",
        "filtered={} rows={} cols={} points={}",
        filtered.len(),
        matrix.row_count(),
        matrix.column_count(),
        chart_rows.len()
    );

    DashboardView {
        filter,
        matrix,
        chart_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{Record, YearRange};

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Record::new(2010, "Drama", 100.0),
            Record::new(2010, "Drama", 50.0),
            Record::new(2011, "Comedy", 30.0),
            Record::new(2012, "Comedy", 70.0),
        ])
    }

    #[test]
    fn test_reference_example() {
        let filter = Filter::new(["Drama", "Comedy"], YearRange::new(2010, 2011));
        let view = run_pipeline(&dataset(), filter, SortOrder::Descending);

        assert_eq!(view.matrix.years(), vec![2011, 2010]);
        assert_eq!(view.matrix.rows()[0].values.as_slice(), &[0.0, 30.0]);
        assert_eq!(view.matrix.rows()[1].values.as_slice(), &[150.0, 0.0]);
        assert_eq!(view.chart_rows.len(), 4);
    }

    #[test]
    fn test_chart_totals_match_filtered_totals() {
        let filter = Filter::new(["Drama", "Comedy"], YearRange::new(2000, 2016));
        let view = run_pipeline(&dataset(), filter, SortOrder::Descending);

        let comedy: f64 = view
            .chart_rows
            .iter()
            .filter(|r| r.genre == "Comedy")
            .map(|r| r.gross)
            .sum();
        assert_eq!(comedy, 100.0);
    }

    #[test]
    fn test_no_genres_gives_no_columns_and_no_points() {
        let filter = Filter::new(Vec::<String>::new(), YearRange::new(2000, 2016));
        let view = run_pipeline(&dataset(), filter, SortOrder::Descending);

        assert_eq!(view.matrix.column_count(), 0);
        assert!(view.chart_rows.is_empty());
    }
}
