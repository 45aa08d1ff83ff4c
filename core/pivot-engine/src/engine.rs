//! FILENAME: core/pivot-engine/src/engine.rs
//! Pivot Engine - The calculation core that turns long-form rows into a matrix.
//!
//! Algorithm:
//! 1. Intern the requested genre columns (first occurrence wins)
//! 2. Accumulate every input row into its (year, column) cell
//! 3. Order the distinct years per the definition
//! 4. Emit one dense row per year, finalizing each cell or filling it

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::definition::{AggregationType, Observation, PivotDefinition, SortOrder};
use crate::matrix::{PivotMatrix, PivotRow, RowValues};

// ============================================================================
// CELL ACCUMULATOR
// ============================================================================

/// Running state for one (year, genre) cell.
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    sum: f64,
    count: usize,
    min: f64,
    max: f64,
}

impl Accumulator {
    fn new() -> Self {
        Accumulator {
            sum: 0.0,
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    fn finish(&self, aggregation: AggregationType) -> f64 {
        match aggregation {
            AggregationType::Sum => self.sum,
            AggregationType::Count => self.count as f64,
            AggregationType::Average => self.sum / self.count as f64,
            AggregationType::Min => self.min,
            AggregationType::Max => self.max,
        }
    }
}

// ============================================================================
// PIVOT CALCULATOR
// ============================================================================

/// The calculation engine for a year x genre pivot.
pub struct PivotCalculator<'a> {
    definition: &'a PivotDefinition,

    /// Output columns, deduplicated.
    columns: Vec<String>,

    /// Column name -> output position.
    column_lookup: FxHashMap<String, usize>,

    /// (year, column position) -> accumulated cell.
    cells: FxHashMap<(i32, usize), Accumulator>,
}

impl<'a> PivotCalculator<'a> {
    pub fn new(definition: &'a PivotDefinition) -> Self {
        let mut columns = Vec::with_capacity(definition.columns.len());
        let mut column_lookup = FxHashMap::default();

        for name in &definition.columns {
            if !column_lookup.contains_key(name) {
                column_lookup.insert(name.clone(), columns.len());
                columns.push(name.clone());
            }
        }

        PivotCalculator {
            definition,
            columns,
            column_lookup,
            cells: FxHashMap::default(),
        }
    }

    /// Folds input rows into the cell accumulators. Rows whose genre is not
    /// a requested column are skipped.
    pub fn accumulate<O: Observation>(&mut self, rows: &[O]) {
        for row in rows {
            let Some(&col) = self.column_lookup.get(row.genre()) else {
                continue;
            };
            self.cells
                .entry((row.year(), col))
                .or_insert_with(Accumulator::new)
                .push(row.value());
        }
    }

    /// Executes the final layout and returns the dense matrix.
    pub fn finish(self) -> PivotMatrix {
        let mut years: Vec<i32> = self.cells.keys().map(|(year, _)| *year).collect();
        years.sort_unstable();
        years.dedup();
        if self.definition.sort_order == SortOrder::Descending {
            years.reverse();
        }

        let aggregation = self.definition.aggregation;
        let fill = self.definition.fill_value;
        let width = self.columns.len();

        let rows = years
            .into_iter()
            .map(|year| {
                let values: RowValues = (0..width)
                    .map(|col| {
                        self.cells
                            .get(&(year, col))
                            .map(|acc| acc.finish(aggregation))
                            .unwrap_or(fill)
                    })
                    .collect::<SmallVec<_>>();
                PivotRow { year, values }
            })
            .collect();

        PivotMatrix::from_parts(self.columns, rows)
    }
}

/// Calculates a pivot matrix from long-form rows.
pub fn calculate_pivot<O: Observation>(definition: &PivotDefinition, rows: &[O]) -> PivotMatrix {
    let mut calculator = PivotCalculator::new(definition);
    calculator.accumulate(rows);
    calculator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{Dataset, Filter, Record, YearRange};

    fn create_test_records() -> Vec<Record> {
        vec![
            Record::new(2010, "Drama", 100.0),
            Record::new(2010, "Drama", 50.0),
            Record::new(2011, "Comedy", 30.0),
        ]
    }

    #[test]
    fn test_basic_pivot_calculation() {
        let records = create_test_records();
        let def = PivotDefinition::new(["Drama", "Comedy"]);

        let m = calculate_pivot(&def, &records);

        assert_eq!(m.columns(), &["Drama", "Comedy"]);
        assert_eq!(m.years(), vec![2011, 2010]);
        assert_eq!(m.rows()[0].values.as_slice(), &[0.0, 30.0]);
        assert_eq!(m.rows()[1].values.as_slice(), &[150.0, 0.0]);
    }

    #[test]
    fn test_requested_genre_without_rows_is_zero_filled() {
        let records = create_test_records();
        let def = PivotDefinition::new(["Drama", "Horror"]);

        let m = calculate_pivot(&def, &records);

        assert_eq!(m.columns(), &["Drama", "Horror"]);
        assert_eq!(m.years(), vec![2010]);
        assert_eq!(m.get(2010, "Horror"), Some(0.0));
    }

    #[test]
    fn test_no_columns() {
        let records = create_test_records();
        let def = PivotDefinition::new(Vec::<String>::new());

        let m = calculate_pivot(&def, &records);

        assert_eq!(m.column_count(), 0);
        assert!(m.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let def = PivotDefinition::new(["Drama"]);
        let m = calculate_pivot::<Record>(&def, &[]);
        assert!(m.is_empty());
        assert_eq!(m.columns(), &["Drama"]);
    }

    #[test]
    fn test_ascending_sort_order() {
        let records = create_test_records();
        let def = PivotDefinition::new(["Drama", "Comedy"]).with_sort_order(SortOrder::Ascending);
        assert_eq!(calculate_pivot(&def, &records).years(), vec![2010, 2011]);
    }

    #[test]
    fn test_other_aggregations() {
        let records = create_test_records();
        let base = PivotDefinition::new(["Drama"]);

        let count = calculate_pivot(&base.clone().with_aggregation(AggregationType::Count), &records);
        assert_eq!(count.get(2010, "Drama"), Some(2.0));

        let avg = calculate_pivot(&base.clone().with_aggregation(AggregationType::Average), &records);
        assert_eq!(avg.get(2010, "Drama"), Some(75.0));

        let min = calculate_pivot(&base.clone().with_aggregation(AggregationType::Min), &records);
        assert_eq!(min.get(2010, "Drama"), Some(50.0));

        let max = calculate_pivot(&base.with_aggregation(AggregationType::Max), &records);
        assert_eq!(max.get(2010, "Drama"), Some(100.0));
    }

    #[test]
    fn test_custom_fill_value() {
        let records = create_test_records();
        let def = PivotDefinition::new(["Drama", "Comedy"]).with_fill_value(-1.0);
        assert_eq!(calculate_pivot(&def, &records).get(2011, "Drama"), Some(-1.0));
    }

    #[test]
    fn test_pivot_over_filtered_references() {
        let dataset = Dataset::new(vec![
            Record::new(2009, "Drama", 7.0),
            Record::new(2010, "Drama", 100.0),
            Record::new(2010, "Action", 40.0),
            Record::new(2011, "Comedy", 30.0),
        ]);
        let filter = Filter::new(["Drama", "Comedy"], YearRange::new(2010, 2011));
        let filtered = filter.apply(&dataset);

        let m = calculate_pivot(&PivotDefinition::from_filter(&filter), &filtered);

        assert_eq!(m.years(), vec![2011, 2010]);
        assert_eq!(m.column_total("Drama"), Some(100.0));
        assert_eq!(m.get(2010, "Action"), None);
    }

    #[test]
    fn test_duplicate_columns_collapse() {
        let records = create_test_records();
        let def = PivotDefinition::new(["Drama", "Drama"]);
        let m = calculate_pivot(&def, &records);
        assert_eq!(m.columns(), &["Drama"]);
        assert_eq!(m.get(2010, "Drama"), Some(150.0));
    }
}
