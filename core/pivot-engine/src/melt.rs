//! FILENAME: core/pivot-engine/src/melt.rs
//! Melt - The inverse of a pivot.
//!
//! Converts a dense matrix back into long-form `{year, genre, gross}` rows
//! for charting. Emission is column-major: every row of the first genre
//! column in matrix order, then every row of the second, and so on.

use serde::{Deserialize, Serialize};

use crate::definition::Observation;
use crate::matrix::PivotMatrix;

/// One long-form row reconstituted from a matrix cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongRow {
    pub year: i32,
    pub genre: String,
    pub gross: f64,
}

impl Observation for LongRow {
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

/// Un-pivots a matrix into one row per cell.
pub fn melt(matrix: &PivotMatrix) -> Vec<LongRow> {
    let mut out = Vec::with_capacity(matrix.row_count() * matrix.column_count());
    for (col, genre) in matrix.columns().iter().enumerate() {
        for row in matrix.rows() {
            out.push(LongRow {
                year: row.year,
                genre: genre.clone(),
                gross: row.values[col],
            });
        }
    }
    out
}

/// A chart series: all long-form points of one genre, year ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub genre: String,
    pub points: Vec<(i32, f64)>,
}

/// Groups long-form rows into one series per genre, in first-appearance
/// order, with points sorted by year ascending for plotting.
pub fn group_series(rows: &[LongRow]) -> Vec<Series> {
    let mut series: Vec<Series> = Vec::new();
    for row in rows {
        let idx = match series.iter().position(|s| s.genre == row.genre) {
            Some(idx) => idx,
            None => {
                series.push(Series {
                    genre: row.genre.clone(),
                    points: Vec::new(),
                });
                series.len() - 1
            }
        };
        series[idx].points.push((row.year, row.gross));
    }
    for s in &mut series {
        s.points.sort_by_key(|(year, _)| *year);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::PivotDefinition;
    use crate::engine::calculate_pivot;
    use engine::Record;

    fn create_test_matrix() -> (PivotDefinition, PivotMatrix) {
        let records = vec![
            Record::new(2010, "Drama", 100.0),
            Record::new(2010, "Drama", 50.0),
            Record::new(2011, "Comedy", 30.0),
        ];
        let def = PivotDefinition::new(["Drama", "Comedy"]);
        let m = calculate_pivot(&def, &records);
        (def, m)
    }

    #[test]
    fn test_melt_is_column_major() {
        let (_, m) = create_test_matrix();
        let long = melt(&m);

        let keys: Vec<(i32, &str)> = long.iter().map(|r| (r.year, r.genre.as_str())).collect();
        assert_eq!(
            keys,
            vec![(2011, "Drama"), (2010, "Drama"), (2011, "Comedy"), (2010, "Comedy")]
        );
        assert_eq!(long[1].gross, 150.0);
        assert_eq!(long[2].gross, 30.0);
    }

    #[test]
    fn test_melt_then_repivot_round_trips() {
        let (def, m) = create_test_matrix();
        let again = calculate_pivot(&def, &melt(&m));
        assert_eq!(again, m);
    }

    #[test]
    fn test_melt_empty_matrix() {
        let def = PivotDefinition::new(["Drama"]);
        let m = calculate_pivot::<Record>(&def, &[]);
        assert!(melt(&m).is_empty());
    }

    #[test]
    fn test_group_series_sorts_years_ascending() {
        let (_, m) = create_test_matrix();
        let series = group_series(&melt(&m));

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].genre, "Drama");
        assert_eq!(series[0].points, vec![(2010, 150.0), (2011, 0.0)]);
        assert_eq!(series[1].genre, "Comedy");
        assert_eq!(series[1].points, vec![(2010, 0.0), (2011, 30.0)]);
    }
}
