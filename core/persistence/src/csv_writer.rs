//! FILENAME: core/persistence/src/csv_writer.rs
//! Exports a pivot matrix as CSV: a `year` column followed by one column per
//! genre, rows in matrix order.

use pivot_engine::PivotMatrix;
use std::io::Write;

use crate::csv_reader::YEAR_COLUMN;
use crate::PersistenceError;

pub fn write_matrix_csv<W: Write>(matrix: &PivotMatrix, out: W) -> Result<(), PersistenceError> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header = Vec::with_capacity(matrix.column_count() + 1);
    header.push(YEAR_COLUMN.to_string());
    header.extend(matrix.columns().iter().cloned());
    writer.write_record(&header)?;

    for row in matrix.rows() {
        let mut fields = Vec::with_capacity(row.values.len() + 1);
        fields.push(row.year.to_string());
        fields.extend(row.values.iter().map(|v| v.to_string()));
        writer.write_record(&fields)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn matrix_to_csv_bytes(matrix: &PivotMatrix) -> Result<Vec<u8>, PersistenceError> {
    let mut buf = Vec::new();
    write_matrix_csv(matrix, &mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::Record;
    use pivot_engine::{calculate_pivot, PivotDefinition};

    #[test]
    fn test_export_layout() {
        let records = vec![
            Record::new(2010, "Drama", 150.0),
            Record::new(2011, "Comedy", 30.5),
        ];
        let m = calculate_pivot(&PivotDefinition::new(["Drama", "Comedy"]), &records);

        let text = String::from_utf8(matrix_to_csv_bytes(&m).unwrap()).unwrap();
        assert_eq!(text, "year,Drama,Comedy\n2011,0,30.5\n2010,150,0\n");
    }

    #[test]
    fn test_export_empty_matrix_writes_header() {
        let m = calculate_pivot::<Record>(&PivotDefinition::new(["Drama"]), &[]);
        let text = String::from_utf8(matrix_to_csv_bytes(&m).unwrap()).unwrap();
        assert_eq!(text, "year,Drama\n");
    }
}
