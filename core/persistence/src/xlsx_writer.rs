//! FILENAME: core/persistence/src/xlsx_writer.rs

use pivot_engine::PivotMatrix;
use rust_xlsxwriter::{Format, FormatAlign, Workbook};

use crate::PersistenceError;

pub const PIVOT_SHEET_NAME: &str = "Gross by genre";

/// Writes the pivot matrix to an in-memory XLSX workbook. Years are written
/// as text so spreadsheet apps do not format them as quantities.
pub fn matrix_to_xlsx_bytes(matrix: &PivotMatrix) -> Result<Vec<u8>, PersistenceError> {
    let mut xlsx = Workbook::new();
    let worksheet = xlsx.add_worksheet();
    worksheet.set_name(PIVOT_SHEET_NAME)?;

    let header_format = Format::new().set_bold().set_align(FormatAlign::Center);
    let money_format = Format::new().set_num_format("#,##0");

    worksheet.write_string_with_format(0, 0, "Year", &header_format)?;
    for (col, genre) in matrix.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, (col + 1) as u16, genre, &header_format)?;
    }

    for (i, row) in matrix.rows().iter().enumerate() {
        let xl_row = (i + 1) as u32;
        worksheet.write_string(xl_row, 0, row.year.to_string())?;
        for (col, value) in row.values.iter().enumerate() {
            worksheet.write_number_with_format(xl_row, (col + 1) as u16, *value, &money_format)?;
        }
    }

    // Excel uses character width
    worksheet.set_column_width(0, 8.0)?;
    for col in 0..matrix.column_count() {
        worksheet.set_column_width((col + 1) as u16, 16.0)?;
    }

    Ok(xlsx.save_to_buffer()?)
}
