//! FILENAME: core/persistence/src/csv_reader.rs
//! Reads the genre revenue summary CSV into a Dataset.

use engine::{Dataset, Record};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::PersistenceError;

pub const YEAR_COLUMN: &str = "year";
pub const GENRE_COLUMN: &str = "genre";
pub const GROSS_COLUMN: &str = "gross";

/// Column positions resolved from the header row.
struct HeaderMap {
    year: usize,
    genre: usize,
    gross: usize,
}

impl HeaderMap {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, PersistenceError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| PersistenceError::MissingColumn(name.to_string()))
        };
        Ok(HeaderMap {
            year: find(YEAR_COLUMN)?,
            genre: find(GENRE_COLUMN)?,
            gross: find(GROSS_COLUMN)?,
        })
    }
}

/// Loads a CSV file with at least `year`, `genre` and `gross` columns.
/// Extra columns are ignored.
pub fn load_csv(path: &Path) -> Result<Dataset, PersistenceError> {
    let file = File::open(path).map_err(|source| PersistenceError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file)
}

/// Parses CSV from any reader. Used by `load_csv` and by tests.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset, PersistenceError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = HeaderMap::resolve(&headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        // Header is line 1
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let field = |idx: usize| row.get(idx).unwrap_or("");

        let year = parse_year(field(columns.year)).ok_or_else(|| PersistenceError::InvalidValue {
            line,
            column: YEAR_COLUMN.to_string(),
            value: field(columns.year).to_string(),
        })?;

        let genre = field(columns.genre);
        if genre.is_empty() {
            return Err(PersistenceError::InvalidValue {
                line,
                column: GENRE_COLUMN.to_string(),
                value: String::new(),
            });
        }

        let gross = parse_gross(field(columns.gross)).ok_or_else(|| PersistenceError::InvalidValue {
            line,
            column: GROSS_COLUMN.to_string(),
            value: field(columns.gross).to_string(),
        })?;

        records.push(Record::new(year, genre, gross));
    }

    Ok(Dataset::new(records))
}

/// Accepts `2010` and `2010.0`, rejects `2010.5`.
fn parse_year(s: &str) -> Option<i32> {
    if let Ok(year) = s.parse::<i32>() {
        return Some(year);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(f as i32)
    } else {
        None
    }
}

fn parse_gross(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
