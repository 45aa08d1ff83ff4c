//! FILENAME: core/persistence/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Cannot read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Missing column '{0}' in CSV header")]
    MissingColumn(String),

    #[error("Invalid {column} value '{value}' on line {line}")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
    },
}
