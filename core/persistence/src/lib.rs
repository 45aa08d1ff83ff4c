//! FILENAME: core/persistence/src/lib.rs
//! Dashboard Persistence Module
//!
//! Loads the genre revenue CSV (memoized per process) and exports pivot
//! tables as CSV or XLSX downloads.

mod cache;
mod csv_reader;
mod csv_writer;
mod error;
mod xlsx_writer;

pub use cache::DatasetCache;
pub use csv_reader::{load_csv, read_csv, GENRE_COLUMN, GROSS_COLUMN, YEAR_COLUMN};
pub use csv_writer::{matrix_to_csv_bytes, write_matrix_csv};
pub use error::PersistenceError;
pub use xlsx_writer::{matrix_to_xlsx_bytes, PIVOT_SHEET_NAME};
