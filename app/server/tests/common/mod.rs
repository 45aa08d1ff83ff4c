//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for dashboard integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use app_lib::{create_app_state, load_dataset, AppState, DashboardConfig};
use engine::{Dataset, Record};

/// Test harness owning a temp CSV and the state built from it.
pub struct TestHarness {
    pub state: AppState,
    pub csv_path: PathBuf,
    _dir: tempfile::TempDir,
}

impl TestHarness {
    /// Harness over the standard movies fixture.
    pub fn new() -> Self {
        Self::with_csv(&MoviesFixture::csv())
    }

    /// Harness over arbitrary CSV text, loaded through the process-wide memo.
    pub fn with_csv(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let csv_path = dir.path().join("movies_genres_summary.csv");
        let mut file = std::fs::File::create(&csv_path).expect("create fixture");
        file.write_all(body.as_bytes()).expect("write fixture");

        let dataset = load_dataset(&csv_path).expect("load fixture");
        let config = DashboardConfig {
            data_path: csv_path.clone(),
            ..DashboardConfig::default()
        };

        TestHarness {
            state: create_app_state(config, dataset),
            csv_path,
            _dir: dir,
        }
    }

    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.state.dataset)
    }
}

/// Query pairs the way axum's `Query<Vec<(String, String)>>` hands them over.
pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Small movies dataset with duplicate (year, genre) pairs, a genre outside
/// the default selection and years on both sides of the default range.
pub struct MoviesFixture;

impl MoviesFixture {
    pub fn headers() -> Vec<&'static str> {
        vec!["year", "genre", "gross", "movies"]
    }

    pub fn data() -> Vec<(i32, &'static str, f64)> {
        vec![
            (1995, "Action", 400.0),
            (1999, "Drama", 70.0),
            (2000, "Action", 1000.0),
            (2000, "Drama", 300.0),
            (2000, "Drama", 200.0),
            (2001, "Comedy", 450.0),
            (2001, "Horror", 90.0),
            (2005, "Western", 40.0),
            (2010, "Drama", 100.0),
            (2010, "Drama", 50.0),
            (2011, "Comedy", 30.0),
            (2016, "Action", 2500.0),
        ]
    }

    pub fn records() -> Vec<Record> {
        Self::data()
            .into_iter()
            .map(|(year, genre, gross)| Record::new(year, genre, gross))
            .collect()
    }

    pub fn csv() -> String {
        let mut out = Self::headers().join(",");
        out.push('\n');
        for (i, (year, genre, gross)) in Self::data().iter().enumerate() {
            out.push_str(&format!("{},{},{},{}\n", year, genre, gross, i + 1));
        }
        out
    }
}
