//! FILENAME: app/server/src/config.rs
// PURPOSE: Dashboard configuration: defaults, optional JSON file, CLI overrides.

use engine::YearRange;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Genres pre-selected in the multi-select widget.
pub const DEFAULT_GENRES: [&str; 6] = ["Action", "Adventure", "Biography", "Comedy", "Drama", "Horror"];

/// Slider bounds.
pub const DEFAULT_YEAR_BOUNDS: (i32, i32) = (1986, 2016);

/// Slider start position.
pub const DEFAULT_YEARS: (i32, i32) = (2000, 2016);

/// Server and widget configuration. Every field has a default, so a config
/// file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Source CSV with `year`, `genre` and `gross` columns
    pub data_path: PathBuf,

    /// Interface to listen on
    pub bind: String,

    pub port: u16,

    pub default_genres: Vec<String>,

    /// Year slider bounds
    pub year_bounds: YearRange,

    /// Year slider initial position
    pub default_years: YearRange,

    /// Chart height in pixels
    pub chart_height: u32,

    /// Chart width in pixels (the SVG scales to its container)
    pub chart_width: u32,

    /// Optional log file; console only when unset
    pub log_file: Option<PathBuf>,

    /// debug, info, warn or error
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            data_path: PathBuf::from("data/movies_genres_summary.csv"),
            bind: "127.0.0.1".to_string(),
            port: 8501,
            default_genres: DEFAULT_GENRES.iter().map(|g| g.to_string()).collect(),
            year_bounds: DEFAULT_YEAR_BOUNDS.into(),
            default_years: DEFAULT_YEARS.into(),
            chart_height: 320,
            chart_width: 960,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a JSON file. Missing keys take defaults.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {:?}: {}", path, e))?;
        serde_json::from_str(&text).map_err(|e| format!("Invalid config {:?}: {}", path, e))
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), String> {
        if self.year_bounds.is_inverted() {
            return Err(format!(
                "year_bounds are inverted: {}..{}",
                self.year_bounds.low, self.year_bounds.high
            ));
        }
        if self.default_years.is_inverted() {
            return Err(format!(
                "default_years are inverted: {}..{}",
                self.default_years.low, self.default_years.high
            ));
        }
        if self.default_years.low < self.year_bounds.low
            || self.default_years.high > self.year_bounds.high
        {
            return Err(format!(
                "default_years {}..{} fall outside year_bounds {}..{}",
                self.default_years.low,
                self.default_years.high,
                self.year_bounds.low,
                self.year_bounds.high
            ));
        }
        if self.chart_height == 0 || self.chart_width == 0 {
            return Err("chart dimensions must be positive".to_string());
        }
        if crate::logging::parse_level(&self.log_level).is_none() {
            return Err(format!("unknown log_level '{}'", self.log_level));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
