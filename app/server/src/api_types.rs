//! FILENAME: app/server/src/api_types.rs
// PURPOSE: Request/response types for the HTTP surface.
// CONTEXT: The two widgets arrive as query parameters; everything else is
//          JSON built from the pivot output.

use engine::{Dataset, Filter, YearRange};
use pivot_engine::{LongRow, PivotMatrix, SortOrder};
use serde::Serialize;

use crate::config::DashboardConfig;

// ============================================================================
// REQUEST
// ============================================================================

/// Widget state as sent by the dashboard form.
///
/// `genres` may repeat (one key per selected option, as an HTML multi-select
/// submits them) and each value may itself be comma-separated. Absent means
/// "use the default selection"; present with only empty values means "no
/// genres selected".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardQuery {
    pub genres: Option<Vec<String>>,
    pub from: Option<String>,
    pub to: Option<String>,
    /// Table row order: `desc` (default) or `asc`
    pub order: Option<String>,
}

/// A query that could not be turned into a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryError(pub String);

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl DashboardQuery {
    /// Builds a query from decoded `key=value` pairs. Unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = DashboardQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "genres" | "genre" => query
                    .genres
                    .get_or_insert_with(Vec::new)
                    .extend(value.split(',').map(|g| g.trim().to_string())),
                "from" => query.from = Some(value),
                "to" => query.to = Some(value),
                "order" => query.order = Some(value),
                _ => {}
            }
        }
        query
    }

    /// Canonical query string for a resolved selection, used by the page's
    /// links so exports and re-sorts keep the current widget state.
    pub fn encode(filter: &Filter, order: SortOrder) -> String {
        let mut pairs: Vec<(&str, String)> = vec![("genres", String::new())];
        pairs.extend(filter.genres.iter().map(|g| ("genres", g.clone())));
        pairs.push(("from", filter.years.low.to_string()));
        pairs.push(("to", filter.years.high.to_string()));
        pairs.push(("order", order_param(order).to_string()));
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }

    /// Resolves the widget state into a filter.
    ///
    /// Genres the dataset does not contain are dropped, since the
    /// multi-select only offers genres present in the data. Years are
    /// clamped into the slider bounds.
    pub fn resolve(&self, config: &DashboardConfig, dataset: &Dataset) -> Result<Filter, QueryError> {
        let requested: Vec<String> = match &self.genres {
            None => config.default_genres.clone(),
            Some(values) => values.iter().filter(|g| !g.is_empty()).cloned().collect(),
        };
        let genres: Vec<String> = requested
            .into_iter()
            .filter(|g| dataset.has_genre(g))
            .collect();

        let low = parse_year("from", self.from.as_deref())?.unwrap_or(config.default_years.low);
        let high = parse_year("to", self.to.as_deref())?.unwrap_or(config.default_years.high);
        let years = YearRange::new(low, high).clamp_to(config.year_bounds);

        Ok(Filter { genres, years })
    }

    pub fn sort_order(&self) -> Result<SortOrder, QueryError> {
        match self.order.as_deref().map(str::trim) {
            None | Some("") | Some("desc") => Ok(SortOrder::Descending),
            Some("asc") => Ok(SortOrder::Ascending),
            Some(other) => Err(QueryError(format!("order must be 'asc' or 'desc', got '{}'", other))),
        }
    }
}

pub fn order_param(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Ascending => "asc",
        SortOrder::Descending => "desc",
    }
}

fn parse_year(name: &str, raw: Option<&str>) -> Result<Option<i32>, QueryError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<i32>()
            .map(Some)
            .map_err(|_| QueryError(format!("{} must be a year, got '{}'", name, text))),
    }
}

// ============================================================================
// RESPONSES
// ============================================================================

/// Options and defaults for the two widgets.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetOptions {
    pub genres: Vec<String>,
    pub default_genres: Vec<String>,
    pub year_bounds: YearRange,
    pub default_years: YearRange,
}

impl WidgetOptions {
    pub fn from_config(config: &DashboardConfig, dataset: &Dataset) -> Self {
        WidgetOptions {
            genres: dataset.genres().to_vec(),
            default_genres: config
                .default_genres
                .iter()
                .filter(|g| dataset.has_genre(g))
                .cloned()
                .collect(),
            year_bounds: config.year_bounds,
            default_years: config.default_years,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PivotResponse {
    pub filter: Filter,
    pub matrix: PivotMatrix,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartDataResponse {
    pub filter: Filter,
    pub rows: Vec<LongRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub records: usize,
    pub genres: usize,
}
