//! FILENAME: app/server/src/routes.rs
// PURPOSE: HTTP handlers: the dashboard page plus its JSON, SVG and export
//          endpoints.
// CONTEXT: Every handler reruns the full pipeline from the query string;
//          nothing is kept between requests except the shared dataset.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use pivot_engine::SortOrder;

use crate::api_types::{
    ChartDataResponse, DashboardQuery, HealthResponse, PivotResponse, QueryError, WidgetOptions,
};
use crate::pipeline::{run_pipeline, DashboardView};
use crate::presenter::page::PageContext;
use crate::presenter::{render_chart_svg, render_page, vega_lite_spec, ChartOptions};
use crate::{log_debug, log_error, log_warn, AppState};

pub const CSV_FILENAME: &str = "movies_gross_by_genre.csv";
pub const XLSX_FILENAME: &str = "movies_gross_by_genre.xlsx";

type Pairs = Query<Vec<(String, String)>>;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest(e.0)
    }
}

impl From<persistence::PersistenceError> for AppError {
    fn from(e: persistence::PersistenceError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                log_warn!("HTTP", "bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            AppError::Internal(msg) => {
                log_error!("HTTP", "internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}

// ============================================================================
// ROUTER
// ============================================================================

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/health", get(health))
        .route("/api/genres", get(widget_options))
        .route("/api/pivot", get(pivot_json))
        .route("/api/chart-data", get(chart_data_json))
        .route("/api/chart.svg", get(chart_svg))
        .route("/api/chart.vl.json", get(chart_vega))
        .route("/api/export.csv", get(export_csv))
        .route("/api/export.xlsx", get(export_xlsx))
        .with_state(state)
}

/// Resolves the widgets and runs the pipeline.
fn run_for_query(state: &AppState, pairs: Vec<(String, String)>) -> Result<(DashboardView, SortOrder), AppError> {
    let query = DashboardQuery::from_pairs(pairs);
    let filter = query.resolve(&state.config, &state.dataset)?;
    let order = query.sort_order()?;
    Ok((run_pipeline(&state.dataset, filter, order), order))
}

fn chart_options(state: &AppState) -> ChartOptions {
    ChartOptions {
        width: state.config.chart_width,
        height: state.config.chart_height,
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(pairs): Pairs,
) -> Result<Html<String>, AppError> {
    log_debug!("HTTP", "GET /");
    let (view, sort_order) = run_for_query(&state, pairs)?;
    let options = WidgetOptions::from_config(&state.config, &state.dataset);

    let chart = match render_chart_svg(&view.chart_rows, chart_options(&state)) {
        Ok(svg) => svg,
        Err(e) => {
            log_error!("HTTP", "chart render failed: {}", e);
            r#"<p class="empty">Chart unavailable.</p>"#.to_string()
        }
    };

    Ok(Html(render_page(&PageContext {
        options: &options,
        view: &view,
        sort_order,
        chart_svg: &chart,
    })))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        records: state.dataset.len(),
        genres: state.dataset.genres().len(),
    })
}

pub async fn widget_options(State(state): State<AppState>) -> Json<WidgetOptions> {
    Json(WidgetOptions::from_config(&state.config, &state.dataset))
}

pub async fn pivot_json(
    State(state): State<AppState>,
    Query(pairs): Pairs,
) -> Result<Json<PivotResponse>, AppError> {
    let (view, _) = run_for_query(&state, pairs)?;
    Ok(Json(PivotResponse {
        filter: view.filter,
        matrix: view.matrix,
    }))
}

pub async fn chart_data_json(
    State(state): State<AppState>,
    Query(pairs): Pairs,
) -> Result<Json<ChartDataResponse>, AppError> {
    let (view, _) = run_for_query(&state, pairs)?;
    Ok(Json(ChartDataResponse {
        filter: view.filter,
        rows: view.chart_rows,
    }))
}

pub async fn chart_svg(
    State(state): State<AppState>,
    Query(pairs): Pairs,
) -> Result<Response, AppError> {
    let (view, _) = run_for_query(&state, pairs)?;
    let svg = render_chart_svg(&view.chart_rows, chart_options(&state)).map_err(AppError::Internal)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}

pub async fn chart_vega(
    State(state): State<AppState>,
    Query(pairs): Pairs,
) -> Result<Json<serde_json::Value>, AppError> {
    let (view, _) = run_for_query(&state, pairs)?;
    Ok(Json(vega_lite_spec(&view.chart_rows, state.config.chart_height)))
}

pub async fn export_csv(
    State(state): State<AppState>,
    Query(pairs): Pairs,
) -> Result<Response, AppError> {
    let (view, _) = run_for_query(&state, pairs)?;
    let bytes = persistence::matrix_to_csv_bytes(&view.matrix)?;
    log_debug!("EXPORT", "csv rows={} bytes={}", view.matrix.row_count(), bytes.len());
    Ok(attachment("text/csv; charset=utf-8", CSV_FILENAME, bytes))
}

pub async fn export_xlsx(
    State(state): State<AppState>,
    Query(pairs): Pairs,
) -> Result<Response, AppError> {
    let (view, _) = run_for_query(&state, pairs)?;
    let bytes = persistence::matrix_to_xlsx_bytes(&view.matrix)?;
    log_debug!("EXPORT", "xlsx rows={} bytes={}", view.matrix.row_count(), bytes.len());
    Ok(attachment(
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        XLSX_FILENAME,
        bytes,
    ))
}

fn attachment(content_type: &'static str, filename: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}
