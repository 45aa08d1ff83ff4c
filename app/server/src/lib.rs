//! FILENAME: app/server/src/lib.rs
// PURPOSE: Main library entry point for the dashboard server.
// CONTEXT: Holds the shared read-only state and wires config, dataset and
//          routes together. The binary in main.rs only parses flags.

use std::path::Path;
use std::sync::Arc;

use engine::Dataset;
use persistence::{DatasetCache, PersistenceError};

pub mod api_types;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod presenter;
pub mod routes;

pub use api_types::{DashboardQuery, QueryError, WidgetOptions};
pub use config::DashboardConfig;
pub use logging::{init_log_file, get_log_path, next_seq, write_log};
pub use pipeline::{run_pipeline, DashboardView};
pub use routes::{build_router, AppError};

/// State shared by every request. Never mutated after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<DashboardConfig>,
    pub dataset: Arc<Dataset>,
}

pub fn create_app_state(config: DashboardConfig, dataset: Arc<Dataset>) -> AppState {
    log_info!(
        "SYS",
        "Creating AppState records={} genres={}",
        dataset.len(),
        dataset.genres().len()
    );
    AppState {
        config: Arc::new(config),
        dataset,
    }
}

/// Loads the configured dataset through the process-wide memo.
pub fn load_dataset(path: &Path) -> Result<Arc<Dataset>, PersistenceError> {
    log_enter!("DATA", "load_dataset", "path={}", path.display());
    let dataset = DatasetCache::global().get_or_load(path)?;
    match dataset.year_span() {
        Some((lo, hi)) => log_info!(
            "DATA",
            "loaded {} records, {} genres, years {}..{}",
            dataset.len(),
            dataset.genres().len(),
            lo,
            hi
        ),
        None => log_warn!("DATA", "loaded an empty dataset from {}", path.display()),
    }
    Ok(dataset)
}

/// Serves the dashboard until ctrl-c.
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log_info!("HTTP", "listening on http://{}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            log_info!("SYS", "shutdown requested");
        })
        .await?;
    Ok(())
}
