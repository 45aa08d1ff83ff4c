//! Movies Dataset dashboard server.
//!
//! Loads the genre revenue CSV once and serves the interactive dashboard.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use app_lib::{create_app_state, init_log_file, load_dataset, log_info, logging, serve, DashboardConfig};

#[derive(Parser)]
#[command(name = "movies-dashboard")]
#[command(about = "Serve the movie genre box office dashboard", long_about = None)]
struct Cli {
    /// Optional JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source CSV with year, genre and gross columns
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Interface to listen on
    #[arg(long)]
    bind: Option<String>,

    #[arg(short, long)]
    port: Option<u16>,

    /// Also write log lines to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// debug, info, warn or error
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    fn into_config(self) -> Result<DashboardConfig> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::from_file(path).map_err(|e| anyhow!(e))?,
            None => DashboardConfig::default(),
        };

        if let Some(data) = self.data {
            config.data_path = data;
        }
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(log_file) = self.log_file {
            config.log_file = Some(log_file);
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }

        config.validate().map_err(|e| anyhow!(e))?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;

    if let Some(level) = logging::parse_level(&config.log_level) {
        logging::set_min_level(level);
    }
    if let Some(path) = &config.log_file {
        match init_log_file(path) {
            Ok(path) => eprintln!("[LOG_INIT] Log file: {:?}", path),
            Err(e) => eprintln!("[LOG_INIT] FAILED: {} (continuing with console-only logging)", e),
        }
    }

    log_info!("INIT", "starting with data={}", config.data_path.display());

    let dataset = load_dataset(&config.data_path)
        .with_context(|| format!("failed to load dataset {}", config.data_path.display()))?;

    serve(create_app_state(config, dataset)).await
}
