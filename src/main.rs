mod args;
mod config;
mod run;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expensetui::ExpenseStore;

fn main() -> Result<()> {
    let args = args::Args::parse();
    let settings = config::Settings::from_args(&args)?;
    init_logger(args.log_level(), &settings.log_path)?;
    debug!("{args:?}");

    let store = if settings.demo {
        ExpenseStore::with_sample_data(chrono::Utc::now())?
    } else {
        ExpenseStore::new()
    };
    info!(records = store.len(), "Starting session");

    run::as_tui(store, &settings)
}

/// Send tracing output to `path`. The terminal belongs to the TUI, so nothing goes to stderr.
fn init_logger(level: LevelFilter, path: &Path) -> Result<()> {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        // The library and the binary share one crate name.
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
