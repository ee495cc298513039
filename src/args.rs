//! Command-line flags for the expensetui binary.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// expensetui: track personal expenses in the terminal.
///
/// Expenses live in memory for the duration of the session and are gone when the program
/// exits. Start with --demo to explore with a few sample records.
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub(crate) struct Args {
    /// Seed the session with a small sample ledger.
    #[arg(long, env = "EXPENSETUI_DEMO")]
    demo: bool,

    /// Currency symbol shown in front of amounts.
    #[arg(long, env = "EXPENSETUI_CURRENCY", default_value = "₹")]
    currency: String,

    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// Where to write the log. Defaults to expensetui.log in the platform data directory.
    #[arg(long, env = "EXPENSETUI_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    pub(crate) fn demo(&self) -> bool {
        self.demo
    }

    pub(crate) fn currency(&self) -> &str {
        &self.currency
    }

    pub(crate) fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub(crate) fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }
}
