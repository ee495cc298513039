use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::args::Args;

const LOG_FILE_NAME: &str = "expensetui.log";

/// Runtime settings resolved from the command line and environment.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) currency: String,
    pub(crate) log_path: PathBuf,
    pub(crate) demo: bool,
}

impl Settings {
    pub(crate) fn from_args(args: &Args) -> Result<Self> {
        let log_path = match args.log_file() {
            Some(path) => path.clone(),
            None => default_data_dir()?.join(LOG_FILE_NAME),
        };
        ensure_parent_dir(&log_path)?;

        Ok(Self {
            currency: args.currency().to_string(),
            log_path,
            demo: args.demo(),
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "expensetui", "ExpenseTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
