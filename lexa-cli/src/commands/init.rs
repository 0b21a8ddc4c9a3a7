//! Init command implementation.
//!
//! Writes a default `lexa.toml` so the prompt and output settings can be
//! edited instead of passed on every invocation.

use std::path::PathBuf;

use tracing::info;

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{CliError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to write the configuration into.
    pub path: Option<PathBuf>,
}

/// Writes the default configuration and returns the path written.
pub fn run_init(args: InitArgs) -> Result<PathBuf> {
    let target_dir = match args.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    if target_dir.exists() && !target_dir.is_dir() {
        return Err(CliError::Validation(format!(
            "Target path is not a directory: {}",
            target_dir.display()
        )));
    }

    let config_path = target_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() && !args.force {
        return Err(CliError::Validation(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            config_path.display()
        )));
    }

    Config::default().save_to_path(&config_path)?;
    info!(path = %config_path.display(), "wrote default configuration");
    Ok(config_path)
}
