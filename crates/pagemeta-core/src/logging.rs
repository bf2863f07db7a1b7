//! Logging init: file under XDG state dir, or a quiet fallback to stderr.
//!
//! stderr is reserved for the JSON error payload, so diagnostics go to the
//! log file and the stderr fallback stays silent unless `RUST_LOG` is set.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const FILE_DEFAULT_FILTER: &str = "info,pagemeta=debug,pagemeta_core=debug";

/// Path of the log file, `$XDG_STATE_HOME/pagemeta/pagemeta.log`.
/// Creates the containing directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagemeta")?;
    Ok(xdg_dirs.place_state_file("pagemeta.log")?)
}

/// Initialize structured logging to `~/.local/state/pagemeta/pagemeta.log`.
/// On failure (e.g. state dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let log_file_path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILE_DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!("pagemeta logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only. Use when init_logging() fails so the CLI doesn't crash.
/// Off unless `RUST_LOG` asks for it.
pub fn init_logging_stderr() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
