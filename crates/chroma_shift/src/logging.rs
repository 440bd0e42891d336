//! Tracing subscriber installation.

use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs a global subscriber writing to `log_file` without ANSI colors,
/// so logs never corrupt the terminal UI. `RUST_LOG` overrides `default_filter`.
///
/// # Errors
///
/// Fails if the file cannot be created or a global subscriber is already
/// installed.
pub fn init_file_logging(log_file: &Path, default_filter: &str) -> anyhow::Result<()> {
    let file = std::fs::File::create(log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
