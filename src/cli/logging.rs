use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable overriding `--log-level`
pub const LOG_ENV: &str = "TRANSCRIPT_VIEWER_LOG";

/// Where log output goes
pub enum LogTarget<'a> {
    Stderr,
    /// Append to a file (the TUI owns the terminal)
    File(&'a Path),
    Disabled,
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize tracing for the process
pub fn init_logging(level: &str, target: LogTarget) -> Result<()> {
    let filter = env_filter(level);

    let result = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => {
            let layer = fmt::layer().compact().with_target(false).with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        }
    };

    if let Err(e) = result {
        eprintln!("Warning: Could not initialize logging: {e}");
    }
    Ok(())
}
