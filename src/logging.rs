//! Tracing setup.
//!
//! The terminal is owned by the TUI, so log lines go to a file. When no
//! file is configured (or it cannot be opened) logging is simply off.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;

/// Where logs ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(std::path::PathBuf),
    Disabled,
}

/// Build the filter from a directive, falling back to `info` when it does
/// not parse.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Failures are reported to the caller as
/// [`LogTarget::Disabled`] and never abort startup.
pub fn init_logging(config: &AppConfig) -> LogTarget {
    let Some(path) = config.log_file.as_deref() else {
        return LogTarget::Disabled;
    };

    let file = match open_log_file(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: logging disabled, cannot open {}: {}", path.display(), e);
            return LogTarget::Disabled;
        }
    };

    let installed = fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    match installed {
        Ok(()) => LogTarget::File(path.to_path_buf()),
        // A subscriber is already set (tests, embedding)
        Err(_) => LogTarget::Disabled,
    }
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
