//! `--version` and `--help` output.

use crate::config::{
    default_config_file, ENV_LOG, ENV_LOG_FILE, ENV_SHARE_TIMEOUT_MS, ENV_TICK_MS, ENV_TOAST_MS,
};

/// Crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("carbon-tracker {}", VERSION)
}

pub fn help_text() -> String {
    let config = default_config_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(no config directory)".to_string());

    format!(
        "carbon-tracker {VERSION}
Track activities, earn XP and follow the community feed from your terminal.

USAGE:
    carbon-tracker [OPTIONS]

OPTIONS:
    -h, --help       Print this help
    -V, --version    Print version

CONFIG FILE:
    {config}

ENVIRONMENT:
    {ENV_TICK_MS:<32} Frame interval in ms (default 16)
    {ENV_TOAST_MS:<32} Toast duration in ms (default 1800)
    {ENV_SHARE_TIMEOUT_MS:<32} Clipboard timeout in ms (default 1500)
    {ENV_LOG:<32} Log filter (default info)
    {ENV_LOG_FILE:<32} Log file path, empty to disable
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_text().starts_with("carbon-tracker "));
    }

    #[test]
    fn test_help_lists_flags_and_env() {
        let help = help_text();
        assert!(help.contains("--version"));
        assert!(help.contains("--help"));
        assert!(help.contains(ENV_TOAST_MS));
        assert!(help.contains(ENV_LOG_FILE));
    }
}
