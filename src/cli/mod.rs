//! Command-line interface.
//!
//! Called early in `main()` to handle flags before the TUI starts:
//!
//! ```ignore
//! use carbon_tracker::cli::{parse_args, run_cli_command};
//!
//! if run_cli_command(parse_args(std::env::args())) {
//!     return Ok(());
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{help_text, version_text, VERSION};

/// Run a CLI command if applicable.
///
/// Returns `true` when the command printed its output and the process should
/// exit, `false` for `RunTui`.
pub fn run_cli_command(command: CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            true
        }
        CliCommand::Help => {
            print!("{}", help_text());
            true
        }
        CliCommand::RunTui => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_is_not_handled() {
        assert!(!run_cli_command(CliCommand::RunTui));
    }

    #[test]
    fn test_version_is_handled() {
        assert!(run_cli_command(CliCommand::Version));
    }
}
