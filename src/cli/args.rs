//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments and return the command to run.
///
/// The first argument is the program name. Unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use carbon_tracker::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["carbon-tracker".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let args: Vec<String> = std::iter::once("carbon-tracker")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui);
    }

    #[test]
    fn test_first_recognised_flag_wins() {
        assert_eq!(parse(&["--unknown", "-h", "-V"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]), CliCommand::RunTui);
    }
}
