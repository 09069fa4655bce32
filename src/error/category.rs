//! Error category classification for unified error handling.
//!
//! Categories drive how the UI reacts to a failed action: ignore it, block
//! the input that caused it, or fall back to a softer outcome.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// An action referenced something that does not exist (unknown post id).
    /// The UI can only reference ids it rendered, so these are ignored.
    NotFound,

    /// The user supplied input that cannot be accepted (empty comment).
    /// Rejected before any mutation happens.
    InvalidInput,

    /// An external collaborator (clipboard) failed.
    /// Recovered locally with a fallback.
    ExternalFailure,

    /// Configuration problems (bad config file, zero durations).
    Configuration,

    /// OS-level errors (terminal, filesystem).
    System,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::InvalidInput => "invalid_input",
            ErrorCategory::ExternalFailure => "external_failure",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "Item no longer available",
            ErrorCategory::InvalidInput => "Input was not accepted",
            ErrorCategory::ExternalFailure => "Platform service unavailable",
            ErrorCategory::Configuration => "Configuration problem",
            ErrorCategory::System => "System error",
        }
    }

    /// Whether the UI should keep running after an error of this category.
    ///
    /// Only system errors (terminal setup, IO on startup) can end the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ErrorCategory::System)
    }

    /// Whether the error should be shown to the user at all.
    pub fn is_silent(&self) -> bool {
        matches!(self, ErrorCategory::NotFound)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_system_is_unrecoverable() {
        assert!(ErrorCategory::NotFound.is_recoverable());
        assert!(ErrorCategory::InvalidInput.is_recoverable());
        assert!(ErrorCategory::ExternalFailure.is_recoverable());
        assert!(ErrorCategory::Configuration.is_recoverable());
        assert!(!ErrorCategory::System.is_recoverable());
    }

    #[test]
    fn test_not_found_is_silent() {
        assert!(ErrorCategory::NotFound.is_silent());
        assert!(!ErrorCategory::InvalidInput.is_silent());
        assert!(!ErrorCategory::ExternalFailure.is_silent());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(ErrorCategory::ExternalFailure.to_string(), "external_failure");
        assert_eq!(ErrorCategory::InvalidInput.to_string(), "invalid_input");
    }
}
