//! Unified application error type.
//!
//! `AppError` consolidates the domain errors so the UI layer can decide how
//! to react through a single `category()` lookup.

use std::fmt;

use super::category::ErrorCategory;
use super::feed::FeedError;
use crate::activity::EstimateError;
use crate::config::ConfigError;
use crate::traits::ClipboardError;

/// The unified error type for carbon-tracker operations.
#[derive(Debug)]
pub enum AppError {
    /// Feed store mutation failed.
    Feed(FeedError),

    /// Clipboard collaborator failed.
    Clipboard(ClipboardError),

    /// Activity text could not be turned into an estimate.
    Estimate(EstimateError),

    /// Configuration could not be loaded or is invalid.
    Config(ConfigError),

    /// Terminal or filesystem error.
    Io(std::io::Error),
}

impl AppError {
    /// Get the error category for handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Feed(FeedError::NotFound { .. }) => ErrorCategory::NotFound,
            AppError::Feed(FeedError::InvalidInput { .. }) => ErrorCategory::InvalidInput,
            AppError::Clipboard(_) => ErrorCategory::ExternalFailure,
            AppError::Estimate(_) => ErrorCategory::InvalidInput,
            AppError::Config(_) => ErrorCategory::Configuration,
            AppError::Io(_) => ErrorCategory::System,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Feed(e) => e.error_code(),
            AppError::Clipboard(_) => "E_CLIPBOARD",
            AppError::Estimate(_) => "E_ESTIMATE",
            AppError::Config(_) => "E_CONFIG",
            AppError::Io(_) => "E_IO",
        }
    }

    /// Get a message suitable for a toast or inline hint.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Feed(FeedError::NotFound { .. }) => {
                "That post is no longer available.".to_string()
            }
            AppError::Feed(FeedError::InvalidInput { .. }) => {
                "Write something before posting.".to_string()
            }
            AppError::Clipboard(_) => "Clipboard unavailable, copy the link manually.".to_string(),
            AppError::Estimate(e) => e.to_string(),
            AppError::Config(e) => format!("Configuration problem: {}", e),
            AppError::Io(e) => format!("System error: {}", e),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Feed(e) => write!(f, "{}", e),
            AppError::Clipboard(e) => write!(f, "{}", e),
            AppError::Estimate(e) => write!(f, "{}", e),
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Feed(e) => Some(e),
            AppError::Clipboard(e) => Some(e),
            AppError::Estimate(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Io(e) => Some(e),
        }
    }
}

impl From<FeedError> for AppError {
    fn from(err: FeedError) -> Self {
        AppError::Feed(err)
    }
}

impl From<ClipboardError> for AppError {
    fn from(err: ClipboardError) -> Self {
        AppError::Clipboard(err)
    }
}

impl From<EstimateError> for AppError {
    fn from(err: EstimateError) -> Self {
        AppError::Estimate(err)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_errors_map_to_taxonomy() {
        let not_found: AppError = FeedError::not_found("p1").into();
        let invalid: AppError = FeedError::invalid_input("empty").into();

        assert_eq!(not_found.category(), ErrorCategory::NotFound);
        assert_eq!(invalid.category(), ErrorCategory::InvalidInput);
        assert_eq!(not_found.error_code(), "E_FEED_NOT_FOUND");
    }

    #[test]
    fn test_clipboard_error_is_external_failure() {
        let err: AppError = ClipboardError::TimedOut { millis: 1500 }.into();
        assert_eq!(err.category(), ErrorCategory::ExternalFailure);
        assert!(err.category().is_recoverable());
        assert!(!err.user_message().is_empty());
    }

    #[test]
    fn test_io_error_is_system() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "tty gone");
        let err: AppError = io.into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(!err.category().is_recoverable());
        assert!(err.to_string().contains("tty gone"));
    }
}
