//! Feed store errors.

use thiserror::Error;

/// Errors returned by feed store mutations.
///
/// Neither variant leaves the store in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The post id is not in the store.
    #[error("post not found: {post_id}")]
    NotFound { post_id: String },

    /// The input was rejected before any mutation.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl FeedError {
    pub fn not_found(post_id: impl Into<String>) -> Self {
        FeedError::NotFound {
            post_id: post_id.into(),
        }
    }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        FeedError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FeedError::NotFound { .. } => "E_FEED_NOT_FOUND",
            FeedError::InvalidInput { .. } => "E_FEED_INVALID_INPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_display() {
        assert_eq!(FeedError::not_found("p9").to_string(), "post not found: p9");
        assert_eq!(
            FeedError::invalid_input("comment is empty").to_string(),
            "invalid input: comment is empty"
        );
    }

    #[test]
    fn test_feed_error_codes() {
        assert_eq!(FeedError::not_found("x").error_code(), "E_FEED_NOT_FOUND");
        assert_eq!(
            FeedError::invalid_input("x").error_code(),
            "E_FEED_INVALID_INPUT"
        );
    }
}
