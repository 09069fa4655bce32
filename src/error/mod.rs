//! Unified error handling for carbon-tracker.
//!
//! - **Error Categories**: how the UI should react (ignore, block, fall back)
//! - **Domain-specific Errors**: feed store, clipboard, estimator, config
//! - **Unified Error Type**: `AppError` consolidates all of them
//!
//! | Category | Example | UI reaction |
//! |----------|---------|-------------|
//! | NotFound | toggling an unknown post id | logged, ignored |
//! | InvalidInput | empty comment | submission blocked |
//! | ExternalFailure | clipboard write failed | fallback toast |
//! | Configuration | zero toast duration | startup message |
//! | System | terminal setup failed | process exits |

mod app_error;
mod category;
mod feed;

pub use app_error::AppError;
pub use category::ErrorCategory;
pub use feed::FeedError;

/// Type alias for Results using `AppError`.
pub type AppResult<T> = Result<T, AppError>;
