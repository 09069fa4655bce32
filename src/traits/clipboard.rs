//! Clipboard collaborator trait abstraction.
//!
//! The feed's share action hands a link to whatever implements
//! [`ClipboardSink`]. Failures are never fatal: the caller falls back to
//! showing the text for manual copy.

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened (headless session, no X11).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard was opened but the write was rejected.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),

    /// The write did not complete in time.
    #[error("clipboard write timed out after {millis}ms")]
    TimedOut { millis: u64 },
}

/// Trait for writing text to a clipboard.
///
/// # Example
///
/// ```ignore
/// use carbon_tracker::traits::ClipboardSink;
///
/// async fn copy_link<C: ClipboardSink>(clipboard: &C, url: &str) -> bool {
///     clipboard.write(url).await.is_ok()
/// }
/// ```
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    /// Write `text` to the clipboard.
    async fn write(&self, text: &str) -> Result<(), ClipboardError>;
}
