//! In-memory clipboard for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{ClipboardError, ClipboardSink};

/// How the mock responds to writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockClipboardMode {
    /// Writes succeed and are recorded.
    Succeed,
    /// Writes fail with `WriteFailed`.
    Fail,
    /// Writes never complete (exercise the share timeout).
    Hang,
}

/// Clipboard test double that records every successful write.
///
/// # Example
///
/// ```ignore
/// use carbon_tracker::adapters::mock::MockClipboard;
///
/// let clipboard = MockClipboard::new();
/// clipboard.write("https://example.com").await?;
/// assert_eq!(clipboard.contents(), Some("https://example.com".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct MockClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    mode: Arc<Mutex<MockClipboardMode>>,
}

impl Default for MockClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClipboard {
    /// Create a clipboard whose writes succeed.
    pub fn new() -> Self {
        Self::with_mode(MockClipboardMode::Succeed)
    }

    /// Create a clipboard whose writes always fail.
    pub fn failing() -> Self {
        Self::with_mode(MockClipboardMode::Fail)
    }

    /// Create a clipboard whose writes never resolve.
    pub fn hanging() -> Self {
        Self::with_mode(MockClipboardMode::Hang)
    }

    pub fn with_mode(mode: MockClipboardMode) -> Self {
        Self {
            writes: Arc::new(Mutex::new(Vec::new())),
            mode: Arc::new(Mutex::new(mode)),
        }
    }

    /// Change behaviour for subsequent writes.
    pub fn set_mode(&self, mode: MockClipboardMode) {
        *self.mode_guard() = mode;
    }

    /// The most recently written text.
    pub fn contents(&self) -> Option<String> {
        self.writes.lock().unwrap().last().cloned()
    }

    /// Every successful write, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    fn mode_guard(&self) -> std::sync::MutexGuard<'_, MockClipboardMode> {
        self.mode.lock().unwrap()
    }
}

#[async_trait]
impl ClipboardSink for MockClipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let mode = *self.mode_guard();
        match mode {
            MockClipboardMode::Succeed => {
                self.writes.lock().unwrap().push(text.to_string());
                Ok(())
            }
            MockClipboardMode::Fail => Err(ClipboardError::WriteFailed(
                "mock clipboard configured to fail".to_string(),
            )),
            MockClipboardMode::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(ClipboardError::WriteFailed("unreachable".to_string()))
            }
        }
    }
}
