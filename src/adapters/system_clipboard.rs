//! System clipboard adapter backed by `arboard`.

use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use arboard::Clipboard;

use crate::traits::{ClipboardError, ClipboardSink};

/// Writes to the OS clipboard (NSPasteboard on macOS, X11/Wayland on Linux).
///
/// One `arboard::Clipboard` is opened on first write and kept for the whole
/// session. On X11 and Wayland the copied text is only served while that
/// handle is alive. `arboard` is blocking, so each write runs on the blocking
/// pool and never stalls the UI task.
#[derive(Clone, Default)]
pub struct SystemClipboard {
    handle: Arc<Mutex<Option<Clipboard>>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_blocking(
        handle: &Mutex<Option<Clipboard>>,
        text: String,
    ) -> Result<(), ClipboardError> {
        let mut slot = handle
            .lock()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        let clipboard = match slot.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        let clipboard = slot.insert(clipboard);
        let result = clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()));
        // Reopen on the next write after a failure
        if result.is_err() {
            *slot = None;
        }
        result
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = self.handle.lock().map(|slot| slot.is_some()).unwrap_or(false);
        f.debug_struct("SystemClipboard").field("open", &open).finish()
    }
}

#[async_trait]
impl ClipboardSink for SystemClipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        let handle = Arc::clone(&self.handle);
        tokio::task::spawn_blocking(move || Self::write_blocking(&handle, text))
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_opens_lazily() {
        let clipboard = SystemClipboard::new();
        assert!(clipboard.handle.lock().unwrap().is_none());
        assert_eq!(format!("{clipboard:?}"), "SystemClipboard { open: false }");
    }

    #[test]
    fn test_clones_share_one_handle() {
        let clipboard = SystemClipboard::new();
        let copy = clipboard.clone();
        assert!(Arc::ptr_eq(&clipboard.handle, &copy.handle));
    }
}
