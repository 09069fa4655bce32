//! Mock implementations for testing.
//!
//! - [`MockClipboard`] - clipboard that records writes, fails, or hangs on demand

pub mod clipboard;

pub use clipboard::{MockClipboard, MockClipboardMode};
