//! Trait abstractions for dependency injection and testability.
//!
//! - [`ClipboardSink`] - platform clipboard used by the share action

pub mod clipboard;

pub use clipboard::{ClipboardError, ClipboardSink};
