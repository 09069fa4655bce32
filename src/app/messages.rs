//! AppMessage enum for async communication within the application.

use crate::state::ShareOutcome;

use super::CounterKind;

/// Messages sent back to the UI task by spawned work
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// A share's clipboard write finished (or timed out)
    ShareResolved(ShareOutcome),
    /// One animation frame for a dashboard counter, tagged with the
    /// generation of the retarget that spawned it
    CounterFrame {
        counter: CounterKind,
        generation: u64,
        value: f64,
    },
}
