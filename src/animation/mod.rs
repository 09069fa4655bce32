//! Animated numeric values for counters that change on screen.
//!
//! - [`ease_out_cubic`] - the interpolation curve
//! - [`AnimatedValue`] - origin/target/duration state and its frame sequence
//! - [`AnimationTask`] - cancellable frame-paced task driving a value
//! - [`CounterBank`] - keyed counters with one task each

pub mod counters;
pub mod easing;
pub mod task;
pub mod value;

pub use counters::{CounterBank, FrameSink};
pub use easing::ease_out_cubic;
pub use task::AnimationTask;
pub use value::{AnimatedValue, Frames, SNAP_THRESHOLD};
