//! Application state owned by the `App`.
//!
//! - [`FeedStore`] - posts and their like/save/comment state
//! - [`ProgressState`] - XP, level, points and recent activity
//! - [`seed`] - the built-in dataset both start from

pub mod feed;
pub mod progress;
pub mod seed;

pub use feed::{FeedStore, ShareOutcome, ShareRequest};
pub use progress::{ProgressChange, ProgressState};
