//! Data models for the feed, dashboard, leaderboard and profile.

pub mod dashboard;
pub mod leaderboard;
pub mod post;
pub mod profile;

pub use dashboard::{Achievement, BadgeIcon, Mission, PlayerStats, RecentActivity};
pub use leaderboard::{Leaderboard, Player, RankMarker};
pub use post::{Comment, Post};
pub use profile::UserProfile;
