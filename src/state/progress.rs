//! Gamification progress: XP, level, points, streak and carbon saved.

use tracing::info;
use uuid::Uuid;

use crate::activity::{CarbonEstimate, POINTS_PER_ACTIVITY};
use crate::models::{Achievement, Mission, PlayerStats, RecentActivity};

/// XP granted by the daily bonus.
pub const DAILY_BONUS_XP: u32 = 10;

/// Maximum entries kept in the recent activity list.
const MAX_RECENT: usize = 20;

/// What changed after a progress update, so the view can re-target counters.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressChange {
    pub xp_gained: u32,
    pub points_gained: u32,
    pub levels_gained: u32,
    pub carbon_saved_kg: f64,
}

#[derive(Debug, Clone)]
pub struct ProgressState {
    stats: PlayerStats,
    achievements: Vec<Achievement>,
    missions: Vec<Mission>,
    recent: Vec<RecentActivity>,
    daily_bonus_claimed: bool,
}

impl ProgressState {
    pub fn new(
        stats: PlayerStats,
        achievements: Vec<Achievement>,
        missions: Vec<Mission>,
        recent: Vec<RecentActivity>,
    ) -> Self {
        Self {
            stats,
            achievements,
            missions,
            recent,
            daily_bonus_claimed: false,
        }
    }

    pub fn seeded() -> Self {
        use super::seed;
        Self::new(
            seed::player_stats(),
            seed::achievements(),
            seed::missions(),
            seed::recent_activity(),
        )
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Newest first.
    pub fn recent(&self) -> &[RecentActivity] {
        &self.recent
    }

    pub fn daily_bonus_claimed(&self) -> bool {
        self.daily_bonus_claimed
    }

    /// Claim the once-per-session daily bonus. Returns `None` if already claimed.
    pub fn claim_daily_bonus(&mut self) -> Option<ProgressChange> {
        if self.daily_bonus_claimed {
            return None;
        }
        self.daily_bonus_claimed = true;
        let levels_gained = self.stats.add_xp(DAILY_BONUS_XP);
        self.log_level_up(levels_gained);
        Some(ProgressChange {
            xp_gained: DAILY_BONUS_XP,
            points_gained: 0,
            levels_gained,
            carbon_saved_kg: 0.0,
        })
    }

    /// Apply a logged activity: XP, points, carbon saved and a recent entry.
    pub fn record_activity(&mut self, estimate: &CarbonEstimate) -> ProgressChange {
        let xp = estimate.xp_reward();
        let levels_gained = self.stats.add_xp(xp);
        self.stats.points = self.stats.points.saturating_add(POINTS_PER_ACTIVITY);
        self.stats.carbon_saved_kg += estimate.saved_kg();

        self.recent.insert(
            0,
            RecentActivity {
                id: format!("r-{}", Uuid::new_v4().simple()),
                text: estimate.message.clone(),
                time_label: "now".to_string(),
                points: POINTS_PER_ACTIVITY,
            },
        );
        self.recent.truncate(MAX_RECENT);
        self.log_level_up(levels_gained);

        ProgressChange {
            xp_gained: xp,
            points_gained: POINTS_PER_ACTIVITY,
            levels_gained,
            carbon_saved_kg: estimate.saved_kg(),
        }
    }

    fn log_level_up(&self, levels_gained: u32) {
        if levels_gained > 0 {
            info!(level = self.stats.level, "Level up");
        }
    }
}
