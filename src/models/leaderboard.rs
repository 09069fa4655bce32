//! Leaderboard model.

use serde::{Deserialize, Serialize};

/// A ranked player on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub xp: u32,
    pub level: u32,
    pub streak_days: u32,
}

/// Podium marker for the top three ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMarker {
    Crown,
    Silver,
    Bronze,
    Number(usize),
}

impl RankMarker {
    /// Marker for a zero-based position.
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => RankMarker::Crown,
            1 => RankMarker::Silver,
            2 => RankMarker::Bronze,
            n => RankMarker::Number(n + 1),
        }
    }
}

/// Players ordered by XP, highest first.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    players: Vec<Player>,
}

impl Leaderboard {
    pub fn new(mut players: Vec<Player>) -> Self {
        // Stable sort keeps seed order among ties
        players.sort_by(|a, b| b.xp.cmp(&a.xp));
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn max_xp(&self) -> u32 {
        self.players.iter().map(|p| p.xp).max().unwrap_or(0)
    }

    /// XP bar width relative to the leader, in 0..=1.
    pub fn relative_xp(&self, player: &Player) -> f64 {
        let max = self.max_xp();
        if max == 0 {
            return 0.0;
        }
        player.xp as f64 / max as f64
    }

    /// One-based rank of a player by name.
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name).map(|i| i + 1)
    }
}
