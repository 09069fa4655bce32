//! User profile model.

use serde::{Deserialize, Serialize};

use super::dashboard::Achievement;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub handle: String,
    pub level: u32,
    pub xp: u32,
    pub next_level_xp: u32,
    pub streak_days: u32,
    pub co2_saved_kg: f64,
    /// Human-readable join date ("January 2025")
    pub joined: String,
    pub badges: Vec<Achievement>,
    pub recent_activity: Vec<String>,
}

impl UserProfile {
    /// XP progress in percent, capped at 100.
    pub fn xp_percent(&self) -> u16 {
        if self.next_level_xp == 0 {
            return 100;
        }
        let ratio = (self.xp as f64 / self.next_level_xp as f64).min(1.0);
        (ratio * 100.0).round() as u16
    }

    pub fn avatar_initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(xp: u32, next: u32) -> UserProfile {
        UserProfile {
            name: "saalim".to_string(),
            handle: "@saalim".to_string(),
            level: 5,
            xp,
            next_level_xp: next,
            streak_days: 9,
            co2_saved_kg: 12.4,
            joined: "January 2025".to_string(),
            badges: Vec::new(),
            recent_activity: Vec::new(),
        }
    }

    #[test]
    fn test_xp_percent() {
        assert_eq!(profile(940, 1200).xp_percent(), 78);
        assert_eq!(profile(1300, 1200).xp_percent(), 100);
        assert_eq!(profile(10, 0).xp_percent(), 100);
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(profile(0, 1).avatar_initial(), 'S');
    }
}
