//! Gamification models shown on the dashboard and profile.

use serde::{Deserialize, Serialize};

/// Icon shown next to a badge or stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeIcon {
    Star,
    Bolt,
    Leaf,
    Medal,
    Trophy,
}

impl BadgeIcon {
    /// Terminal glyph for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            BadgeIcon::Star => "★",
            BadgeIcon::Bolt => "ϟ",
            BadgeIcon::Leaf => "❦",
            BadgeIcon::Medal => "◉",
            BadgeIcon::Trophy => "♛",
        }
    }
}

/// An earned achievement or badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: BadgeIcon,
}

impl Achievement {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: BadgeIcon,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon,
        }
    }
}

/// A mission the player can complete for XP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub title: String,
    pub xp_reward: u32,
    pub co2_kg: f64,
    /// Completion fraction in 0..=1
    pub progress: f64,
    pub icon: BadgeIcon,
}

impl Mission {
    pub fn subtitle(&self) -> String {
        format!("Earn {} XP · {:.1} kg CO₂ saved", self.xp_reward, self.co2_kg)
    }

    pub fn progress_percent(&self) -> u16 {
        (self.progress.clamp(0.0, 1.0) * 100.0).round() as u16
    }
}

/// An entry in the recent activity list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: String,
    pub text: String,
    pub time_label: String,
    pub points: u32,
}

/// The player's gamification counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// XP accumulated inside the current level
    pub xp: u32,
    /// XP needed to reach the next level
    pub next_level_xp: u32,
    pub level: u32,
    pub points: u32,
    pub streak_days: u32,
    pub carbon_saved_kg: f64,
}

impl PlayerStats {
    /// Fraction of the way to the next level, clamped to 0..=1.
    pub fn progress_to_next(&self) -> f64 {
        if self.next_level_xp == 0 {
            return 1.0;
        }
        (self.xp as f64 / self.next_level_xp as f64).clamp(0.0, 1.0)
    }

    /// Add XP, carrying overflow into new levels.
    ///
    /// Returns the number of levels gained.
    pub fn add_xp(&mut self, amount: u32) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        let mut gained = 0;
        while self.next_level_xp > 0 && self.xp >= self.next_level_xp {
            self.xp -= self.next_level_xp;
            self.level += 1;
            gained += 1;
        }
        gained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> PlayerStats {
        PlayerStats {
            xp: 740,
            next_level_xp: 1000,
            level: 3,
            points: 420,
            streak_days: 7,
            carbon_saved_kg: 4.6,
        }
    }

    #[test]
    fn test_progress_to_next() {
        assert!((stats().progress_to_next() - 0.74).abs() < 1e-9);

        let mut full = stats();
        full.xp = 5000;
        assert_eq!(full.progress_to_next(), 1.0);

        let mut degenerate = stats();
        degenerate.next_level_xp = 0;
        assert_eq!(degenerate.progress_to_next(), 1.0);
    }

    #[test]
    fn test_add_xp_without_level_up() {
        let mut s = stats();
        assert_eq!(s.add_xp(40), 0);
        assert_eq!(s.xp, 780);
        assert_eq!(s.level, 3);
    }

    #[test]
    fn test_add_xp_carries_into_next_level() {
        let mut s = stats();
        assert_eq!(s.add_xp(300), 1);
        assert_eq!(s.level, 4);
        assert_eq!(s.xp, 40);
    }

    #[test]
    fn test_add_xp_multiple_levels() {
        let mut s = stats();
        assert_eq!(s.add_xp(2260), 3);
        assert_eq!(s.level, 6);
        assert_eq!(s.xp, 0);
    }

    #[test]
    fn test_mission_subtitle_and_percent() {
        let mission = Mission {
            id: "m1".to_string(),
            title: "Bike to Work".to_string(),
            xp_reward: 8,
            co2_kg: 0.5,
            progress: 0.6,
            icon: BadgeIcon::Bolt,
        };
        assert_eq!(mission.subtitle(), "Earn 8 XP · 0.5 kg CO₂ saved");
        assert_eq!(mission.progress_percent(), 60);
    }
}
