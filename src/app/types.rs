//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`InputMode`] - Where typed characters go
//! - [`CounterKind`] - The animated counters on the dashboard

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Today,
    Leaderboard,
    Social,
    Profile,
    About,
}

impl Screen {
    /// Sidebar order.
    pub const ALL: [Screen; 6] = [
        Screen::Dashboard,
        Screen::Today,
        Screen::Leaderboard,
        Screen::Social,
        Screen::Profile,
        Screen::About,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Today => "Today's Progress",
            Screen::Leaderboard => "Leaderboard",
            Screen::Social => "Social",
            Screen::Profile => "Profile",
            Screen::About => "About",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Screen::Dashboard => "◆",
            Screen::Today => "◷",
            Screen::Leaderboard => "♛",
            Screen::Social => "♥",
            Screen::Profile => "☺",
            Screen::About => "ℹ",
        }
    }

    pub fn index(&self) -> usize {
        Screen::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Screen for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Screen> {
        let idx = n.checked_sub(1)? as usize;
        Screen::ALL.get(idx).copied()
    }

    pub fn next(&self) -> Screen {
        Screen::ALL[(self.index() + 1) % Screen::ALL.len()]
    }

    pub fn prev(&self) -> Screen {
        let len = Screen::ALL.len();
        Screen::ALL[(self.index() + len - 1) % len]
    }

    /// Today's Progress reuses the dashboard view.
    pub fn shows_dashboard(&self) -> bool {
        matches!(self, Screen::Dashboard | Screen::Today)
    }
}

/// Where keystrokes are routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a comment on the open post
    Comment,
    /// Typing a free-text activity on the dashboard
    Activity,
}

/// Animated dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterKind {
    Points,
    Xp,
    /// Tenths of a kilogram, so one decimal animates smoothly
    Carbon,
    Streak,
}

impl CounterKind {
    pub const ALL: [CounterKind; 4] = [
        CounterKind::Points,
        CounterKind::Xp,
        CounterKind::Carbon,
        CounterKind::Streak,
    ];
}
