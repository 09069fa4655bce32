//! Color theme constants
//!
//! Dark palette with green/teal accents for progress and savings.

use ratatui::style::Color;

// ============================================================================
// Base
// ============================================================================

/// Panel border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights and selected items
pub const COLOR_ACCENT: Color = Color::White;

/// Headings
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Progress
// ============================================================================

/// Filled arc and gauges - green
pub const COLOR_PROGRESS: Color = Color::Rgb(74, 222, 128); // #4ADE80

/// Second gradient stop - teal
pub const COLOR_PROGRESS_ALT: Color = Color::Rgb(45, 212, 191); // #2DD4BF

/// Unfilled ring track
pub const COLOR_PROGRESS_BG: Color = Color::Rgb(40, 40, 48);

/// XP values
pub const COLOR_XP: Color = Color::Rgb(250, 204, 21); // amber

// ============================================================================
// Social
// ============================================================================

/// Liked heart
pub const COLOR_LIKE: Color = Color::Rgb(244, 63, 94); // rose

/// Saved marker
pub const COLOR_SAVED: Color = Color::Rgb(96, 165, 250); // blue

// ============================================================================
// Toasts
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_WARNING: Color = Color::Rgb(251, 146, 60); // orange

/// Rank markers
pub const COLOR_GOLD: Color = Color::Rgb(250, 204, 21);
pub const COLOR_SILVER: Color = Color::Rgb(203, 213, 225);
pub const COLOR_BRONZE: Color = Color::Rgb(217, 119, 6);
