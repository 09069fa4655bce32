//! Responsive layout helpers
//!
//! [`LayoutContext`] carries the terminal dimensions into every render
//! function so panels can size themselves proportionally.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Expanded sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 24;

/// Collapsed sidebar (icons only)
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;

/// Terminal width breakpoints
pub mod breakpoints {
    /// Below this, secondary columns are dropped
    pub const SM_WIDTH: u16 = 80;
    /// Below this, panels stack vertically
    pub const MD_WIDTH: u16 = 120;
    /// Below this height, decorative rows are dropped
    pub const SM_HEIGHT: u16 = 24;
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Width in columns
    pub width: u16,
    /// Height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Stack side-by-side panels when there is no room for them.
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::MD_WIDTH
    }

    /// Split into a main column and a side column (2:1), or stack them.
    pub fn two_columns(&self, area: Rect) -> (Rect, Rect) {
        let chunks = if self.should_stack_panels() {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area)
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
                .split(area)
        };
        (chunks[0], chunks[1])
    }
}

pub fn sidebar_width(collapsed: bool) -> u16 {
    if collapsed {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_WIDTH
    }
}

/// Split the screen into sidebar and content.
pub fn split_sidebar(area: Rect, collapsed: bool) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_width(collapsed).min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Usable width of the content area (inside its border).
pub fn content_width(terminal_width: u16, sidebar_collapsed: bool) -> u16 {
    terminal_width
        .saturating_sub(sidebar_width(sidebar_collapsed))
        .saturating_sub(2)
}
