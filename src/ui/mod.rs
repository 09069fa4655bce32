//! UI rendering for Carbon Tracker
//!
//! Layout: a sidebar with the numbered screens on the left, the active
//! screen in a bordered content panel on the right, and the toast overlay
//! in the bottom-right corner.
//!
//! ## Responsive Layout System
//!
//! Screens size themselves through [`LayoutContext`]: two columns on wide
//! terminals, stacked panels below [`layout::MD_WIDTH`] columns. The sidebar
//! can be collapsed to icons with `[`.

pub mod components;
pub mod helpers;
pub mod layout;
pub mod ring;
pub mod theme;

mod about;
mod dashboard;
mod leaderboard;
mod profile;
mod sidebar;
mod social;

pub use about::SLIDES;
pub use layout::LayoutContext;
pub use ring::{ProgressRing, RingGeometry};

use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
    Frame,
};

use crate::app::{App, Screen};
use about::render_about;
use components::render_toast;
use dashboard::render_dashboard;
use layout::split_sidebar;
use leaderboard::render_leaderboard;
use profile::render_profile;
use sidebar::render_sidebar;
use social::render_social;
use theme::{COLOR_BORDER, COLOR_HEADER};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (sidebar_area, content_area) = split_sidebar(area, app.sidebar_collapsed);

    render_sidebar(frame, sidebar_area, app);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} {} ", app.screen.icon(), app.screen.label()),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(content_area);
    frame.render_widget(block, content_area);

    match app.screen {
        Screen::Dashboard | Screen::Today => render_dashboard(frame, inner, app),
        Screen::Leaderboard => render_leaderboard(frame, inner, app),
        Screen::Social => render_social(frame, inner, app),
        Screen::Profile => render_profile(frame, inner, app),
        Screen::About => render_about(frame, inner, app),
    }

    // Toast overlay (if any)
    if let Some(toast) = &app.toast {
        render_toast(frame, toast, area);
    }
}
