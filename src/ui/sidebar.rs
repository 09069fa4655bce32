//! Sidebar navigation.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_PROGRESS};

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let collapsed = app.sidebar_collapsed;
    let mut lines: Vec<Line> = Vec::new();

    if collapsed {
        lines.push(Line::from(Span::styled(
            " ♻",
            Style::default().fg(COLOR_PROGRESS),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            " ♻ Carbon Tracker",
            Style::default()
                .fg(COLOR_PROGRESS)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));

    for (idx, screen) in Screen::ALL.iter().enumerate() {
        let selected = *screen == app.screen;
        let marker = if selected { "▶" } else { " " };
        let style = if selected {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };

        let text = if collapsed {
            format!("{}{}", marker, screen.icon())
        } else {
            format!("{} {} {} {}", marker, idx + 1, screen.icon(), screen.label())
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    if !collapsed {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " [ collapse",
            Style::default().fg(COLOR_DIM),
        )));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
