//! Stat Card Component
//!
//! Bordered card with an icon, a title and a large value.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PROGRESS};

pub fn render_stat_card(frame: &mut Frame, area: Rect, icon: &str, title: &str, value: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(COLOR_PROGRESS)),
            Span::styled(title.to_string(), Style::default().fg(COLOR_DIM)),
        ]),
        Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
