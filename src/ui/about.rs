//! About page with the slide carousel.

use chrono::{Datelike, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PROGRESS};

/// (title, body) for each slide.
pub const SLIDES: [(&str, &str); 3] = [
    (
        "Track your footprint",
        "Log what you do in plain words: a bike ride, a bill, a meal. \
         Every activity gets a CO₂ estimate and earns XP.",
    ),
    (
        "Level up with friends",
        "Missions, streaks and badges turn small habits into progress. \
         See how you stack up on the leaderboard.",
    ),
    (
        "Share what works",
        "Post your wins to the community feed, like and comment on others, \
         and save ideas for later.",
    ),
];

pub fn footer_text(year: i32) -> String {
    format!("© {} Carbon Tracker", year)
}

pub fn render_about(frame: &mut Frame, area: Rect, app: &App) {
    let carousel = &app.carousel;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let (title, body) = SLIDES
        .get(carousel.current())
        .copied()
        .unwrap_or(("", ""));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().fg(COLOR_PROGRESS).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(body, Style::default().fg(COLOR_HEADER))),
    ];
    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        rows[0],
    );

    // Arrows and dots
    let arrow = |enabled: bool, glyph: &'static str| {
        let color = if enabled { COLOR_ACCENT } else { COLOR_DIM };
        Span::styled(glyph, Style::default().fg(color))
    };
    let mut spans = vec![arrow(carousel.can_prev(), "◀  ")];
    for active in carousel.dots() {
        if active {
            spans.push(Span::styled("● ", Style::default().fg(COLOR_PROGRESS)));
        } else {
            spans.push(Span::styled("○ ", Style::default().fg(COLOR_DIM)));
        }
    }
    spans.push(arrow(carousel.can_next(), " ▶"));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        rows[1],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "←/→ slide  Home/End first/last",
            Style::default().fg(COLOR_DIM),
        ))
        .alignment(Alignment::Center),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            footer_text(Local::now().year()),
            Style::default().fg(COLOR_DIM),
        ))
        .alignment(Alignment::Center),
        rows[3],
    );
}
