//! Profile screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::components::render_stat_card;
use crate::ui::theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PROGRESS, COLOR_PROGRESS_BG, COLOR_XP,
};

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(format!(" {} ", title), Style::default().fg(COLOR_HEADER)))
}

pub fn render_profile(frame: &mut Frame, area: Rect, app: &App) {
    let profile = &app.profile;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(4),
            Constraint::Length(profile.badges.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    // Header: avatar, name, handle, level and XP bar
    let header = panel("Profile");
    let inner = header.inner(rows[0]);
    frame.render_widget(header, rows[0]);
    let header_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("({}) ", profile.avatar_initial()),
                Style::default().fg(COLOR_PROGRESS).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                profile.name.clone(),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", profile.handle), Style::default().fg(COLOR_DIM)),
        ]),
        Line::from(vec![
            Span::styled(format!("Level {}", profile.level), Style::default().fg(COLOR_XP)),
            Span::styled(
                format!("  ·  {} / {} XP", profile.xp, profile.next_level_xp),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        Line::from(Span::styled(
            format!("Joined {}", profile.joined),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), header_rows[0]);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(COLOR_PROGRESS).bg(COLOR_PROGRESS_BG))
            .percent(profile.xp_percent().min(100))
            .label(format!("{}%", profile.xp_percent())),
        header_rows[1],
    );

    // Stats
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[1]);
    render_stat_card(
        frame,
        cols[0],
        "❦",
        "CO₂ saved",
        &format!("{:.1} kg", profile.co2_saved_kg),
    );
    render_stat_card(
        frame,
        cols[1],
        "ϟ",
        "Streak",
        &format!("{} days", profile.streak_days),
    );
    render_stat_card(frame, cols[2], "◉", "Badges", &profile.badges.len().to_string());

    // Badges
    let badges: Vec<Line> = profile
        .badges
        .iter()
        .map(|b| {
            Line::from(vec![
                Span::styled(format!("{} ", b.icon.glyph()), Style::default().fg(COLOR_XP)),
                Span::styled(b.title.clone(), Style::default().fg(COLOR_HEADER)),
                Span::styled(format!(" · {}", b.description), Style::default().fg(COLOR_DIM)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(badges).block(panel("Badges")), rows[2]);

    // Recent activity
    let recent: Vec<Line> = profile
        .recent_activity
        .iter()
        .map(|a| Line::from(format!("• {}", a)))
        .collect();
    frame.render_widget(Paragraph::new(recent).block(panel("Recent Activity")), rows[3]);
}
