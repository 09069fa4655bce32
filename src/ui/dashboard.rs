//! Dashboard screen: level ring, animated counters, missions and the
//! activity logger.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::{App, CounterKind, InputMode};
use crate::state::progress::DAILY_BONUS_XP;
use crate::ui::components::{
    calculate_input_field_height, render_input_field, render_stat_card, InputFieldConfig,
};
use crate::ui::helpers::{format_thousands, text_bar, truncate_string};
use crate::ui::layout::LayoutContext;
use crate::ui::ring::ProgressRing;
use crate::ui::theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PROGRESS, COLOR_PROGRESS_BG, COLOR_XP,
};

pub fn render_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let ctx = LayoutContext::from_rect(area);
    let (main, side) = ctx.two_columns(area);

    let level_height = if ctx.is_short() { 8 } else { 12 };
    let main_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(level_height),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(main);

    render_level_panel(frame, main_rows[0], app);
    render_stat_cards(frame, main_rows[1], app);
    render_missions(frame, main_rows[2], app);

    let composer_height = composer_height(app);
    let side_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.progress.achievements().len() as u16 + 2),
            Constraint::Min(0),
            Constraint::Length(composer_height),
        ])
        .split(side);

    render_achievements(frame, side_rows[0], app);
    render_recent(frame, side_rows[1], app);
    render_activity_composer(frame, side_rows[2], app);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
}

fn render_level_panel(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.progress.stats();
    let block = panel("Your Level");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(ProgressRing::new(stats.progress_to_next()), cols[0]);

    let xp = app.counter_display(CounterKind::Xp);
    let points = app.counter_display(CounterKind::Points);
    let bonus = if app.progress.daily_bonus_claimed() {
        Span::styled("✓ Daily bonus claimed", Style::default().fg(COLOR_DIM))
    } else {
        Span::styled(
            format!("[b] Claim Daily Bonus ({} XP)", DAILY_BONUS_XP),
            Style::default().fg(COLOR_PROGRESS).add_modifier(Modifier::BOLD),
        )
    };

    let details = vec![
        Line::from(vec![
            Span::styled("Level ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!("#{}", stats.level),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Points ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format_thousands(points),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("XP ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!("{} / {}", xp, stats.next_level_xp),
                Style::default().fg(COLOR_XP),
            ),
        ]),
        Line::from(""),
    ];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(details.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(cols[1]);

    frame.render_widget(Paragraph::new(details), rows[0]);

    let ratio = if stats.next_level_xp == 0 {
        1.0
    } else {
        (xp as f64 / stats.next_level_xp as f64).clamp(0.0, 1.0)
    };
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(COLOR_PROGRESS).bg(COLOR_PROGRESS_BG))
            .ratio(ratio)
            .label(""),
        rows[1],
    );
    frame.render_widget(Paragraph::new(Line::from(bonus)), rows[3]);
}

fn render_stat_cards(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let achievements = app.progress.achievements().len();
    let cards = [
        ("❦", "CO₂ saved", format!("{:.1} kg", app.carbon_display())),
        (
            "ϟ",
            "Streak",
            format!("{} days", app.counter_display(CounterKind::Streak)),
        ),
        ("★", "Achievements", achievements.to_string()),
        ("◉", "Badges", app.profile.badges.len().to_string()),
    ];

    for ((icon, title, value), rect) in cards.iter().zip(cols.iter()) {
        render_stat_card(frame, *rect, icon, title, value);
    }
}

fn render_missions(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel("Active Missions");
    let inner_width = block.inner(area).width as usize;
    let bar_width = inner_width.saturating_sub(8).min(40);

    let mut lines = Vec::new();
    for mission in app.progress.missions() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", mission.icon.glyph()),
                Style::default().fg(COLOR_PROGRESS),
            ),
            Span::styled(
                mission.title.clone(),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            truncate_string(&format!("  {}", mission.subtitle()), inner_width),
            Style::default().fg(COLOR_DIM),
        )));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", text_bar(mission.progress, bar_width)),
                Style::default().fg(COLOR_PROGRESS),
            ),
            Span::raw(format!(" {}%", mission.progress_percent())),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_achievements(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(4) as usize;
    let lines: Vec<Line> = app
        .progress
        .achievements()
        .iter()
        .map(|a| {
            Line::from(vec![
                Span::styled(format!("{} ", a.icon.glyph()), Style::default().fg(COLOR_XP)),
                Span::styled(a.title.clone(), Style::default().fg(COLOR_HEADER)),
                Span::styled(
                    truncate_string(&format!(" · {}", a.description), width.saturating_sub(a.title.len() + 2)),
                    Style::default().fg(COLOR_DIM),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(panel("Achievements")), area);
}

fn render_recent(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(4) as usize;
    let lines: Vec<Line> = app
        .progress
        .recent()
        .iter()
        .map(|r| {
            let suffix = format!(" {} +{}", r.time_label, r.points);
            Line::from(vec![
                Span::raw(truncate_string(&r.text, width.saturating_sub(suffix.len()))),
                Span::styled(suffix, Style::default().fg(COLOR_DIM)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(panel("Recent Activity")), area);
}

fn composer_config(app: &App) -> InputFieldConfig<'_> {
    InputFieldConfig::new("Log activity", &app.composer)
        .focused(app.input_mode == InputMode::Activity)
        .hint(app.input_hint.as_deref().filter(|_| app.input_mode == InputMode::Activity))
        .placeholder("[a] e.g. cycled 5 km, 3 kwh electricity")
}

fn composer_height(app: &App) -> u16 {
    calculate_input_field_height(&composer_config(app))
}

fn render_activity_composer(frame: &mut Frame, area: Rect, app: &App) {
    render_input_field(frame, area, &composer_config(app));
}
