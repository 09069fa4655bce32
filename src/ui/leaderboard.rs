//! Leaderboard screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::RankMarker;
use crate::ui::helpers::{format_thousands, text_bar};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{
    COLOR_BORDER, COLOR_BRONZE, COLOR_DIM, COLOR_GOLD, COLOR_HEADER, COLOR_PROGRESS, COLOR_SILVER,
    COLOR_XP,
};

fn marker_span(marker: RankMarker) -> Span<'static> {
    match marker {
        RankMarker::Crown => Span::styled(" ♛ ", Style::default().fg(COLOR_GOLD)),
        RankMarker::Silver => Span::styled(" ◉ ", Style::default().fg(COLOR_SILVER)),
        RankMarker::Bronze => Span::styled(" ◉ ", Style::default().fg(COLOR_BRONZE)),
        RankMarker::Number(n) => Span::styled(format!("{:>2} ", n), Style::default().fg(COLOR_DIM)),
    }
}

pub fn render_leaderboard(frame: &mut Frame, area: Rect, app: &App) {
    let board = &app.leaderboard;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Leaderboard ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
    let inner_width = block.inner(area).width as usize;
    let narrow = LayoutContext::from_rect(area).is_narrow();
    let name_width = board
        .players()
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);
    let bar_width = inner_width.saturating_sub(name_width + 32).clamp(4, 40);

    let mut lines = Vec::new();
    for (idx, player) in board.players().iter().enumerate() {
        let name_style = if idx == 0 {
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        let mut spans = vec![
            marker_span(RankMarker::for_index(idx)),
            Span::styled(format!("{:<width$} ", player.name, width = name_width), name_style),
            Span::styled(
                text_bar(board.relative_xp(player), bar_width),
                Style::default().fg(COLOR_PROGRESS),
            ),
            Span::styled(
                format!(" {:>6} XP", format_thousands(player.xp as i64)),
                Style::default().fg(COLOR_XP),
            ),
        ];
        if !narrow {
            spans.push(Span::styled(
                format!("  Lv {}  ϟ {}d", player.level, player.streak_days),
                Style::default().fg(COLOR_DIM),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
