//! Social feed screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode};
use crate::models::Post;
use crate::ui::components::{calculate_input_field_height, render_input_field, InputFieldConfig};
use crate::ui::helpers::truncate_string;
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_LIKE, COLOR_PROGRESS, COLOR_SAVED,
};

/// Rows per post card including borders
const CARD_HEIGHT: u16 = 6;

pub fn render_social(frame: &mut Frame, area: Rect, app: &App) {
    let posts = app.feed.posts();
    if posts.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No posts yet", Style::default().fg(COLOR_DIM))),
            area,
        );
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let (body, keys) = (rows[0], rows[1]);

    let (cards_area, comments_area) = if app.comments_open {
        let wanted = comments_height(app).min(body.height.saturating_sub(CARD_HEIGHT));
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(wanted)])
            .split(body);
        (split[0], Some(split[1]))
    } else {
        (body, None)
    };

    render_cards(frame, cards_area, app);
    if let Some(rect) = comments_area {
        render_comments(frame, rect, app);
    }
    render_keybinds(frame, keys);
}

/// First post to draw so the selected card stays visible.
pub fn first_visible(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return selected;
    }
    selected.saturating_sub(visible - 1)
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let visible = (area.height / CARD_HEIGHT).max(1) as usize;
    let start = first_visible(app.selected_post, visible);

    for (slot, (idx, post)) in app
        .feed
        .posts()
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .enumerate()
    {
        let y = area.y + slot as u16 * CARD_HEIGHT;
        if y >= area.bottom() {
            break;
        }
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height: CARD_HEIGHT.min(area.bottom() - y),
        };
        render_post_card(frame, rect, post, idx == app.selected_post);
    }
}

fn render_post_card(frame: &mut Frame, area: Rect, post: &Post, selected: bool) {
    let border = if selected { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let width = block.inner(area).width as usize;

    let heart = if post.liked {
        Span::styled(format!("♥ {}", post.like_count), Style::default().fg(COLOR_LIKE))
    } else {
        Span::styled(format!("♡ {}", post.like_count), Style::default().fg(COLOR_DIM))
    };
    let mut actions = vec![
        heart,
        Span::raw("   "),
        Span::styled(
            format!("✉ {}", post.comment_count()),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    if post.saved {
        actions.push(Span::raw("   "));
        actions.push(Span::styled("▣ Saved", Style::default().fg(COLOR_SAVED)));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("({}) ", post.avatar_initial()),
                Style::default().fg(COLOR_PROGRESS).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                post.author.clone(),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" · {}", post.time_label), Style::default().fg(COLOR_DIM)),
        ]),
        Line::from(Span::styled(
            truncate_string(&format!("🖼 {}", post.image_url), width),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(truncate_string(&post.caption, width)),
        Line::from(actions),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn composer_config(app: &App) -> InputFieldConfig<'_> {
    InputFieldConfig::new("Comment", &app.composer)
        .focused(app.input_mode == InputMode::Comment)
        .hint(app.input_hint.as_deref().filter(|_| app.input_mode == InputMode::Comment))
        .placeholder("[i] Add a comment")
}

fn comments_height(app: &App) -> u16 {
    let count = app
        .selected_post_id()
        .and_then(|id| app.feed.get(&id).map(|p| p.comment_count()))
        .unwrap_or(0) as u16;
    count.max(1) + 2 + calculate_input_field_height(&composer_config(app))
}

fn render_comments(frame: &mut Frame, area: Rect, app: &App) {
    let Some(post) = app.selected_post_id().and_then(|id| app.feed.get(&id)) else {
        return;
    };

    let composer_height = calculate_input_field_height(&composer_config(app)).min(area.height);
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(composer_height)])
        .split(area);

    let lines: Vec<Line> = if post.comments.is_empty() {
        vec![Line::from(Span::styled(
            "No comments yet",
            Style::default().fg(COLOR_DIM),
        ))]
    } else {
        post.comments
            .iter()
            .map(|c| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", c.author_label),
                        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(c.text.clone()),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" Comments on {}'s post ", post.author),
            Style::default().fg(COLOR_HEADER),
        ));

    // Newest at the bottom, keep them in view
    let inner_height = split[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        split[0],
    );
    render_input_field(frame, split[1], &composer_config(app));
}

fn render_keybinds(frame: &mut Frame, area: Rect) {
    let hints = "↑/↓ select  l like  s save  y share  c comments  i comment";
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(COLOR_DIM))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visible_keeps_selection_on_screen() {
        assert_eq!(first_visible(0, 3), 0);
        assert_eq!(first_visible(2, 3), 0);
        assert_eq!(first_visible(4, 3), 2);
        assert_eq!(first_visible(4, 1), 4);
    }
}
