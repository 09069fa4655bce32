//! Toast Component
//!
//! Bottom-right overlay for the current [`Toast`].

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{Toast, ToastKind};
use crate::ui::theme::{COLOR_ACCENT, COLOR_SUCCESS, COLOR_WARNING};

const MAX_WIDTH: u16 = 60;

/// Where the toast goes inside `area`.
pub fn toast_area(toast: &Toast, area: Rect) -> Rect {
    let text_width = UnicodeWidthStr::width(toast.message.as_str()) as u16;
    let width = (text_width + 4).min(MAX_WIDTH).min(area.width);
    let inner = width.saturating_sub(4).max(1);
    let lines = text_width.div_ceil(inner).max(1);
    let height = (lines + 2).min(area.height);
    Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.bottom().saturating_sub(height + 1),
        width,
        height,
    }
}

pub fn render_toast(frame: &mut Frame, toast: &Toast, area: Rect) {
    let color = match toast.kind {
        ToastKind::Info => COLOR_ACCENT,
        ToastKind::Success => COLOR_SUCCESS,
        ToastKind::Warning => COLOR_WARNING,
    };
    let rect = toast_area(toast, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Span::styled(toast.message.clone(), Style::default().fg(color)))
            .wrap(Wrap { trim: true })
            .block(block),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;

    #[test]
    fn test_toast_sits_bottom_right() {
        let toast = Toast::new("Saved", ToastKind::Success, Instant::now(), Duration::from_secs(1));
        let area = Rect::new(0, 0, 100, 30);
        let rect = toast_area(&toast, area);
        assert_eq!(rect.width, 9);
        assert_eq!(rect.height, 3);
        assert_eq!(rect.right(), 99);
        assert_eq!(rect.bottom(), 29);
    }

    #[test]
    fn test_long_toast_wraps() {
        let message = format!("Share link (copy): https://example.com/{}", "x".repeat(80));
        let toast = Toast::new(message, ToastKind::Warning, Instant::now(), Duration::from_secs(1));
        let rect = toast_area(&toast, Rect::new(0, 0, 100, 30));
        assert_eq!(rect.width, MAX_WIDTH);
        assert!(rect.height > 3);
    }
}
