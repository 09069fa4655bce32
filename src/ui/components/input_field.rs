//! Input Field Component
//!
//! Single-line composer with a rounded border, a placeholder when empty and
//! an inline hint underneath.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG, COLOR_WARNING};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Title in the border
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Shown under the box, e.g. a validation message
    pub hint: Option<&'a str>,
    /// Shown when the value is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            hint: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn hint(mut self, hint: Option<&'a str>) -> Self {
        self.hint = hint;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows needed: 3 for the box, plus 1 for the hint if present.
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    if config.hint.is_some() {
        4
    } else {
        3
    }
}

/// Render the field. Returns the height consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let box_area = Rect {
        height: 3.min(area.height),
        ..area
    };

    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", config.label),
            Style::default().fg(border_color),
        ))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let content = if config.value.is_empty() {
        Line::from(Span::styled(
            config.placeholder.unwrap_or_default().to_string(),
            Style::default().fg(COLOR_DIM),
        ))
    } else {
        let mut spans = vec![Span::raw(config.value.to_string())];
        if config.focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::White)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(content).block(block), box_area);

    let mut height = box_area.height;
    if let Some(hint) = config.hint {
        if area.height > height {
            let hint_area = Rect {
                y: area.y + height,
                height: 1,
                ..area
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("  {}", hint),
                    Style::default().fg(COLOR_WARNING),
                )),
                hint_area,
            );
            height += 1;
        }
    }
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(config: &InputFieldConfig) -> String {
        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                render_input_field(f, f.area(), config);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let config = InputFieldConfig::new("Comment", "").placeholder("Add a comment");
        let text = render(&config);
        assert!(text.contains("Comment"));
        assert!(text.contains("Add a comment"));
    }

    #[test]
    fn test_hint_adds_a_row() {
        let config = InputFieldConfig::new("Comment", "hi").hint(Some("Write something"));
        assert_eq!(calculate_input_field_height(&config), 4);
        assert!(render(&config).contains("Write something"));
    }
}
