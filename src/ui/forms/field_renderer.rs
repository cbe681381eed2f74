//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Resolved display for one field: the text to show and whether it is a
/// placeholder rather than the stored value
pub struct FieldDisplay {
    pub text: String,
    pub is_placeholder: bool,
}

impl FieldDisplay {
    pub fn value(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_placeholder: false,
        }
    }

    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_placeholder: true,
        }
    }
}

/// Draw a single bordered form field. The validation error, when present,
/// replaces the bottom border title in red.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    display: &FieldDisplay,
    is_active: bool,
    error: Option<&str>,
) {
    let text_style = if display.is_placeholder {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    let content = Paragraph::new(Line::from(vec![
        Span::styled(&display.text, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    frame.render_widget(content.block(block), area);
}
