//! Toast overlay rendered in the top-right corner

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Draw the visible toasts, newest stacking below older ones
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    for (idx, toast) in app.state.toasts.visible().enumerate() {
        let width = TOAST_WIDTH.min(area.width);
        let toast_area = Rect {
            x: area.width.saturating_sub(width + 1),
            y: 1 + idx as u16 * TOAST_HEIGHT,
            width,
            height: TOAST_HEIGHT,
        };
        if toast_area.bottom() >= area.height {
            break;
        }

        let color = if toast.destructive {
            Color::Red
        } else {
            Color::Green
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let body = Paragraph::new(toast.title.as_str())
            .style(Style::default().fg(color))
            .block(block);

        frame.render_widget(Clear, toast_area);
        frame.render_widget(body, toast_area);
    }
}
