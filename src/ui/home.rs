//! Home view: create menu and the admin contact call-to-action

use crate::app::App;
use crate::state::HOME_MENU;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

const MENU_WIDTH: u16 = 40;

/// Draw the home menu
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let menu_height = HOME_MENU.len() as u16 * BUTTON_HEIGHT;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),           // Top padding
            Constraint::Length(2),        // Title
            Constraint::Length(3),        // Intro text
            Constraint::Length(menu_height),
            Constraint::Length(2),        // Contact hint
            Constraint::Min(1),           // Bottom padding
        ])
        .split(area);

    let title = Paragraph::new("Sistem Administrasi Sekolah")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);

    let intro = Paragraph::new(
        "Daftarkan guru, siswa, dan kelas baru di lingkungan sekolah ini, \
         atau hubungi admin untuk mendapatkan akses.",
    )
    .style(Style::default().fg(Color::Gray))
    .alignment(Alignment::Center)
    .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(intro, rows[2]);

    let menu_area = centered_column(rows[3], MENU_WIDTH);
    let buttons = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(BUTTON_HEIGHT); HOME_MENU.len()])
        .split(menu_area);
    for (idx, &label) in HOME_MENU.iter().enumerate() {
        render_button(frame, buttons[idx], label, app.state.home_index == idx, true);
    }

    // Matches the original call-to-action footnote
    let hint = Paragraph::new("Tautan admin akan membawa Anda ke WhatsApp")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[4]);
}

/// Center a fixed-width column inside `area`
fn centered_column(area: Rect, width: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);
    chunks[1]
}
