//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod toast;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let main_area = layout::create_layout(area);

    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::TeacherCreate | View::StudentCreate | View::ClassroomCreate => {
            forms::draw_create(frame, main_area, app);
        }
    }

    layout::draw_status_bar(frame, app);
    toast::draw(frame, app);
}
