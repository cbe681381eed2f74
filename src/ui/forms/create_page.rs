//! Schema-driven create page
//!
//! One renderer covers every create form: fields are grouped into one column
//! per schema section, followed by the submit button row. Per-field markup is
//! derived from the field descriptor, never hand-written per form.

use super::field_renderer::{draw_field, FieldDisplay};
use crate::app::App;
use crate::platform;
use crate::state::{ClassOptions, FieldKind, FieldSpec, FormController};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field height in rows (borders + one content row)
const FIELD_HEIGHT: u16 = 3;

/// Draw the open create form
pub fn draw_create(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.state.form.as_ref() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", form.schema().title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Field sections
            Constraint::Length(BUTTON_HEIGHT), // Submit row
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(inner);

    draw_sections(frame, chunks[0], app, form);
    draw_submit_row(frame, chunks[1], form);
    draw_help(frame, chunks[2]);
}

/// Draw the fields, one column per schema section
fn draw_sections(frame: &mut Frame, area: Rect, app: &App, form: &FormController) {
    let schema = form.schema();

    let mut sections: Vec<&'static str> = Vec::new();
    for field in schema.fields {
        if !sections.contains(&field.section) {
            sections.push(field.section);
        }
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, sections.len() as u32);
            sections.len()
        ])
        .spacing(2)
        .split(area);

    for (col, section) in sections.iter().enumerate() {
        let fields: Vec<(usize, &FieldSpec)> = schema
            .fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.section == *section)
            .collect();

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(columns[col]);

        let header = Paragraph::new(*section)
            .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));
        frame.render_widget(header, rows[0]);

        for (row, (idx, spec)) in fields.iter().enumerate() {
            let value = form.value(spec.name).unwrap_or("");
            let display = field_display(spec, value, &app.state.class_options);
            draw_field(
                frame,
                rows[row + 1],
                spec.label,
                &display,
                form.active_field() == *idx,
                form.error(spec.name),
            );
        }
    }
}

/// Resolve what a field shows: its value, or a kind-specific placeholder
fn field_display(spec: &FieldSpec, value: &str, class_options: &ClassOptions) -> FieldDisplay {
    match spec.kind {
        FieldKind::Select => {
            if class_options.is_loading() {
                FieldDisplay::placeholder("memuat kelas...")
            } else if matches!(class_options, ClassOptions::Failed) {
                FieldDisplay::placeholder("gagal memuat daftar kelas")
            } else if value.is_empty() {
                FieldDisplay::placeholder("Pilih Kelas")
            } else {
                FieldDisplay::value(class_options.name_for(value).unwrap_or(value))
            }
        }
        FieldKind::Enum(allowed) if value.is_empty() => {
            FieldDisplay::placeholder(allowed.join("/"))
        }
        FieldKind::Number if value.is_empty() => FieldDisplay::placeholder("(angka)"),
        FieldKind::Date if value.is_empty() => FieldDisplay::placeholder("YYYY-MM-DD"),
        _ => FieldDisplay::value(value),
    }
}

/// Draw the right-aligned submit button, disabled while a request is in flight
fn draw_submit_row(frame: &mut Frame, area: Rect, form: &FormController) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(22)])
        .split(area);

    let label = if form.is_submitting() {
        "Menyimpan..."
    } else {
        "Simpan Perubahan"
    };
    render_button(
        frame,
        chunks[1],
        label,
        form.on_submit_row(),
        !form.is_submitting(),
    );
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": pilih  "),
        Span::styled(platform::SAVE_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": simpan  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": batal"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
