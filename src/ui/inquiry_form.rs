//! Inquiry form grid rendering

use super::components::{render_action_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldId, RESET_BUTTON, SUBMIT_BUTTON};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

const FIELD_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 4;

/// One rendered row of the two-column grid
enum Row {
    Full(FieldId),
    Pair(FieldId, FieldId),
    Buttons,
}

impl Row {
    fn height(&self) -> u16 {
        match self {
            Row::Full(FieldId::Message) => MESSAGE_HEIGHT,
            Row::Buttons => BUTTON_HEIGHT,
            _ => FIELD_HEIGHT,
        }
    }
}

/// Row plan for the two-column grid; the email/phone row appears only while
/// the matching contact method is selected.
fn build_rows(app: &App) -> Vec<Row> {
    let values = app.form.values();
    let mut rows = vec![
        Row::Full(FieldId::InquiryType),
        Row::Pair(FieldId::CarModel, FieldId::Budget),
        Row::Pair(FieldId::FullName, FieldId::Location),
        Row::Full(FieldId::ContactMethod),
    ];
    if values.wants_email() {
        rows.push(Row::Full(FieldId::Email));
    } else if values.wants_phone() {
        rows.push(Row::Full(FieldId::Phone));
    }
    rows.push(Row::Pair(FieldId::PreferredDate, FieldId::PreferredTime));
    rows.push(Row::Full(FieldId::Message));
    rows.push(Row::Full(FieldId::ReferralSource));
    rows.push(Row::Buttons);
    rows
}

/// Draw the full form into `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let rows = build_rows(app);

    let mut constraints: Vec<Constraint> =
        rows.iter().map(|row| Constraint::Length(row.height())).collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, chunk) in rows.iter().zip(chunks.iter()) {
        match row {
            Row::Full(field) => draw_field(frame, *chunk, &app.form, *field),
            Row::Pair(left, right) => {
                let halves = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(*chunk);
                draw_field(frame, halves[0], &app.form, *left);
                draw_field(frame, halves[1], &app.form, *right);
            }
            Row::Buttons => draw_buttons(frame, *chunk, app),
        }
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.form.is_buttons_row_active();
    let selected = app.form.selected_button;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Submit
            Constraint::Length(12), // Reset
            Constraint::Min(0),
        ])
        .split(area);

    render_action_button(
        frame,
        chunks[0],
        "Submit",
        is_focused && selected == SUBMIT_BUTTON,
        Color::Green,
    );
    render_action_button(
        frame,
        chunks[1],
        "Reset",
        is_focused && selected == RESET_BUTTON,
        Color::Yellow,
    );
}
