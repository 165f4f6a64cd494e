//! Screen layout and status bar

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest the form is allowed to grow; wider terminals get side margins
const MAX_FORM_WIDTH: u16 = 84;

/// Split the screen into the centered form column and the status bar line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let form_area = if chunks[0].width > MAX_FORM_WIDTH {
        let margin = (chunks[0].width - MAX_FORM_WIDTH) / 2;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(margin),
                Constraint::Length(MAX_FORM_WIDTH),
                Constraint::Min(0),
            ])
            .split(chunks[0]);
        columns[1]
    } else {
        chunks[0]
    };

    (form_area, chunks[1])
}

/// Draw the titled border around the form and return the inner area
pub fn draw_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Car Dealership Inquiry ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Draw the bottom status bar: key hints, plus the latest status message
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ];

    if app.form.is_valid() {
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled(
            "✓ ready to submit",
            Style::default().fg(Color::Green),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}
