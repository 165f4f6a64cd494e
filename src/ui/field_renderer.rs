//! Field rendering for the inquiry form

use crate::state::{Choice, FieldId, FieldKind, InquiryForm};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one form field block: label as title, current value inside, and the
/// visible error (touched + invalid) as a red bottom title on the border.
pub fn draw_field(frame: &mut Frame, area: Rect, form: &InquiryForm, field: FieldId) {
    let is_active = form.active_field() == Some(field);
    let error = form.visible_error(field);

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    let value = form.values().get(field);
    let content = match field.kind() {
        FieldKind::Radio(options) => radio_line(value, options, is_active),
        FieldKind::Select(options) => select_line(value, options, is_active),
        FieldKind::Text { multiline: true } => multiline_text(value, is_active),
        FieldKind::Text { multiline: false } => text_line(value, "(empty)", is_active),
        FieldKind::Date => text_line(value, "YYYY-MM-DD", is_active),
        FieldKind::Time => text_line(value, "HH:MM", is_active),
    };

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn cursor_span(is_active: bool) -> Span<'static> {
    let cursor = if is_active { "▌" } else { "" };
    Span::styled(cursor, Style::default().fg(Color::Cyan))
}

/// Single-line text, with a dim placeholder while empty
fn text_line<'a>(value: &'a str, placeholder: &'a str, is_active: bool) -> Paragraph<'a> {
    let (text, style) = if value.is_empty() && !is_active {
        (placeholder, Style::default().fg(Color::DarkGray))
    } else if is_active {
        (value, Style::default().fg(Color::Cyan))
    } else {
        (value, Style::default())
    };

    Paragraph::new(Line::from(vec![
        Span::styled(text, style),
        cursor_span(is_active),
    ]))
}

/// Multi-line text with the cursor appended to the last line
fn multiline_text(value: &str, is_active: bool) -> Paragraph<'static> {
    let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span(true));
        } else {
            lines.push(Line::from(cursor_span(true)));
        }
    } else if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    Paragraph::new(lines)
}

/// All options inline: `(•) New   ( ) Used`
fn radio_line(value: &str, options: &'static [Choice], is_active: bool) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (i, choice) in options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let selected = choice.value == value;
        let marker = if selected { "(•) " } else { "( ) " };
        let style = match (selected, is_active) {
            (true, _) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            (false, true) => Style::default(),
            (false, false) => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!("{marker}{}", choice.label), style));
    }
    Paragraph::new(Line::from(spans))
}

/// Current choice with cycle arrows when active: `◂ ₹5L–₹10L ▸`
fn select_line(value: &str, options: &'static [Choice], is_active: bool) -> Paragraph<'static> {
    let label = options
        .iter()
        .find(|choice| choice.value == value)
        .map(|choice| choice.label)
        .unwrap_or("Select");

    let style = if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let line = if is_active {
        Line::from(vec![
            Span::styled("◂ ", Style::default().fg(Color::Cyan)),
            Span::styled(label, style),
            Span::styled(" ▸", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(Span::styled(label, style))
    };
    Paragraph::new(line)
}
