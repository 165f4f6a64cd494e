//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod inquiry_form;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (form_area, status_area) = layout::create_layout(area);

    let inner = layout::draw_frame(frame, form_area);
    inquiry_form::draw(frame, inner, app);

    layout::draw_status_bar(frame, status_area, app);
}
