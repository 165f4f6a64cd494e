//! Application state and core logic

use crate::state::{FieldKind, FormValues, InquiryForm, RESET_BUTTON, SUBMIT_BUTTON};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Collaborator invoked with the collected values on a successful submit
pub type SubmitHandler = Box<dyn FnMut(&FormValues)>;

/// Main application struct
pub struct App {
    /// The one live inquiry form instance
    pub form: InquiryForm,
    /// Injected submission callback
    on_submit: SubmitHandler,
    /// Whether the app should quit
    quit: bool,
    /// Feedback line for the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App with the default submission handler: log the
    /// collected values as a JSON object.
    pub fn new() -> Self {
        Self::with_submit_handler(Box::new(|values| match serde_json::to_string(values) {
            Ok(json) => tracing::info!(submission = %json, "inquiry submitted"),
            Err(err) => tracing::warn!("failed to serialize submission: {err}"),
        }))
    }

    /// Create a new App with an injected submission handler
    pub fn with_submit_handler(on_submit: SubmitHandler) -> Self {
        Self {
            form: InquiryForm::new(),
            on_submit,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_buttons_row = self.form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab => self.form.next_field(),
            KeyCode::BackTab => self.form.prev_field(),
            // Submit shortcut works from anywhere
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.try_submit();
            }
            KeyCode::Esc => {
                self.quit = true;
            }
            // Buttons row: Left/Right pick a button, Enter activates it
            KeyCode::Left if on_buttons_row => self.form.prev_button(),
            KeyCode::Right if on_buttons_row => self.form.next_button(),
            KeyCode::Enter if on_buttons_row => match self.form.selected_button {
                SUBMIT_BUTTON => self.try_submit(),
                RESET_BUTTON => self.reset_form(),
                _ => {}
            },
            KeyCode::Up if on_buttons_row => self.form.prev_field(),
            KeyCode::Down if on_buttons_row => self.form.next_field(),
            // Field input
            _ => self.handle_field_key(key),
        }
        Ok(())
    }

    /// Route a key to the active field based on its kind
    fn handle_field_key(&mut self, key: KeyEvent) {
        let Some(field) = self.form.active_field() else {
            return;
        };
        let is_choice = field.kind().choices().is_some();
        let is_multiline = matches!(field.kind(), FieldKind::Text { multiline: true });
        // Shift is part of normal typing; anything else (Ctrl/Alt chords
        // other than the handled shortcuts) must not insert text.
        let is_typing = key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT;

        match key.code {
            KeyCode::Left if is_choice => self.form.cycle_choice(false),
            KeyCode::Right if is_choice => self.form.cycle_choice(true),
            KeyCode::Char(' ') if is_choice => self.form.cycle_choice(true),
            KeyCode::Char(c) if is_typing => self.form.push_char(c),
            KeyCode::Backspace => self.form.pop_char(),
            // Enter adds a newline in the message box, otherwise advances
            KeyCode::Enter if is_multiline => self.form.push_char('\n'),
            KeyCode::Enter | KeyCode::Down => self.form.next_field(),
            KeyCode::Up => self.form.prev_field(),
            _ => {}
        }
    }

    /// Run full validation and either hand off the values or surface errors
    fn try_submit(&mut self) {
        let on_submit = &mut self.on_submit;
        let submitted = self.form.submit(|values| on_submit(values));

        if submitted {
            self.status_message = Some("Inquiry submitted!".to_string());
        } else {
            let count = self.form.errors().len();
            let fields: Vec<&str> = self.form.errors().keys().map(|f| f.name()).collect();
            tracing::debug!("submit blocked by invalid fields: {}", fields.join(", "));
            self.status_message = Some(format!(
                "Please fix {count} invalid field{} before submitting",
                if count == 1 { "" } else { "s" }
            ));
        }
    }

    fn reset_form(&mut self) {
        self.form.reset();
        self.status_message = Some("Form cleared".to_string());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldId;
    use crate::validation;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn press_ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Drive the whole form to a valid state through key events alone
    fn fill_form_via_keys(app: &mut App) {
        press(app, KeyCode::Right); // inquiryType -> new
        press(app, KeyCode::Tab);
        type_text(app, "Civic"); // carModel
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right);
        press(app, KeyCode::Right); // budget -> 5-10L
        press(app, KeyCode::Tab);
        type_text(app, "A User"); // fullName
        press(app, KeyCode::Tab);
        type_text(app, "City"); // location
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right);
        press(app, KeyCode::Right); // contactMethod -> phone
        press(app, KeyCode::Tab);
        type_text(app, "9876543210"); // phone, now visible
        press(app, KeyCode::Tab);
        let today = validation::today().format("%Y-%m-%d").to_string();
        type_text(app, &today); // preferredDate
    }

    fn recording_app() -> (App, Rc<RefCell<Vec<FormValues>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let app = App::with_submit_handler(Box::new(move |values| {
            sink.borrow_mut().push(values.clone());
        }));
        (app, seen)
    }

    #[test]
    fn test_typing_routes_to_active_field() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab); // carModel
        type_text(&mut app, "Swift");
        assert_eq!(app.form.values().car_model, "Swift");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.values().car_model, "Swif");
    }

    #[test]
    fn test_modified_chars_do_not_insert_text() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab); // carModel
        type_text(&mut app, "Civic");
        // Ctrl/Alt chords are shortcuts (or nothing), never input.
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL))
            .unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT))
            .unwrap();
        assert_eq!(app.form.values().car_model, "Civic");
        // Shift is normal typing.
        app.handle_key(KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT))
            .unwrap();
        assert_eq!(app.form.values().car_model, "CivicX");
    }

    #[test]
    fn test_tab_blurs_and_reveals_error() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab); // leave inquiryType untouched-empty
        assert_eq!(
            app.form.visible_error(FieldId::InquiryType),
            Some("Inquiry type is required")
        );
    }

    #[test]
    fn test_space_and_arrows_cycle_radio() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.form.values().inquiry_type, "new");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.form.values().inquiry_type, "used");
        press(&mut app, KeyCode::Left);
        assert_eq!(app.form.values().inquiry_type, "new");
    }

    #[test]
    fn test_full_key_driven_submit() {
        let (mut app, seen) = recording_app();
        fill_form_via_keys(&mut app);
        assert!(app.form.is_valid());

        press_ctrl(&mut app, 's');

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].inquiry_type, "new");
        assert_eq!(seen[0].phone, "9876543210");
        // Reset after success
        assert_eq!(app.form.values(), &FormValues::default());
        assert_eq!(app.status_message.as_deref(), Some("Inquiry submitted!"));
    }

    #[test]
    fn test_invalid_submit_reports_and_keeps_values() {
        let (mut app, seen) = recording_app();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Civic");

        press_ctrl(&mut app, 's');

        assert!(seen.borrow().is_empty());
        assert_eq!(app.form.values().car_model, "Civic");
        let message = app.status_message.clone().unwrap();
        assert!(message.starts_with("Please fix"), "{message:?}");
    }

    #[test]
    fn test_submit_button_via_enter() {
        let (mut app, seen) = recording_app();
        fill_form_via_keys(&mut app);
        // Tab to the buttons row (from preferredDate past time, message,
        // referral).
        for _ in 0..4 {
            press(&mut app, KeyCode::Tab);
        }
        assert!(app.form.is_buttons_row_active());
        press(&mut app, KeyCode::Enter);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_reset_button_clears_form() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Civic");
        // Jump back to the buttons row and pick Reset.
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert!(app.form.is_buttons_row_active());
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.values().car_model, "");
        assert_eq!(app.status_message.as_deref(), Some("Form cleared"));
    }

    #[test]
    fn test_enter_inserts_newline_in_message() {
        let mut app = App::new();
        // Message is the 9th visible field with no contact method chosen.
        for _ in 0..8 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.form.active_field(), Some(FieldId::Message));
        type_text(&mut app, "Hi");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "there");
        assert_eq!(app.form.values().message, "Hi\nthere");
    }

    #[test]
    fn test_esc_quits() {
        let mut app = App::new();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }
}
