//! Form state store: values, touched set, errors, focus
//!
//! Holds one form instance's mutable state and enforces the store contract:
//! every value change re-runs the full rule set, errors are recomputed (not
//! patched), and the touched set only grows until reset.

use super::field::{FieldId, FieldKind};
use super::values::FormValues;
use crate::validation::{self, validate, FieldErrors};
use std::collections::HashSet;

/// Index of the Submit button on the buttons row
pub const SUBMIT_BUTTON: usize = 0;
/// Index of the Reset button on the buttons row
pub const RESET_BUTTON: usize = 1;

const BUTTON_COUNT: usize = 2;

/// Single inquiry form instance; lifecycle bounded by the screen showing it
#[derive(Debug, Clone)]
pub struct InquiryForm {
    values: FormValues,
    touched: HashSet<FieldId>,
    errors: FieldErrors,
    /// Index into `visible_fields()`, or one past the end for the buttons row
    active_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: usize,
}

impl InquiryForm {
    pub fn new() -> Self {
        let values = FormValues::default();
        let errors = validate(&values, validation::today());
        Self {
            values,
            touched: HashSet::new(),
            errors,
            active_index: 0,
            selected_button: SUBMIT_BUTTON,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    /// Error message to actually display: present only when the field is
    /// both invalid and touched
    pub fn visible_error(&self, field: FieldId) -> Option<&str> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Set a field's value and re-run the full rule set
    pub fn set_field_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.set(field, value);
        self.revalidate();
    }

    /// Mark a field as interacted-with (blur); errors on it become visible
    pub fn set_field_touched(&mut self, field: FieldId) {
        self.touched.insert(field);
    }

    /// Restore the initial state: all values empty, nothing touched
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.touched.clear();
        self.active_index = 0;
        self.selected_button = SUBMIT_BUTTON;
        self.revalidate();
    }

    /// Full re-validation, then either hand the values to `on_valid` and
    /// reset, or surface every error by touching its field.
    ///
    /// Returns whether the callback fired.
    pub fn submit<F: FnOnce(&FormValues)>(&mut self, on_valid: F) -> bool {
        self.revalidate();
        if self.errors.is_empty() {
            on_valid(&self.values);
            self.reset();
            true
        } else {
            let erroneous: Vec<FieldId> = self.errors.keys().copied().collect();
            self.touched.extend(erroneous);
            false
        }
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.values, validation::today());
    }

    // Focus handling. The buttons row sits one past the last visible field,
    // so Tab wraps fields -> buttons -> fields.

    pub fn visible_fields(&self) -> Vec<FieldId> {
        self.values.visible_fields()
    }

    fn field_count(&self) -> usize {
        self.visible_fields().len() + 1
    }

    /// Currently focused field, or None on the buttons row
    pub fn active_field(&self) -> Option<FieldId> {
        self.visible_fields().get(self.active_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_index >= self.visible_fields().len()
    }

    /// Advance focus, marking the field being left as touched
    pub fn next_field(&mut self) {
        self.blur_active();
        self.active_index = (self.active_index + 1) % self.field_count();
    }

    /// Move focus backwards, marking the field being left as touched
    pub fn prev_field(&mut self) {
        self.blur_active();
        let count = self.field_count();
        self.active_index = (self.active_index + count - 1) % count;
    }

    fn blur_active(&mut self) {
        if let Some(field) = self.active_field() {
            self.set_field_touched(field);
        }
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    pub fn prev_button(&mut self) {
        self.selected_button = (self.selected_button + BUTTON_COUNT - 1) % BUTTON_COUNT;
    }

    // Editing operations routed to the active field

    /// Append a character to the active text-like field
    pub fn push_char(&mut self, c: char) {
        let Some(field) = self.active_field() else {
            return;
        };
        if field.kind().choices().is_some() {
            return;
        }
        let mut value = self.values.get(field).to_string();
        value.push(c);
        self.set_field_value(field, value);
    }

    /// Remove the last character from the active text-like field
    pub fn pop_char(&mut self) {
        let Some(field) = self.active_field() else {
            return;
        };
        if field.kind().choices().is_some() {
            return;
        }
        let mut value = self.values.get(field).to_string();
        value.pop();
        self.set_field_value(field, value);
    }

    /// Cycle the active radio/select field through its options.
    ///
    /// Selects cycle through an extra unselected slot; radios never return
    /// to unselected once set, matching how radio groups behave.
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.active_field() else {
            return;
        };
        let Some(options) = field.kind().choices() else {
            return;
        };
        let with_empty = matches!(field.kind(), FieldKind::Select(_));
        let current = self.values.get(field);
        let position = options.iter().position(|choice| choice.value == current);

        let next = match (position, forward, with_empty) {
            // Nothing selected yet: land on the first or last option.
            (None, true, _) => Some(options[0].value),
            (None, false, _) => Some(options[options.len() - 1].value),
            (Some(i), true, _) if i + 1 < options.len() => Some(options[i + 1].value),
            (Some(_), true, true) => None,
            (Some(_), true, false) => Some(options[0].value),
            (Some(0), false, true) => None,
            (Some(0), false, false) => Some(options[options.len() - 1].value),
            (Some(i), false, _) => Some(options[i - 1].value),
        };
        self.set_field_value(field, next.unwrap_or(""));
    }
}

impl Default for InquiryForm {
    fn default() -> Self {
        Self::new()
    }
}
