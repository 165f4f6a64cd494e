//! Declarative validation rules for the inquiry form
//!
//! One pure function over the full values map. Conditional rules (email and
//! phone gated by the contact method) read the sibling field's value
//! directly, never its error state, so fields stay independent of each
//! other. At most one message is produced per field.

use crate::state::{FieldId, FormValues};
use chrono::{Local, NaiveDate};
use std::collections::HashMap;

/// Field id to message; a field absent from the map is valid
pub type FieldErrors = HashMap<FieldId, String>;

const CAR_MODEL_MAX: usize = 20;
const FULL_NAME_MAX: usize = 50;
const MESSAGE_MAX: usize = 500;
const PHONE_DIGITS: usize = 10;

/// Today according to the user's wall clock. The not-in-the-past rule uses
/// the local date, not UTC, so "today" stays accepted right up to local
/// midnight.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Evaluate the full rule set against `values`.
///
/// Pure and deterministic given `values` and `today`; the store passes
/// [`today()`], tests pass fixed dates.
pub fn validate(values: &FormValues, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut fail = |field: FieldId, message: &str| {
        errors.entry(field).or_insert_with(|| message.to_string());
    };

    if values.inquiry_type.is_empty() {
        fail(FieldId::InquiryType, "Inquiry type is required");
    }

    if values.car_model.is_empty() {
        fail(FieldId::CarModel, "Car model is required");
    } else if values.car_model.chars().count() > CAR_MODEL_MAX {
        fail(FieldId::CarModel, "Max length is 20 characters");
    }

    if values.budget.is_empty() {
        fail(FieldId::Budget, "Choose your budget");
    }

    if values.full_name.is_empty() {
        fail(FieldId::FullName, "Full name is required");
    } else if values.full_name.chars().count() > FULL_NAME_MAX {
        fail(FieldId::FullName, "Name too long");
    }

    if values.location.is_empty() {
        fail(FieldId::Location, "Location is required");
    }

    if values.contact_method.is_empty() {
        fail(FieldId::ContactMethod, "Select contact method");
    }

    // Required only while the matching contact method is selected; otherwise
    // the field is unconstrained whatever it holds.
    if values.wants_email() {
        if values.email.is_empty() {
            fail(FieldId::Email, "Email is required");
        } else if !is_valid_email(&values.email) {
            fail(FieldId::Email, "Invalid email address");
        }
    }

    if values.wants_phone() {
        if values.phone.is_empty() {
            fail(FieldId::Phone, "Phone number is required");
        } else if !is_ten_digits(&values.phone) {
            fail(FieldId::Phone, "Enter a valid 10-digit phone number");
        }
    }

    if values.preferred_date.is_empty() {
        fail(FieldId::PreferredDate, "Select a preferred contact date");
    } else {
        match parse_iso_date(&values.preferred_date) {
            Some(date) if date < today => {
                fail(FieldId::PreferredDate, "Date cannot be in the past");
            }
            Some(_) => {}
            None => fail(FieldId::PreferredDate, "Enter a valid date (YYYY-MM-DD)"),
        }
    }

    if values.message.chars().count() > MESSAGE_MAX {
        fail(FieldId::Message, "Message too long");
    }

    errors
}

/// Minimal structural email check: one `@`, non-empty local part, domain
/// with an interior dot, no whitespace.
fn is_valid_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn is_ten_digits(text: &str) -> bool {
    text.len() == PHONE_DIGITS && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a canonical `YYYY-MM-DD` string. chrono's `%m`/`%d` also accept
/// single-digit parts, so the ten-character shape is checked first.
fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    if text.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}
