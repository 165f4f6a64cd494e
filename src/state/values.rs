//! Form values and conditional field visibility

use super::field::FieldId;
use serde::Serialize;

/// Current value of every form field, all empty at mount.
///
/// Serializes with the camelCase names the submission payload expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub inquiry_type: String,
    pub car_model: String,
    pub budget: String,
    pub full_name: String,
    pub location: String,
    pub contact_method: String,
    pub email: String,
    pub phone: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub message: String,
    pub referral_source: String,
}

impl FormValues {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::InquiryType => &self.inquiry_type,
            FieldId::CarModel => &self.car_model,
            FieldId::Budget => &self.budget,
            FieldId::FullName => &self.full_name,
            FieldId::Location => &self.location,
            FieldId::ContactMethod => &self.contact_method,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::PreferredDate => &self.preferred_date,
            FieldId::PreferredTime => &self.preferred_time,
            FieldId::Message => &self.message,
            FieldId::ReferralSource => &self.referral_source,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::InquiryType => &mut self.inquiry_type,
            FieldId::CarModel => &mut self.car_model,
            FieldId::Budget => &mut self.budget,
            FieldId::FullName => &mut self.full_name,
            FieldId::Location => &mut self.location,
            FieldId::ContactMethod => &mut self.contact_method,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::PreferredDate => &mut self.preferred_date,
            FieldId::PreferredTime => &mut self.preferred_time,
            FieldId::Message => &mut self.message,
            FieldId::ReferralSource => &mut self.referral_source,
        };
        *slot = value.into();
    }

    /// True when the contact method selects email
    pub fn wants_email(&self) -> bool {
        self.contact_method == "email"
    }

    /// True when the contact method selects phone
    pub fn wants_phone(&self) -> bool {
        self.contact_method == "phone"
    }

    /// Conditional visibility: the email block shows only for the email
    /// contact method, the phone block only for phone. Everything else is
    /// always visible.
    pub fn is_visible(&self, field: FieldId) -> bool {
        match field {
            FieldId::Email => self.wants_email(),
            FieldId::Phone => self.wants_phone(),
            _ => true,
        }
    }

    /// Fields currently visible, in display order
    pub fn visible_fields(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|&field| self.is_visible(field))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_all_empty() {
        let values = FormValues::default();
        for field in FieldId::ALL {
            assert_eq!(values.get(field), "", "{field:?} should start empty");
        }
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut values = FormValues::default();
        values.set(FieldId::CarModel, "Civic");
        assert_eq!(values.get(FieldId::CarModel), "Civic");
        assert_eq!(values.car_model, "Civic");
    }

    #[test]
    fn test_neither_contact_field_visible_by_default() {
        let values = FormValues::default();
        assert!(!values.is_visible(FieldId::Email));
        assert!(!values.is_visible(FieldId::Phone));
        assert_eq!(values.visible_fields().len(), 10);
    }

    #[test]
    fn test_email_visible_only_for_email_method() {
        let mut values = FormValues::default();
        values.set(FieldId::ContactMethod, "email");
        assert!(values.is_visible(FieldId::Email));
        assert!(!values.is_visible(FieldId::Phone));

        values.set(FieldId::ContactMethod, "phone");
        assert!(!values.is_visible(FieldId::Email));
        assert!(values.is_visible(FieldId::Phone));
    }

    #[test]
    fn test_visibility_is_case_sensitive() {
        // Wire values are lowercase; anything else selects nothing.
        let mut values = FormValues::default();
        values.set(FieldId::ContactMethod, "Email");
        assert!(!values.is_visible(FieldId::Email));
    }

    #[test]
    fn test_serializes_with_camel_case_names() {
        let mut values = FormValues::default();
        values.set(FieldId::FullName, "A User");
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["fullName"], "A User");
        assert_eq!(json["preferredDate"], "");
        assert!(json.get("full_name").is_none());
    }
}
