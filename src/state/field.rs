//! Inquiry form field definitions

/// One selectable option for a radio or select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Stored value (what ends up in the submission payload)
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
}

/// Inquiry type options
pub const INQUIRY_TYPES: &[Choice] = &[
    Choice { value: "new", label: "New" },
    Choice { value: "used", label: "Used" },
];

/// Budget range options
pub const BUDGET_RANGES: &[Choice] = &[
    Choice { value: "<5L", label: "Below ₹5L" },
    Choice { value: "5-10L", label: "₹5L–₹10L" },
    Choice { value: "10-20L", label: "₹10L–₹20L" },
    Choice { value: ">20L", label: "Above ₹20L" },
];

/// Contact method options
pub const CONTACT_METHODS: &[Choice] = &[
    Choice { value: "email", label: "Email" },
    Choice { value: "phone", label: "Phone" },
];

/// Referral source options
pub const REFERRAL_SOURCES: &[Choice] = &[
    Choice { value: "website", label: "Website" },
    Choice { value: "friend", label: "Friend" },
    Choice { value: "social", label: "Social Media" },
    Choice { value: "other", label: "Other" },
];

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, single or multi line
    Text { multiline: bool },
    /// Inline radio group, all options visible
    Radio(&'static [Choice]),
    /// Cycling select, one option (or none) shown
    Select(&'static [Choice]),
    /// ISO date text (YYYY-MM-DD)
    Date,
    /// Time-of-day text (HH:MM)
    Time,
}

impl FieldKind {
    /// Options for radio/select fields, None for everything else
    pub fn choices(self) -> Option<&'static [Choice]> {
        match self {
            FieldKind::Radio(options) | FieldKind::Select(options) => Some(options),
            _ => None,
        }
    }
}

/// Identifies one of the twelve inquiry form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    InquiryType,
    CarModel,
    Budget,
    FullName,
    Location,
    ContactMethod,
    Email,
    Phone,
    PreferredDate,
    PreferredTime,
    Message,
    ReferralSource,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 12] = [
        FieldId::InquiryType,
        FieldId::CarModel,
        FieldId::Budget,
        FieldId::FullName,
        FieldId::Location,
        FieldId::ContactMethod,
        FieldId::Email,
        FieldId::Phone,
        FieldId::PreferredDate,
        FieldId::PreferredTime,
        FieldId::Message,
        FieldId::ReferralSource,
    ];

    /// Wire name used in the submission payload
    pub fn name(self) -> &'static str {
        match self {
            FieldId::InquiryType => "inquiryType",
            FieldId::CarModel => "carModel",
            FieldId::Budget => "budget",
            FieldId::FullName => "fullName",
            FieldId::Location => "location",
            FieldId::ContactMethod => "contactMethod",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::PreferredDate => "preferredDate",
            FieldId::PreferredTime => "preferredTime",
            FieldId::Message => "message",
            FieldId::ReferralSource => "referralSource",
        }
    }

    /// Display label (required fields carry a trailing asterisk)
    pub fn label(self) -> &'static str {
        match self {
            FieldId::InquiryType => "Inquiry Type *",
            FieldId::CarModel => "Car Make & Model *",
            FieldId::Budget => "Budget Range *",
            FieldId::FullName => "Full Name *",
            FieldId::Location => "Location *",
            FieldId::ContactMethod => "Preferred Contact Method *",
            FieldId::Email => "Email Address *",
            FieldId::Phone => "Phone Number *",
            FieldId::PreferredDate => "Preferred Contact Date *",
            FieldId::PreferredTime => "Preferred Contact Time",
            FieldId::Message => "Message or Questions",
            FieldId::ReferralSource => "How did you hear about us?",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::InquiryType => FieldKind::Radio(INQUIRY_TYPES),
            FieldId::CarModel => FieldKind::Text { multiline: false },
            FieldId::Budget => FieldKind::Select(BUDGET_RANGES),
            FieldId::FullName => FieldKind::Text { multiline: false },
            FieldId::Location => FieldKind::Text { multiline: false },
            FieldId::ContactMethod => FieldKind::Radio(CONTACT_METHODS),
            FieldId::Email => FieldKind::Text { multiline: false },
            FieldId::Phone => FieldKind::Text { multiline: false },
            FieldId::PreferredDate => FieldKind::Date,
            FieldId::PreferredTime => FieldKind::Time,
            FieldId::Message => FieldKind::Text { multiline: true },
            FieldId::ReferralSource => FieldKind::Select(REFERRAL_SOURCES),
        }
    }
}
