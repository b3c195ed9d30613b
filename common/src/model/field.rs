//! Field identifiers for the lead-capture form.
//!
//! Every form field is addressed through `FieldId` rather than loose strings:
//! the draft, the validation schema, the payload assembly and the view all key
//! off the same enum, so adding or reordering a field happens in one place.

/// Identifier of a single form field.
///
/// `ALL` fixes the submission order of the payload entries; the CMS expects
/// the same order the original form schema declares (email first). The wire
/// name of a field goes through `name()`; the enum itself never travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Email,
    Name,
    Tel,
    Experience,
    Upload,
}

impl FieldId {
    /// All fields in wire order.
    pub const ALL: [FieldId; 5] = [
        FieldId::Email,
        FieldId::Name,
        FieldId::Tel,
        FieldId::Experience,
        FieldId::Upload,
    ];

    /// Wire name used as the `field` key of a submission entry.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::Name => "name",
            FieldId::Tel => "tel",
            FieldId::Experience => "experience",
            FieldId::Upload => "upload",
        }
    }

    /// Label shown next to the widget.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Email => "Email address",
            FieldId::Name => "Full name",
            FieldId::Tel => "Phone",
            FieldId::Experience => "How was your experience",
            FieldId::Upload => "Upload a picture ( this is not compulsory)",
        }
    }

    /// Inline message when a required field is missing or malformed.
    /// `None` for optional fields.
    pub fn required_message(self) -> Option<&'static str> {
        match self {
            FieldId::Email => Some("Your email is required."),
            FieldId::Name => Some("Your name is required."),
            FieldId::Tel => Some("Your phone number is required."),
            FieldId::Experience => Some("Field is required."),
            FieldId::Upload => None,
        }
    }

    pub fn is_required(self) -> bool {
        self.required_message().is_some()
    }
}
