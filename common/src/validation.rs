//! Validation schema for the submission draft.
//!
//! Pure functions over `SubmissionDraft`: malformed input is the expected
//! failure mode and is reported as field-level messages, never as a panic.
//! The upload field is deliberately unconstrained here; the file picker's
//! `accept` filter is the only gate on it.

use std::collections::BTreeMap;

use regex::Regex;

use crate::model::draft::SubmissionDraft;
use crate::model::field::FieldId;

/// Field-level validation messages, ordered by field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldId, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Checks a draft against the schema.
///
/// Every required field must be non-empty; the email must additionally match
/// the email grammar. Returns an empty set when the draft may be submitted.
pub fn validate(draft: &SubmissionDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for id in FieldId::ALL {
        let Some(message) = id.required_message() else {
            continue;
        };

        let value = draft.field(id);
        let ok = match id {
            FieldId::Email => is_valid_email(value),
            _ => !value.is_empty(),
        };

        if !ok {
            errors.insert(id, message);
        }
    }

    errors
}

/// Accepts `local@domain.tld` shapes without whitespace. Close enough to the
/// grammar the endpoint itself enforces; the server remains the authority.
pub fn is_valid_email(value: &str) -> bool {
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    re.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> SubmissionDraft {
        SubmissionDraft {
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            tel: "+2340000000000".to_string(),
            experience: "Great".to_string(),
            upload: String::new(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn each_missing_required_field_is_reported_exactly_once() {
        let cases = [
            (FieldId::Email, "Your email is required."),
            (FieldId::Name, "Your name is required."),
            (FieldId::Tel, "Your phone number is required."),
            (FieldId::Experience, "Field is required."),
        ];

        for (field, message) in cases {
            let mut draft = valid_draft();
            draft.set_field(field, String::new());

            let errors = validate(&draft);
            assert_eq!(errors.len(), 1, "field {:?}", field);
            assert_eq!(errors.get(field), Some(message));
        }
    }

    #[test]
    fn malformed_email_reported_with_same_message() {
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();

        let errors = validate(&draft);
        assert_eq!(errors.get(FieldId::Email), Some("Your email is required."));
    }

    #[test]
    fn empty_draft_reports_all_required_fields() {
        let errors = validate(&SubmissionDraft::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(FieldId::Upload), None);
    }

    #[test]
    fn missing_upload_is_not_an_error() {
        let mut draft = valid_draft();
        draft.upload = String::new();
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn email_grammar() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("@example.com"));
    }
}
