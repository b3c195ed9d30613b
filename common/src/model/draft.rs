//! In-memory state of a single form fill-out.
//!
//! The draft lives only for the duration of the page session. It is owned and
//! mutated exclusively by the form component; nothing is persisted client-side.

use crate::model::field::FieldId;

/// Not-yet-sent form values. `upload` holds the file input's string value
/// (the browser fakepath); the binary file itself is kept separately by the
/// form component and only exists long enough to be encoded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionDraft {
    pub email: String,
    pub name: String,
    pub tel: String,
    pub experience: String,
    pub upload: String,
}

impl SubmissionDraft {
    /// Current value of a field by identifier.
    pub fn field(&self, id: FieldId) -> &str {
        match id {
            FieldId::Email => &self.email,
            FieldId::Name => &self.name,
            FieldId::Tel => &self.tel,
            FieldId::Experience => &self.experience,
            FieldId::Upload => &self.upload,
        }
    }

    pub fn set_field(&mut self, id: FieldId, value: String) {
        match id {
            FieldId::Email => self.email = value,
            FieldId::Name => self.name = value,
            FieldId::Tel => self.tel = value,
            FieldId::Experience => self.experience = value,
            FieldId::Upload => self.upload = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_accessors_round_trip() {
        let mut draft = SubmissionDraft::default();
        for id in FieldId::ALL {
            assert_eq!(draft.field(id), "");
            draft.set_field(id, format!("value-{}", id.name()));
        }
        assert_eq!(draft.email, "value-email");
        assert_eq!(draft.upload, "value-upload");
        assert_eq!(draft.field(FieldId::Tel), "value-tel");
    }
}
