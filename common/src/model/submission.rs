//! Wire format of a form submission.
//!
//! The CMS form-submissions endpoint expects
//! `{ "form": <id>, "submissionData": [ { "field": <name>, "value": <value> }, ... ] }`.
//! An entry whose value is `None` serializes without a `value` key at all,
//! matching how `JSON.stringify` drops `undefined` object members. Error
//! responses optionally carry `{ "errors": [ { "message": <string> }, ... ] }`.

use serde::{Deserialize, Serialize};

use crate::model::draft::SubmissionDraft;
use crate::model::field::FieldId;

/// Identifier of the CMS form the submissions are filed under.
pub const FORM_ID: &str = "679e61e98cbf538dd1ded437";

/// One `(field, value)` pair of the flattened submission.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SubmissionEntry {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Complete request body for the submission endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SubmissionPayload {
    pub form: String,
    #[serde(rename = "submissionData")]
    pub submission_data: Vec<SubmissionEntry>,
}

impl SubmissionPayload {
    /// Flattens a draft into wire entries, in `FieldId::ALL` order.
    ///
    /// The upload entry carries the encoded data URI when a file was attached,
    /// otherwise no value. The draft itself is not consumed; it stays around
    /// for correction if the request fails.
    pub fn from_draft(form_id: &str, draft: &SubmissionDraft, upload: Option<String>) -> Self {
        let submission_data = FieldId::ALL
            .iter()
            .map(|&id| SubmissionEntry {
                field: id.name().to_string(),
                value: match id {
                    FieldId::Upload => upload.clone(),
                    _ => Some(draft.field(id).to_string()),
                },
            })
            .collect();

        Self {
            form: form_id.to_string(),
            submission_data,
        }
    }
}

/// Structured error body the endpoint may return on a 4xx/5xx status.
#[derive(Deserialize, Debug, Default)]
pub struct SubmissionErrorBody {
    #[serde(default)]
    pub errors: Option<Vec<SubmissionErrorDetail>>,
}

#[derive(Deserialize, Debug)]
pub struct SubmissionErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmissionErrorBody {
    /// First structured message, if the body carried any.
    pub fn first_message(&self) -> Option<&str> {
        self.errors.as_ref()?.first()?.message.as_deref()
    }
}
