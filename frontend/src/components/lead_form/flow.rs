//! Pure submission flow for the lead-capture form.
//!
//! `FormFlow` holds everything about a fill-out that does not touch the
//! browser: the draft, inline errors, the submission banner, and the
//! pending/loading flags. `step` consumes one `FlowEvent` and returns the
//! side effects the component shell must perform, in order. Keeping the
//! transitions free of DOM and timer types makes the whole pipeline —
//! validation gating, single encode, deferred indicator, draft retention and
//! reset — testable on the host; the shell in `update.rs` only translates
//! messages and carries effects out.

use common::model::draft::SubmissionDraft;
use common::model::field::FieldId;
use common::model::submission::SubmissionPayload;
use common::validation::{validate, ValidationErrors};

use super::encoder::EncodingError;

/// One input to the flow. Mirrors the component messages minus browser types.
pub enum FlowEvent {
    /// Live edit of a text field.
    EditField(FieldId, String),
    /// The file picker changed: the input's string value, and whether a file
    /// is now attached.
    UploadChanged { value: String, attached: bool },
    /// Explicit user submit action.
    Submit,
    /// The file encode finished.
    UploadEncoded(Result<String, EncodingError>),
    /// The loading delay elapsed with the request still pending.
    LoadingDelayElapsed,
    /// Server accepted the submission.
    Succeeded,
    /// Encoding, application or transport failure, with the user-facing message.
    Failed(String),
}

/// A side effect the shell has to carry out after a transition.
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Encode the attached file; feeds back `UploadEncoded`.
    EncodeUpload,
    /// Arm the deferred loading-indicator timer; feeds back
    /// `LoadingDelayElapsed` unless cancelled first.
    ArmLoadingTimer,
    /// Cancel the timer if one is still pending.
    CancelLoadingTimer,
    /// POST the assembled payload; feeds back `Succeeded` or `Failed`.
    SendPayload(SubmissionPayload),
    ShowSuccessToast,
    /// Clear the file input's DOM value after a reset.
    ClearFileInput,
}

/// Pure state of the fill-out.
pub struct FormFlow {
    /// The in-memory draft; owned and mutated only through `step`.
    pub draft: SubmissionDraft,
    pub field_errors: ValidationErrors,
    /// Submission-level error banner (encoding, application or transport).
    pub submit_error: Option<String>,
    /// Re-entrancy guard: true from submit until the pipeline resolves.
    pub submitting: bool,
    /// Whether the deferred loading indicator is visible.
    pub show_loading: bool,
    /// Whether a file is currently attached.
    pub file_attached: bool,
}

impl FormFlow {
    pub fn new() -> Self {
        Self {
            draft: SubmissionDraft::default(),
            field_errors: ValidationErrors::default(),
            submit_error: None,
            submitting: false,
            show_loading: false,
            file_attached: false,
        }
    }

    /// Applies one event and returns the effects to perform, in order.
    pub fn step(&mut self, form_id: &str, event: FlowEvent) -> Vec<Effect> {
        match event {
            FlowEvent::EditField(field, value) => {
                self.draft.set_field(field, value);
                self.field_errors.remove(field);
                vec![]
            }
            FlowEvent::UploadChanged { value, attached } => {
                self.draft.set_field(FieldId::Upload, value);
                self.file_attached = attached;
                vec![]
            }
            FlowEvent::Submit => {
                // The pipeline is not re-entrant while a submission is pending.
                if self.submitting {
                    return vec![];
                }

                let errors = validate(&self.draft);
                if !errors.is_empty() {
                    self.field_errors = errors;
                    return vec![];
                }

                self.field_errors = ValidationErrors::default();
                self.submit_error = None;
                self.submitting = true;

                if self.file_attached {
                    vec![Effect::EncodeUpload]
                } else {
                    self.dispatch(form_id, None)
                }
            }
            FlowEvent::UploadEncoded(Ok(data_uri)) => self.dispatch(form_id, Some(data_uri)),
            FlowEvent::UploadEncoded(Err(_)) => {
                // Abort before any network traffic; the draft stays intact
                // for retry.
                self.submitting = false;
                self.submit_error = Some("File upload failed.".to_string());
                vec![]
            }
            FlowEvent::LoadingDelayElapsed => {
                if self.submitting {
                    self.show_loading = true;
                }
                vec![]
            }
            FlowEvent::Failed(message) => {
                self.submitting = false;
                self.show_loading = false;
                self.submit_error = Some(message);
                vec![Effect::CancelLoadingTimer]
            }
            FlowEvent::Succeeded => {
                self.submitting = false;
                self.show_loading = false;
                self.draft = SubmissionDraft::default();
                self.field_errors = ValidationErrors::default();
                self.file_attached = false;
                vec![
                    Effect::CancelLoadingTimer,
                    Effect::ShowSuccessToast,
                    Effect::ClearFileInput,
                ]
            }
        }
    }

    fn dispatch(&mut self, form_id: &str, upload: Option<String>) -> Vec<Effect> {
        let payload = SubmissionPayload::from_draft(form_id, &self.draft, upload);
        vec![Effect::ArmLoadingTimer, Effect::SendPayload(payload)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::submission::FORM_ID;

    fn filled_flow() -> FormFlow {
        let mut flow = FormFlow::new();
        flow.draft = SubmissionDraft {
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            tel: "+2340000000000".to_string(),
            experience: "Great".to_string(),
            upload: String::new(),
        };
        flow
    }

    fn attach_file(flow: &mut FormFlow) {
        let effects = flow.step(
            FORM_ID,
            FlowEvent::UploadChanged {
                value: "C:\\fakepath\\pic.png".to_string(),
                attached: true,
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn invalid_draft_never_reaches_the_network() {
        let mut flow = FormFlow::new();
        let effects = flow.step(FORM_ID, FlowEvent::Submit);

        assert!(effects.is_empty());
        assert_eq!(flow.field_errors.len(), 4);
        assert!(!flow.submitting);
    }

    #[test]
    fn submit_without_file_skips_the_encoder() {
        let mut flow = filled_flow();
        let effects = flow.step(FORM_ID, FlowEvent::Submit);

        let expected = SubmissionPayload::from_draft(FORM_ID, &flow.draft, None);
        assert_eq!(
            effects,
            vec![Effect::ArmLoadingTimer, Effect::SendPayload(expected)]
        );
        assert!(flow.submitting);
    }

    #[test]
    fn attached_file_is_encoded_exactly_once_before_sending() {
        let mut flow = filled_flow();
        attach_file(&mut flow);

        let effects = flow.step(FORM_ID, FlowEvent::Submit);
        assert_eq!(effects, vec![Effect::EncodeUpload]);

        let uri = "data:image/png;base64,aGVsbG8=".to_string();
        let effects = flow.step(FORM_ID, FlowEvent::UploadEncoded(Ok(uri.clone())));

        let expected = SubmissionPayload::from_draft(FORM_ID, &flow.draft, Some(uri));
        assert_eq!(
            effects,
            vec![Effect::ArmLoadingTimer, Effect::SendPayload(expected)]
        );
    }

    #[test]
    fn encoder_failure_aborts_without_a_request_and_keeps_the_draft() {
        let mut flow = filled_flow();
        attach_file(&mut flow);
        let draft_before = flow.draft.clone();

        flow.step(FORM_ID, FlowEvent::Submit);
        let effects = flow.step(FORM_ID, FlowEvent::UploadEncoded(Err(EncodingError::Empty)));

        assert!(effects.is_empty());
        assert_eq!(flow.submit_error.as_deref(), Some("File upload failed."));
        assert_eq!(flow.draft, draft_before);
        assert!(!flow.submitting);

        // Retry re-runs the full pipeline.
        let effects = flow.step(FORM_ID, FlowEvent::Submit);
        assert_eq!(effects, vec![Effect::EncodeUpload]);
    }

    #[test]
    fn fast_response_never_shows_the_loading_indicator() {
        let mut flow = filled_flow();
        flow.step(FORM_ID, FlowEvent::Submit);

        // The response lands before the delay elapses.
        let effects = flow.step(FORM_ID, FlowEvent::Succeeded);
        assert!(effects.contains(&Effect::CancelLoadingTimer));
        assert!(!flow.show_loading);

        // Even a stray late tick changes nothing once the pipeline resolved.
        flow.step(FORM_ID, FlowEvent::LoadingDelayElapsed);
        assert!(!flow.show_loading);
    }

    #[test]
    fn slow_response_shows_the_indicator_until_resolution() {
        let mut flow = filled_flow();
        flow.step(FORM_ID, FlowEvent::Submit);

        flow.step(FORM_ID, FlowEvent::LoadingDelayElapsed);
        assert!(flow.show_loading);

        let effects = flow.step(FORM_ID, FlowEvent::Failed("Invalid phone".to_string()));
        assert!(effects.contains(&Effect::CancelLoadingTimer));
        assert!(!flow.show_loading);
    }

    #[test]
    fn server_error_surfaces_message_and_keeps_the_draft() {
        let mut flow = filled_flow();
        let draft_before = flow.draft.clone();
        flow.step(FORM_ID, FlowEvent::Submit);

        let effects = flow.step(FORM_ID, FlowEvent::Failed("Invalid phone".to_string()));

        assert_eq!(effects, vec![Effect::CancelLoadingTimer]);
        assert_eq!(flow.submit_error.as_deref(), Some("Invalid phone"));
        assert_eq!(flow.draft, draft_before);
        assert!(!flow.submitting);
    }

    #[test]
    fn success_resets_the_draft_and_clears_the_file() {
        let mut flow = filled_flow();
        attach_file(&mut flow);
        flow.step(FORM_ID, FlowEvent::Submit);
        flow.step(
            FORM_ID,
            FlowEvent::UploadEncoded(Ok("data:image/png;base64,YWJj".to_string())),
        );

        let effects = flow.step(FORM_ID, FlowEvent::Succeeded);

        assert_eq!(
            effects,
            vec![
                Effect::CancelLoadingTimer,
                Effect::ShowSuccessToast,
                Effect::ClearFileInput,
            ]
        );
        assert_eq!(flow.draft, SubmissionDraft::default());
        assert!(!flow.file_attached);
        assert!(flow.submit_error.is_none());
    }

    #[test]
    fn submit_is_not_reentrant_while_pending() {
        let mut flow = filled_flow();
        let first = flow.step(FORM_ID, FlowEvent::Submit);
        assert_eq!(first.len(), 2);

        let second = flow.step(FORM_ID, FlowEvent::Submit);
        assert!(second.is_empty());
    }

    #[test]
    fn editing_a_field_clears_its_inline_error() {
        let mut flow = FormFlow::new();
        flow.step(FORM_ID, FlowEvent::Submit);
        assert!(flow.field_errors.get(FieldId::Name).is_some());

        flow.step(
            FORM_ID,
            FlowEvent::EditField(FieldId::Name, "Ada".to_string()),
        );
        assert!(flow.field_errors.get(FieldId::Name).is_none());
        assert_eq!(flow.field_errors.len(), 3);
    }
}
