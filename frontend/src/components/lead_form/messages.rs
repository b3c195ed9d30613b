use common::model::field::FieldId;

use super::encoder::EncodingError;

pub enum Msg {
    /// Live edit of a text field.
    UpdateField(FieldId, String),
    /// The file picker changed: the input's string value plus the file, if any.
    UploadChanged {
        value: String,
        file: Option<web_sys::File>,
    },
    /// Explicit user submit action.
    Submit,
    /// The file encode finished.
    UploadEncoded(Result<String, EncodingError>),
    /// The 1-second loading delay elapsed with the request still pending.
    LoadingDelayElapsed,
    /// Server accepted the submission.
    Succeeded,
    /// Encoding, application or transport failure, with the user-facing message.
    Failed(String),
}
