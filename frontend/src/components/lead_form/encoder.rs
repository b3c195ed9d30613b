//! File-to-text encoder.
//!
//! Converts the attached file into a base64 data URI so it can travel inside
//! the JSON submission payload. The read is asynchronous; the caller awaits it
//! before the network call begins, and at most one encode is in flight per
//! submission.

use base64::{engine::general_purpose, Engine as _};
use gloo_file::{futures::read_as_bytes, Blob};
use std::fmt;

/// Why an encode failed. Both cases abort the submission before any network
/// traffic; the draft stays intact for retry.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodingError {
    /// The underlying file read errored.
    Read(String),
    /// The read completed but yielded no bytes.
    Empty,
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::Read(reason) => write!(f, "file reading failed: {}", reason),
            EncodingError::Empty => write!(f, "file read yielded no data"),
        }
    }
}

/// Reads a file and encodes it as a `data:<mime>;base64,<payload>` string.
pub async fn encode_file(file: &web_sys::File) -> Result<String, EncodingError> {
    let mime = file.type_();
    let blob = Blob::from(file.clone());

    let bytes = read_as_bytes(&blob)
        .await
        .map_err(|err| EncodingError::Read(err.to_string()))?;
    if bytes.is_empty() {
        return Err(EncodingError::Empty);
    }

    Ok(data_uri(&mime, &bytes))
}

/// Assembles the data URI. Files without a reported MIME type fall back to
/// `application/octet-stream`.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_embeds_mime_and_base64_payload() {
        assert_eq!(data_uri("image/png", b"abc"), "data:image/png;base64,YWJj");
    }

    #[test]
    fn missing_mime_falls_back_to_octet_stream() {
        assert_eq!(
            data_uri("", &[0xff, 0xd8]),
            "data:application/octet-stream;base64,/9g="
        );
    }

    #[test]
    fn display_of_errors() {
        assert_eq!(
            EncodingError::Read("boom".to_string()).to_string(),
            "file reading failed: boom"
        );
        assert_eq!(EncodingError::Empty.to_string(), "file read yielded no data");
    }
}
