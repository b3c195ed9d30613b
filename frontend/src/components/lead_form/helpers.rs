//! Utility functions for the lead-capture form.

use common::model::submission::SubmissionErrorBody;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Fallback shown when an error response carries no structured message.
pub const GENERIC_SERVER_ERROR: &str = "Internal Server Error";

/// Extracts the first structured error message from a 4xx/5xx response body,
/// or the generic fallback when the body is empty, unparseable or carries no
/// message.
pub fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<SubmissionErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.first_message().map(str::to_string))
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string())
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates and injects a styled `div` into the DOM for non-blocking feedback,
/// removing itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_message_is_extracted() {
        assert_eq!(
            error_message_from_body(r#"{"errors":[{"message":"Invalid phone"}]}"#),
            "Invalid phone"
        );
    }

    #[test]
    fn first_of_several_messages_wins() {
        let body = r#"{"errors":[{"message":"first"},{"message":"second"}]}"#;
        assert_eq!(error_message_from_body(body), "first");
    }

    #[test]
    fn fallback_on_empty_or_garbage_body() {
        assert_eq!(error_message_from_body(""), GENERIC_SERVER_ERROR);
        assert_eq!(error_message_from_body("not json"), GENERIC_SERVER_ERROR);
        assert_eq!(error_message_from_body("{}"), GENERIC_SERVER_ERROR);
        assert_eq!(error_message_from_body(r#"{"errors":[]}"#), GENERIC_SERVER_ERROR);
        assert_eq!(error_message_from_body(r#"{"errors":[{}]}"#), GENERIC_SERVER_ERROR);
    }
}
