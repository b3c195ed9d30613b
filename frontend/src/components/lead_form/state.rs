//! Component state for the lead-capture form.
//!
//! The fill-out itself lives in the pure `FormFlow`; this struct only adds
//! the browser-side resources the flow's effects act on.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::flow::FormFlow;

/// Main state container for the `LeadFormComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct LeadFormComponent {
    /// Pure state and transitions of the fill-out.
    pub flow: FormFlow,

    /// The attached file, if any. Held only while attached; cleared on
    /// removal and after a successful submission.
    pub file: Option<web_sys::File>,

    /// Handle of the pending loading-indicator timer. Scoped resource:
    /// cancelled on success, failure and teardown.
    pub loading_timer: Option<Timeout>,

    /// Reference to the file input, so a reset can clear its DOM value.
    pub file_input_ref: NodeRef,
}

impl LeadFormComponent {
    pub fn new() -> Self {
        Self {
            flow: FormFlow::new(),
            file: None,
            loading_timer: None,
            file_input_ref: NodeRef::default(),
        }
    }

    /// Cancels the deferred loading indicator if one is pending.
    pub fn cancel_loading_timer(&mut self) {
        if let Some(timer) = self.loading_timer.take() {
            timer.cancel();
        }
    }
}
