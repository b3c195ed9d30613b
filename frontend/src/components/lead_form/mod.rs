//! Lead-capture form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `LeadFormProps`, `LeadFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - Own the submission pipeline: validate the draft, encode an attached file
//!   to a base64 data URI, POST the payload to the CMS form-submissions
//!   endpoint, and map the outcome to inline errors / a success toast.
//! - Guarantee the deferred loading-indicator timer is cancelled on every
//!   exit path, including component teardown.

use yew::prelude::*;

pub mod encoder;
mod flow;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::LeadFormProps;
pub use state::LeadFormComponent;

impl Component for LeadFormComponent {
    type Message = Msg;
    type Properties = LeadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LeadFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // A pending timer must not fire into a dropped component.
        self.cancel_loading_timer();
    }
}
