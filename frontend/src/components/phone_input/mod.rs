//! Phone input widget: a country selector paired with a tel field.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `PhoneInputProps`, `PhoneInputComponent`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - Emit a single normalized phone value (`+<dial><digits>`) to the parent,
//!   or the empty string while the entry is incomplete. The parent never sees
//!   a partial value.

use yew::prelude::*;

pub mod countries;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PhoneInputProps;
pub use state::PhoneInputComponent;

impl Component for PhoneInputComponent {
    type Message = Msg;
    type Properties = PhoneInputProps;

    fn create(ctx: &Context<Self>) -> Self {
        PhoneInputComponent::new(&ctx.props().default_country)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // Keep the local digits in sync with the committed value: a parent
        // reset (e.g. after a successful submission) clears them, and a
        // parent-set normalized value replaces country and digits alike.
        let value = &ctx.props().value;
        if value.is_empty() {
            self.national.clear();
        } else if *value != self.normalized() {
            if let Some(national) = value.strip_prefix('+').and_then(|digits| {
                digits.strip_prefix(self.selected.dial)
            }) {
                self.national = national.to_string();
            } else if let Some((country, national)) = countries::split_value(value) {
                self.selected = country;
                self.national = national;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
