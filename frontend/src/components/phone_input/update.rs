//! Update function for the phone widget.
//!
//! Transitions between the collapsed and expanded selector states, commits
//! country selections, and re-emits the normalized value to the parent on
//! every edit.

use yew::prelude::*;

use super::countries::find;
use super::messages::Msg;
use super::state::PhoneInputComponent;

pub fn update(
    component: &mut PhoneInputComponent,
    ctx: &Context<PhoneInputComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::ToggleList => {
            component.open = !component.open;
            if !component.open {
                component.search.clear();
            }
            true
        }
        Msg::UpdateSearch(query) => {
            component.search = query;
            true
        }
        Msg::SelectCountry(iso) => {
            if let Some(country) = find(iso) {
                component.selected = country;
            }
            component.open = false;
            component.search.clear();
            ctx.props().on_change.emit(component.normalized());
            true
        }
        Msg::UpdateNational(raw) => {
            component.national = raw.chars().filter(|c| c.is_ascii_digit()).collect();
            ctx.props().on_change.emit(component.normalized());
            true
        }
    }
}
