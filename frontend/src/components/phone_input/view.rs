//! View rendering for the phone widget.
//!
//! Collapsed: a trigger button with the committed country's flag plus the tel
//! field. Expanded: a dropdown with a search box and the filtered country
//! list (flag, name, `+dial`, and a check mark on the committed country).

use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::countries::{filter, Country};
use super::messages::Msg;
use super::state::PhoneInputComponent;

pub fn view(component: &PhoneInputComponent, ctx: &Context<PhoneInputComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="phone-input">
            <button
                type="button"
                class="country-trigger"
                onclick={link.callback(|_| Msg::ToggleList)}
            >
                <span class="country-flag">{ component.selected.flag }</span>
                <span class="country-chevron">{ "⌄" }</span>
            </button>
            { if component.open { country_list(component, link) } else { html! {} } }
            <input
                type="tel"
                class="phone-national"
                placeholder={ctx.props().placeholder.clone()}
                value={component.national.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateNational(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
        </div>
    }
}

fn country_list(component: &PhoneInputComponent, link: &Scope<PhoneInputComponent>) -> Html {
    let options = filter(&component.search);

    html! {
        <div class="country-list">
            <input
                type="text"
                class="country-search"
                placeholder="Search country..."
                value={component.search.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateSearch(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            {
                if options.is_empty() {
                    html! { <div class="country-empty">{ "No country found." }</div> }
                } else {
                    options
                        .iter()
                        .map(|country| country_option(country, component.selected, link))
                        .collect::<Html>()
                }
            }
        </div>
    }
}

fn country_option(
    country: &'static Country,
    selected: &'static Country,
    link: &Scope<PhoneInputComponent>,
) -> Html {
    let iso = country.iso;

    html! {
        <button
            type="button"
            class="country-option"
            key={iso}
            onclick={link.callback(move |_| Msg::SelectCountry(iso))}
        >
            <span class="country-flag">{ country.flag }</span>
            <span class="country-name">{ country.name }</span>
            <span class="country-dial">{ format!("+{}", country.dial) }</span>
            {
                if country.iso == selected.iso {
                    html! { <span class="country-check">{ "✓" }</span> }
                } else {
                    html! {}
                }
            }
        </button>
    }
}
