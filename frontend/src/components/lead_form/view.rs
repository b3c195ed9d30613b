//! View rendering for the lead-capture form.
//!
//! One widget per field, bound through `FieldId`: label, control, and the
//! field's inline validation message. The submit button is disabled while a
//! submission is pending and shows the spinner only once the deferred loading
//! delay has elapsed.

use common::model::field::FieldId;
use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::phone_input::PhoneInputComponent;

use super::messages::Msg;
use super::state::LeadFormComponent;

pub fn view(component: &LeadFormComponent, ctx: &Context<LeadFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <form
            id={ctx.props().form_id.clone()}
            class="lead-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            {
                if let Some(message) = &component.flow.submit_error {
                    html! { <div class="form-error" role="alert">{ message.clone() }</div> }
                } else {
                    html! {}
                }
            }
            <div class="form-fields">
                { text_field(component, link, FieldId::Name) }
                { text_field(component, link, FieldId::Email) }
                { phone_field(component, link) }
                { experience_field(component, link) }
                { upload_field(component, link) }
            </div>
            <button type="submit" class="submit-btn" disabled={component.flow.submitting}>
                { if component.flow.show_loading { html! { <span class="spinner" /> } } else { html! {} } }
                <span>{ "Submit" }</span>
            </button>
        </form>
    }
}

fn text_field(component: &LeadFormComponent, link: &Scope<LeadFormComponent>, field: FieldId) -> Html {
    html! {
        <div class="form-item">
            { field_label(field) }
            <input
                type={if field == FieldId::Email { "email" } else { "text" }}
                class="form-input"
                value={component.flow.draft.field(field).to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::UpdateField(field, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            { field_message(component, field) }
        </div>
    }
}

fn phone_field(component: &LeadFormComponent, link: &Scope<LeadFormComponent>) -> Html {
    html! {
        <div class="form-item">
            { field_label(FieldId::Tel) }
            <PhoneInputComponent
                value={component.flow.draft.tel.clone()}
                placeholder="2340000000000"
                on_change={link.callback(|value: String| Msg::UpdateField(FieldId::Tel, value))}
            />
            { field_message(component, FieldId::Tel) }
        </div>
    }
}

fn experience_field(component: &LeadFormComponent, link: &Scope<LeadFormComponent>) -> Html {
    html! {
        <div class="form-item">
            { field_label(FieldId::Experience) }
            <textarea
                class="form-textarea"
                value={component.flow.draft.experience.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateField(
                        FieldId::Experience,
                        e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                    )
                })}
            />
            { field_message(component, FieldId::Experience) }
        </div>
    }
}

fn upload_field(component: &LeadFormComponent, link: &Scope<LeadFormComponent>) -> Html {
    html! {
        <div class="form-item">
            { field_label(FieldId::Upload) }
            <input
                type="file"
                class="form-input form-file"
                accept="image/*"
                ref={component.file_input_ref.clone()}
                onchange={link.callback(|e: Event| {
                    let input = e.target_unchecked_into::<HtmlInputElement>();
                    let file = input.files().and_then(|files| files.get(0));
                    Msg::UploadChanged { value: input.value(), file }
                })}
            />
            { field_message(component, FieldId::Upload) }
        </div>
    }
}

fn field_label(field: FieldId) -> Html {
    html! {
        <label class="form-label">
            { if field.is_required() { html! { <span class="required">{ "*" }</span> } } else { html! {} } }
            { field.label() }
        </label>
    }
}

fn field_message(component: &LeadFormComponent, field: FieldId) -> Html {
    match component.flow.field_errors.get(field) {
        Some(message) => html! { <p class="field-message">{ message }</p> },
        None => html! {},
    }
}
