//! Update shell for the lead-capture form.
//!
//! All pipeline decisions live in the pure `FormFlow::step`; this module only
//! translates component messages into flow events, runs the step, and carries
//! out the returned effects (spawning the encode, arming and cancelling the
//! loading timer, sending the request, toasting, clearing the file input).

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::encoder::encode_file;
use super::flow::{Effect, FlowEvent};
use super::helpers::{error_message_from_body, show_toast};
use super::messages::Msg;
use super::state::LeadFormComponent;

/// How long the request may run before the spinner becomes visible.
pub const LOADING_DELAY_MS: u32 = 1_000;

pub fn update(
    component: &mut LeadFormComponent,
    ctx: &Context<LeadFormComponent>,
    msg: Msg,
) -> bool {
    let event = match msg {
        Msg::UpdateField(field, value) => FlowEvent::EditField(field, value),
        Msg::UploadChanged { value, file } => {
            component.file = file;
            FlowEvent::UploadChanged {
                value,
                attached: component.file.is_some(),
            }
        }
        Msg::Submit => FlowEvent::Submit,
        Msg::UploadEncoded(result) => {
            if let Err(err) = &result {
                gloo_console::error!(format!("Error converting file: {}", err));
            }
            FlowEvent::UploadEncoded(result)
        }
        Msg::LoadingDelayElapsed => {
            component.loading_timer = None;
            FlowEvent::LoadingDelayElapsed
        }
        Msg::Succeeded => FlowEvent::Succeeded,
        Msg::Failed(message) => FlowEvent::Failed(message),
    };

    let effects = component
        .flow
        .step(ctx.props().form_id.as_str(), event);
    for effect in effects {
        perform(component, ctx, effect);
    }
    true
}

fn perform(component: &mut LeadFormComponent, ctx: &Context<LeadFormComponent>, effect: Effect) {
    match effect {
        Effect::EncodeUpload => {
            // The flow only asks for an encode when a file is attached.
            let Some(file) = component.file.clone() else {
                ctx.link()
                    .send_message(Msg::Failed("File upload failed.".to_string()));
                return;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::UploadEncoded(encode_file(&file).await));
            });
        }
        Effect::ArmLoadingTimer => {
            // Deferred loading indicator: only shown if the request outlasts
            // the delay. The handle lives in state so every exit path can
            // cancel it.
            let link = ctx.link().clone();
            component.loading_timer = Some(Timeout::new(LOADING_DELAY_MS, move || {
                link.send_message(Msg::LoadingDelayElapsed);
            }));
        }
        Effect::CancelLoadingTimer => component.cancel_loading_timer(),
        Effect::SendPayload(payload) => {
            let action = ctx.props().action.to_string();
            let link = ctx.link().clone();
            spawn_local(async move {
                let request = match Request::post(&action).json(&payload) {
                    Ok(request) => request,
                    Err(err) => {
                        gloo_console::warn!(format!("{}", err));
                        link.send_message(Msg::Failed("Something went wrong.".to_string()));
                        return;
                    }
                };

                match request.send().await {
                    Ok(response) if response.status() >= 400 => {
                        let body = response.text().await.unwrap_or_default();
                        link.send_message(Msg::Failed(error_message_from_body(&body)));
                    }
                    Ok(_) => link.send_message(Msg::Succeeded),
                    Err(err) => {
                        gloo_console::warn!(format!("{}", err));
                        link.send_message(Msg::Failed("Something went wrong.".to_string()));
                    }
                }
            });
        }
        Effect::ShowSuccessToast => show_toast("Success"),
        Effect::ClearFileInput => {
            component.file = None;
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.set_value("");
            }
        }
    }
}
