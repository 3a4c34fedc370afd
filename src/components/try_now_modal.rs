//! "Get Started" modal: asks for name and email, stores the lead against the
//! guest record, and redirects to the confirmation page. The form resets
//! every time the modal opens so the same visitor can submit repeatedly.

use gloo_timers::future::TimeoutFuture;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::analytics::{self, MetaOptions};
use crate::components::signup_form::{is_valid_email, redirect_to_thank_you, REDIRECT_DELAY_MS};
use crate::guest_leads::{self, TRY_NOW_MODAL};

#[derive(Properties, PartialEq)]
pub struct TryNowModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(TryNowModal)]
pub fn try_now_modal(props: &TryNowModalProps) -> Html {
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);

    {
        let full_name = full_name.clone();
        let email = email.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        use_effect_with_deps(
            move |is_open| {
                if *is_open {
                    full_name.set(String::new());
                    email.set(String::new());
                    submitting.set(false);
                    form_error.set(None);

                    analytics::track_event(
                        "popup_opened",
                        &json!({ "source": TRY_NOW_MODAL.analytics_source }),
                    );
                    spawn_local(analytics::track_meta("ViewContent", MetaOptions::default()));
                }
                || ()
            },
            props.is_open,
        );
    }

    let onsubmit = {
        let full_name = full_name.clone();
        let email = email.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_value = (*full_name).trim().to_string();
            let email_value = (*email).trim().to_string();
            if !is_valid_email(&email_value) {
                form_error.set(Some("Please enter a valid email address.".to_string()));
                return;
            }
            submitting.set(true);
            form_error.set(None);

            // Submit click is tracked separately from the lead conversion.
            analytics::gtag_event(
                "try_now_continue_click",
                &json!({ "source": TRY_NOW_MODAL.analytics_source }),
            );
            analytics::track_event(
                "try_now_lead_submitted",
                &json!({
                    "source": TRY_NOW_MODAL.analytics_source,
                    "full_name": name_value,
                    "email": email_value,
                }),
            );

            spawn_local(async move {
                let full_name = if name_value.is_empty() { None } else { Some(name_value.as_str()) };
                guest_leads::submit_identified_lead(TRY_NOW_MODAL, &email_value, full_name).await;
                TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                redirect_to_thank_you();
            });
        })
    };

    let on_name_input = {
        let full_name = full_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            full_name.set(input.value());
        })
    };
    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_name_focus = Callback::from(move |_: FocusEvent| {
        analytics::track_event("form_focused_name", &json!({ "source": TRY_NOW_MODAL.analytics_source }));
        analytics::gtag_event("form_focused_name", &json!({ "source": TRY_NOW_MODAL.analytics_source }));
    });
    let on_email_focus = Callback::from(move |_: FocusEvent| {
        analytics::track_event("form_focused_email", &json!({ "source": TRY_NOW_MODAL.analytics_source }));
        analytics::gtag_event("form_focused_email", &json!({ "source": TRY_NOW_MODAL.analytics_source }));
    });

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    if !props.is_open {
        return html! {};
    }

    html! {
        <>
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="modal-wrap" onclick={stop_propagation}>
                <div class="modal-panel">
                    <div class="modal-header">
                        <h2>{ "Get Started" }</h2>
                        <button class="modal-close" onclick={close} aria-label="Close">{ "×" }</button>
                    </div>
                    <div class="modal-body">
                        <h3>{ "Start with your details" }</h3>
                        <p class="modal-subtitle">
                            { "Enter your name and email and we'll notify you when Seoscribed is ready to test." }
                        </p>
                        <form {onsubmit}>
                            <label class="modal-label">{ "Full Name" }</label>
                            <input
                                type="text"
                                class="modal-input"
                                placeholder="Enter your full name"
                                autocomplete="name"
                                required=true
                                value={(*full_name).clone()}
                                oninput={on_name_input}
                                onfocus={on_name_focus}
                                disabled={*submitting}
                            />
                            <label class="modal-label">{ "Email" }</label>
                            <input
                                type="email"
                                class="modal-input"
                                placeholder="Enter your email"
                                autocomplete="email"
                                required=true
                                value={(*email).clone()}
                                oninput={on_email_input}
                                onfocus={on_email_focus}
                                disabled={*submitting}
                            />
                            if let Some(message) = (*form_error).as_ref() {
                                <div class="modal-error">{ message.clone() }</div>
                            }
                            <button class="modal-submit" type="submit" disabled={*submitting}>
                                { if *submitting { "Submitting..." } else { "Continue" } }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </>
    }
}
