//! Beta signup form in the offer section: email only, best-effort lead
//! capture, then a fixed-delay redirect to the confirmation page. The delay
//! gives fire-and-forget analytics calls a chance to flush before
//! navigation.

use gloo_timers::future::TimeoutFuture;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::analytics;
use crate::guest_leads::{self, LANDING_PAGE_CTA};

pub const REDIRECT_DELAY_MS: u32 = 1_000;
pub const THANK_YOU_PATH: &str = "/thank-you";

/// Minimal sanity check; the real validation happens at the mail provider.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(' ')
}

pub fn redirect_to_thank_you() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(THANK_YOU_PATH);
    }
}

#[function_component(BetaSignupForm)]
pub fn beta_signup_form() -> Html {
    let email = use_state(String::new);
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);

    let onsubmit = {
        let email = email.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_value = (*email).trim().to_string();
            if !is_valid_email(&email_value) {
                form_error.set(Some("Please enter a valid email address.".to_string()));
                return;
            }
            submitting.set(true);
            form_error.set(None);

            analytics::gtag_event(
                "beta_signup_submitted",
                &json!({ "source": LANDING_PAGE_CTA.analytics_source }),
            );
            analytics::track_event(
                "beta_signup_submitted",
                &json!({ "source": LANDING_PAGE_CTA.analytics_source, "email": email_value }),
            );

            spawn_local(async move {
                guest_leads::submit_identified_lead(LANDING_PAGE_CTA, &email_value, None).await;
                TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                redirect_to_thank_you();
            });
        })
    };

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onfocus = Callback::from(move |_: FocusEvent| {
        analytics::track_event(
            "form_focused_email",
            &json!({ "source": LANDING_PAGE_CTA.analytics_source }),
        );
        analytics::gtag_event(
            "form_focused_email",
            &json!({ "source": LANDING_PAGE_CTA.analytics_source }),
        );
    });

    html! {
        <form class="signup-form" {onsubmit}>
            <input
                class="signup-input"
                placeholder="Your email address"
                type="email"
                required=true
                value={(*email).clone()}
                {oninput}
                {onfocus}
                disabled={*submitting}
            />
            if let Some(message) = (*form_error).as_ref() {
                <div class="signup-error">{ message.clone() }</div>
            }
            <button class="signup-button" type="submit" disabled={*submitting}>
                { if *submitting { "Submitting..." } else { "Get Free Beta Access" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("  founder@directory.io "));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
    }

    #[test]
    fn rejects_obvious_garbage() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("nodomain@"));
        assert!(!is_valid_email("@nolocal.com"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("a@tld-less"));
        assert!(!is_valid_email("a@.starts-with-dot"));
        assert!(!is_valid_email("spaces in@local.com"));
    }
}
