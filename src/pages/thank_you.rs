//! Post-signup confirmation page. Conversion pixels fire once per browser
//! session so a reload of this page doesn't double-count the registration.

use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::{self, MetaOptions, META_CR_SESSION_KEY};
use crate::Route;

#[function_component(ThankYou)]
pub fn thank_you() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }

            if analytics::claim_session_once(META_CR_SESSION_KEY) {
                spawn_local(analytics::track_meta(
                    "CompleteRegistration",
                    MetaOptions::default(),
                ));
                analytics::track_google_ads_complete_registration_conversion(json!({}));
            }
            analytics::gtag_event("thank_you_page_view", &json!({ "page_path": "/thank-you" }));

            || ()
        },
        (),
    );

    html! {
        <div class="thank-you-page">
            <style>{ THANK_YOU_CSS }</style>
            <div class="thank-you-card">
                <div class="thank-you-check">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5"
                        stroke-linecap="round" stroke-linejoin="round">
                        <polyline points="20 6 9 17 4 12" />
                    </svg>
                </div>
                <h1>{ "Thanks for providing your information" }</h1>
                <p>
                    { "You're on the founding member list. We'll generate a sample page for \
                       your niche and email it to you within 24 hours." }
                </p>
                <Link<Route> classes="thank-you-back" to={Route::Home}>
                    { "← Back to home" }
                </Link<Route>>
            </div>
        </div>
    }
}

const THANK_YOU_CSS: &str = r#"
.thank-you-page {
    min-height: 80vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 2rem 1.5rem;
    background: #FAFBFC;
    font-family: 'Inter', system-ui, -apple-system, sans-serif;
}
.thank-you-card {
    max-width: 28rem;
    background: #fff;
    border: 1px solid #E2E8F0;
    border-radius: 1rem;
    padding: 3rem 2.5rem;
    text-align: center;
    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.06);
}
.thank-you-check {
    width: 56px;
    height: 56px;
    margin: 0 auto 1.5rem;
    border-radius: 50%;
    background: #DCFCE7;
    color: #166534;
    display: flex;
    align-items: center;
    justify-content: center;
}
.thank-you-check svg { width: 28px; height: 28px; }
.thank-you-card h1 { font-size: 1.5rem; font-weight: 700; color: #0F172A; margin-bottom: 0.75rem; }
.thank-you-card p { color: #475569; line-height: 1.6; margin-bottom: 1.75rem; }
.thank-you-back { color: #C2410C; font-weight: 600; text-decoration: none; font-size: 0.95rem; }
.thank-you-back:hover { text-decoration: underline; }
"#;
