//! Thin wrappers over the analytics globals injected by the page shell
//! (product analytics, gtag, Meta pixel) plus the same-origin server-side
//! event relay. Every call here is fire-and-forget: a missing SDK or a
//! failed relay is logged and swallowed.

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Reflect};
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};

use crate::config;

/// Client-side timeout for the server-side relay call.
const META_RELAY_TIMEOUT_MS: u32 = 4_000;

/// sessionStorage key gating the once-per-session CompleteRegistration fire.
pub const META_CR_SESSION_KEY: &str = "seobot_meta_cr_fired";

fn global_value(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(window.as_ref(), &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

fn global_fn(name: &str) -> Option<Function> {
    global_value(name)?.dyn_into::<Function>().ok()
}

fn to_js(value: &Value) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Product analytics capture. No-op when the SDK global is absent.
pub fn track_event(name: &str, properties: &Value) {
    let posthog = match global_value("posthog") {
        Some(v) => v,
        None => {
            log::debug!("track_event skipped, analytics SDK not loaded: {}", name);
            return;
        }
    };
    let capture = match Reflect::get(&posthog, &JsValue::from_str("capture"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    {
        Some(f) => f,
        None => return,
    };
    if let Err(err) = capture.call2(&posthog, &JsValue::from_str(name), &to_js(properties)) {
        gloo_console::debug!("track_event failed:", err);
    }
}

pub fn gtag_event(name: &str, params: &Value) {
    let gtag = match global_fn("gtag") {
        Some(f) => f,
        None => {
            log::debug!("gtag_event skipped, gtag not available: {}", name);
            return;
        }
    };
    if let Err(err) = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(name),
        &to_js(params),
    ) {
        gloo_console::debug!("gtag_event failed:", err);
    }
}

/// The Ads account id is injected by the page shell on `<body
/// data-google-ads-id>`; conversions are skipped when it or the label is
/// missing.
fn google_ads_id() -> Option<String> {
    let body = web_sys::window()?.document()?.body()?;
    body.dataset().get("googleAdsId")
}

fn build_send_to(label: Option<&str>) -> Option<String> {
    Some(format!("{}/{}", google_ads_id()?, label?))
}

fn ads_conversion(label: Option<&str>, mut params: Value) {
    let send_to = match build_send_to(label) {
        Some(send_to) => send_to,
        None => return,
    };
    params["send_to"] = json!(send_to);
    gtag_event("conversion", &params);
}

pub fn track_google_ads_lead_conversion(params: Value) {
    ads_conversion(config::get_google_ads_lead_label(), params);
}

pub fn track_google_ads_complete_registration_conversion(params: Value) {
    ads_conversion(config::get_google_ads_complete_registration_label(), params);
}

#[derive(Default, Clone, Debug)]
pub struct MetaOptions {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub custom_data: Option<Value>,
}

/// Fires the browser pixel and relays the same event (same event id, for
/// dedup) to the server-side endpoint, bounded by a fixed timeout.
pub async fn track_meta(event_name: &str, options: MetaOptions) {
    let event_id = uuid::Uuid::new_v4().to_string();
    let custom_data = options.custom_data.clone().unwrap_or_else(|| json!({}));

    if let Some(fbq) = global_fn("fbq") {
        let args = js_sys::Array::new();
        args.push(&JsValue::from_str("track"));
        args.push(&JsValue::from_str(event_name));
        args.push(&to_js(&custom_data));
        args.push(&to_js(&json!({ "eventID": event_id })));
        if let Err(err) = fbq.apply(&JsValue::NULL, &args) {
            gloo_console::debug!("pixel call failed:", err);
        }
    }

    let source_url = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let body = json!({
        "eventName": event_name,
        "eventId": event_id,
        "email": options.email,
        "phone": options.phone,
        "customData": custom_data,
        "sourceUrl": source_url,
    });

    let request = match Request::post(config::get_meta_event_endpoint()).json(&body) {
        Ok(request) => request,
        Err(err) => {
            gloo_console::debug!("meta relay request build failed:", err.to_string());
            return;
        }
    };

    let send = request.send();
    let deadline = TimeoutFuture::new(META_RELAY_TIMEOUT_MS);
    pin_mut!(send);
    pin_mut!(deadline);
    match select(send, deadline).await {
        Either::Left((Err(err), _)) => {
            gloo_console::debug!("meta relay failed:", err.to_string());
        }
        Either::Left((Ok(_), _)) => {}
        Either::Right(((), _)) => {
            log::debug!("meta relay timed out after {}ms: {}", META_RELAY_TIMEOUT_MS, event_name);
        }
    }
}

/// Returns `true` the first time it is called in a browser session; used to
/// fire registration conversions exactly once per session.
pub fn claim_session_once(key: &str) -> bool {
    let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
    let storage = match storage {
        Some(storage) => storage,
        // No sessionStorage (privacy mode): fall back to firing.
        None => return true,
    };
    if let Ok(Some(_)) = storage.get_item(key) {
        return false;
    }
    let _ = storage.set_item(key, "1");
    true
}
