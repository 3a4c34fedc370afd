//! Build-time configuration. Values are baked in via `option_env!` so the
//! deployed bundle carries no runtime configuration surface.

#[cfg(debug_assertions)]
pub fn get_datastore_url() -> &'static str {
    // Local datastore when running against a dev stack
    option_env!("SEOSCRIBED_DATASTORE_URL").unwrap_or("http://localhost:54321")
}

#[cfg(not(debug_assertions))]
pub fn get_datastore_url() -> &'static str {
    option_env!("SEOSCRIBED_DATASTORE_URL").unwrap_or("")
}

pub fn get_datastore_anon_key() -> &'static str {
    option_env!("SEOSCRIBED_DATASTORE_ANON_KEY").unwrap_or("")
}

/// Lead capture is best-effort: when the datastore is not configured every
/// remote write degrades to a no-op and the user-visible flow continues.
pub fn datastore_configured() -> bool {
    !get_datastore_url().is_empty() && !get_datastore_anon_key().is_empty()
}

/// Same-origin relay for server-side marketing events.
pub fn get_meta_event_endpoint() -> &'static str {
    "/api/meta-event"
}

pub fn get_google_ads_lead_label() -> Option<&'static str> {
    option_env!("SEOSCRIBED_ADS_CONVERSION_LABEL_LEAD")
}

pub fn get_google_ads_complete_registration_label() -> Option<&'static str> {
    option_env!("SEOSCRIBED_ADS_CONVERSION_LABEL_COMPLETE_REGISTRATION")
}
