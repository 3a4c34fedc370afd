//! Client for the remote `guest_users` table and the shared lead-submission
//! flow. The browser-held guest id cookie is the only handle on a row; this
//! client only inserts and updates, never deletes.

use std::fmt;

use gloo_net::http::{Method, Request};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wasm_bindgen_futures::spawn_local;

use crate::analytics::{self, MetaOptions};
use crate::attribution::{read_attribution, AttributionRecord};
use crate::config;
use crate::cookies::{BrowserCookies, CookieStore, GUEST_ID_COOKIE_NAME};

#[derive(Debug)]
pub enum LeadStoreError {
    Network(gloo_net::Error),
    Status(u16),
    /// The datastore answered but without the representation we asked for.
    MissingRow,
}

impl fmt::Display for LeadStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadStoreError::Network(err) => write!(f, "network error: {}", err),
            LeadStoreError::Status(code) => write!(f, "datastore returned status {}", code),
            LeadStoreError::MissingRow => write!(f, "datastore returned no row"),
        }
    }
}

impl From<gloo_net::Error> for LeadStoreError {
    fn from(err: gloo_net::Error) -> Self {
        LeadStoreError::Network(err)
    }
}

/// Row payload for inserts and upserts. `id` is omitted on plain inserts so
/// the datastore assigns one.
#[derive(Serialize, Debug)]
pub struct NewGuestLead<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<&'a str>,
    pub source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_page: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<&'a str>,
    pub last_seen_at: String,
}

impl<'a> NewGuestLead<'a> {
    fn utm_snapshot(mut self, attribution: &AttributionRecord) -> Self {
        self.utm_source = attribution.utm_source.clone();
        self.utm_medium = attribution.utm_medium.clone();
        self.utm_campaign = attribution.utm_campaign.clone();
        self.utm_term = attribution.utm_term.clone();
        self.utm_content = attribution.utm_content.clone();
        self
    }

    fn empty(source: &'a str, last_seen_at: String) -> Self {
        NewGuestLead {
            id: None,
            email: None,
            full_name: None,
            source,
            utm_source: None,
            utm_medium: None,
            utm_campaign: None,
            utm_term: None,
            utm_content: None,
            landing_page: None,
            referrer: None,
            last_seen_at,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct LeadUpdate<'a> {
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<&'a str>,
    pub source: &'a str,
    pub last_seen_at: String,
}

#[derive(Deserialize)]
struct ReturnedRow {
    id: String,
}

pub struct GuestLeadStore {
    base_url: &'static str,
    anon_key: &'static str,
}

impl GuestLeadStore {
    /// `None` when the datastore is not configured; callers degrade to a
    /// no-op and the user-visible flow continues.
    pub fn from_config() -> Option<Self> {
        if !config::datastore_configured() {
            return None;
        }
        Some(GuestLeadStore {
            base_url: config::get_datastore_url(),
            anon_key: config::get_datastore_anon_key(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/guest_users", self.base_url)
    }

    fn request(&self, url: &str, method: Method, prefer: &str) -> Request {
        Request::new(url)
            .method(method)
            .header("apikey", self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("Prefer", prefer)
    }

    /// Creates the anonymous visit row for a freshly tagged browser. This is
    /// an upsert keyed on the client-generated id: the id cookie is written
    /// optimistically before this call resolves, and a form submission racing
    /// with it merges into the same row instead of duplicating it.
    pub async fn create_anonymous(
        &self,
        id: &str,
        attribution: &AttributionRecord,
        landing_page: &str,
        referrer: Option<&str>,
    ) -> Result<(), LeadStoreError> {
        let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let mut row = NewGuestLead::empty("anonymous_visit", now).utm_snapshot(attribution);
        row.id = Some(id);
        row.landing_page = Some(landing_page);
        row.referrer = referrer;

        let url = format!("{}?on_conflict=id", self.table_url());
        let response = self
            .request(&url, Method::POST, "resolution=merge-duplicates")
            .json(&row)?
            .send()
            .await?;
        if response.ok() {
            Ok(())
        } else {
            Err(LeadStoreError::Status(response.status()))
        }
    }

    /// Updates the row behind `id`. Returns `false` when zero rows matched,
    /// meaning the cached id no longer resolves (deleted server-side).
    pub async fn update_lead(&self, id: &str, update: &LeadUpdate<'_>) -> Result<bool, LeadStoreError> {
        let url = format!("{}?id=eq.{}", self.table_url(), urlencoding::encode(id));
        let response = self
            .request(&url, Method::PATCH, "return=representation")
            .json(update)?
            .send()
            .await?;
        if !response.ok() {
            return Err(LeadStoreError::Status(response.status()));
        }
        let rows: Vec<ReturnedRow> = response.json().await?;
        Ok(!rows.is_empty())
    }

    /// Inserts a fresh row and returns the datastore-assigned id.
    pub async fn insert_lead(&self, row: &NewGuestLead<'_>) -> Result<String, LeadStoreError> {
        let response = self
            .request(&self.table_url(), Method::POST, "return=representation")
            .json(row)?
            .send()
            .await?;
        if !response.ok() {
            return Err(LeadStoreError::Status(response.status()));
        }
        let rows: Vec<ReturnedRow> = response.json().await?;
        rows.into_iter()
            .next()
            .map(|row| row.id)
            .ok_or(LeadStoreError::MissingRow)
    }
}

/// Where a lead submission came from; carries both the analytics source tag
/// and the value stored in the row's `source` column.
#[derive(Clone, Copy, Debug)]
pub struct LeadEntryPoint {
    pub analytics_source: &'static str,
    pub lead_source: &'static str,
}

pub const LANDING_PAGE_CTA: LeadEntryPoint = LeadEntryPoint {
    analytics_source: "landing_page_cta",
    lead_source: "landing_page_cta_lead",
};

pub const TRY_NOW_MODAL: LeadEntryPoint = LeadEntryPoint {
    analytics_source: "try_now_modal",
    lead_source: "try_now_modal_lead",
};

fn lead_conversion_params(email: &str) -> serde_json::Value {
    json!({ "email": email })
}

/// Persists an identified lead against the current guest row: update by the
/// cached id first, and when that matches zero rows clear the stale cookie
/// and fall back to inserting a fresh row (caching its id). Storage failures
/// are logged and reported to analytics but never block the caller's flow.
pub async fn submit_identified_lead(entry: LeadEntryPoint, email: &str, full_name: Option<&str>) {
    let store = match GuestLeadStore::from_config() {
        Some(store) => store,
        None => return,
    };
    let cookies = BrowserCookies;
    let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    let result = async {
        let mut matched = false;
        if let Some(guest_id) = cookies.get(GUEST_ID_COOKIE_NAME) {
            let update = LeadUpdate {
                email,
                full_name,
                source: entry.lead_source,
                last_seen_at: now.clone(),
            };
            matched = store.update_lead(&guest_id, &update).await?;
            if !matched {
                // Row was deleted upstream; drop the stale handle.
                cookies.clear(GUEST_ID_COOKIE_NAME);
            }
        }
        if !matched {
            let mut row = NewGuestLead::empty(entry.lead_source, now.clone());
            row.email = Some(email);
            row.full_name = full_name;
            if let Some(attribution) = read_attribution(&cookies) {
                row = row.utm_snapshot(&attribution);
            }
            let new_id = store.insert_lead(&row).await?;
            cookies.set(GUEST_ID_COOKIE_NAME, &new_id);
        }
        Ok::<(), LeadStoreError>(())
    }
    .await;

    match result {
        Ok(()) => {
            analytics::track_event(
                "signup_success",
                &json!({ "source": entry.analytics_source, "email": email }),
            );
            // The gtag conversion fires synchronously: the caller redirects
            // about a second from now, and the relay's timeout is longer than
            // that, so nothing here may wait on it.
            analytics::track_google_ads_lead_conversion(lead_conversion_params(email));
            let email = email.to_string();
            spawn_local(analytics::track_meta(
                "Lead",
                MetaOptions {
                    email: Some(email),
                    ..MetaOptions::default()
                },
            ));
        }
        Err(err) => {
            gloo_console::warn!("lead storage failed:", err.to_string());
            analytics::track_event(
                "signup_failed",
                &json!({
                    "source": entry.analytics_source,
                    "email": email,
                    "error_message": err.to_string(),
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribution::{reconcile, CampaignParams, Visit};

    #[test]
    fn anonymous_row_serializes_expected_columns() {
        let tagged = CampaignParams::from_query("utm_source=google&utm_campaign=beta");
        let visit = Visit {
            url: "https://seoscribed.com/?utm_source=google".to_string(),
            referrer: Some("https://google.com/".to_string()),
            now: "t0".to_string(),
        };
        let (attribution, _) = reconcile(None, &tagged, &visit, false);

        let mut row = NewGuestLead::empty("anonymous_visit", "t0".to_string()).utm_snapshot(&attribution);
        row.id = Some("guest-1");
        row.landing_page = Some("/");
        row.referrer = Some("https://google.com/");

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["id"], "guest-1");
        assert_eq!(value["source"], "anonymous_visit");
        assert_eq!(value["utm_source"], "google");
        assert_eq!(value["utm_campaign"], "beta");
        assert_eq!(value["landing_page"], "/");
        // Absent optionals are omitted entirely, not sent as null.
        assert!(value.get("email").is_none());
        assert!(value.get("utm_medium").is_none());
    }

    #[test]
    fn plain_insert_omits_id() {
        let mut row = NewGuestLead::empty("landing_page_cta_lead", "t1".to_string());
        row.email = Some("a@b.com");
        let value = serde_json::to_value(&row).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["email"], "a@b.com");
        assert_eq!(value["last_seen_at"], "t1");
    }

    #[test]
    fn lead_conversion_is_synchronous_and_carries_the_email() {
        // The conversion must fire inside the 1s redirect window, so it
        // cannot live behind the relay await; a plain fn binding breaks the
        // build if it ever becomes a future that has to be awaited.
        let _: fn(serde_json::Value) = crate::analytics::track_google_ads_lead_conversion;
        let params = lead_conversion_params("a@b.com");
        assert_eq!(params["email"], "a@b.com");
    }

    #[test]
    fn update_payload_shape() {
        let update = LeadUpdate {
            email: "a@b.com",
            full_name: Some("Ada L"),
            source: "try_now_modal_lead",
            last_seen_at: "t2".to_string(),
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["email"], "a@b.com");
        assert_eq!(value["full_name"], "Ada L");
        assert_eq!(value["source"], "try_now_modal_lead");
    }
}
