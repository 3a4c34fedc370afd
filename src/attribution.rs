//! Marketing attribution capture.
//!
//! On every navigation the current URL's campaign parameters are merged into
//! the persisted attribution cookie: first-touch fields are written once and
//! never overwritten, last-touch fields refresh on every visit, and campaign
//! fields only change when the visit actually carries new parameters; a
//! direct revisit must not erase prior attribution.
//!
//! When a visit is worth remembering remotely (first tagged visit for this
//! browser) an anonymous guest lead row is created, keyed by a client
//! generated id held in a second cookie.

use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics;
use crate::cookies::{BrowserCookies, CookieStore, ATTR_COOKIE_NAME, GUEST_ID_COOKIE_NAME};
use crate::guest_leads::GuestLeadStore;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AttributionRecord {
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
    pub utm_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gclid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wbraid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gbraid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msclkid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_touch_ts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_touch_ts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_landing_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_landing_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_referrer: Option<String>,
}

/// Campaign parameters recognised in the query string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignParams {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,
    pub utm_id: Option<String>,
    pub gclid: Option<String>,
    pub wbraid: Option<String>,
    pub gbraid: Option<String>,
    pub msclkid: Option<String>,
}

impl CampaignParams {
    /// Parses the recognised parameters out of a raw query string, with or
    /// without the leading `?`. Unknown parameters are ignored, empty values
    /// are treated as absent.
    pub fn from_query(query: &str) -> Self {
        let mut out = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let mut it = pair.splitn(2, '=');
            let key = it.next().unwrap_or("");
            let raw = it.next().unwrap_or("");
            if key.is_empty() || raw.is_empty() {
                continue;
            }
            let decoded = urlencoding::decode(&raw.replace('+', " "))
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            let slot = match key {
                "utm_source" => &mut out.utm_source,
                "utm_medium" => &mut out.utm_medium,
                "utm_campaign" => &mut out.utm_campaign,
                "utm_term" => &mut out.utm_term,
                "utm_content" => &mut out.utm_content,
                "utm_id" => &mut out.utm_id,
                "gclid" => &mut out.gclid,
                "wbraid" => &mut out.wbraid,
                "gbraid" => &mut out.gbraid,
                "msclkid" => &mut out.msclkid,
                _ => continue,
            };
            *slot = Some(decoded);
        }
        out
    }

    pub fn has_any(&self) -> bool {
        self.utm_source.is_some()
            || self.utm_medium.is_some()
            || self.utm_campaign.is_some()
            || self.utm_term.is_some()
            || self.utm_content.is_some()
            || self.utm_id.is_some()
            || self.gclid.is_some()
            || self.wbraid.is_some()
            || self.gbraid.is_some()
            || self.msclkid.is_some()
    }
}

/// Context of the current page view, captured once per navigation.
#[derive(Clone, Debug)]
pub struct Visit {
    pub url: String,
    pub referrer: Option<String>,
    /// ISO-8601 timestamp of the visit.
    pub now: String,
}

/// Remote side effect the reconciler asks for. Creation is gated on the guest
/// id cookie so repeated invocations never produce duplicate rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoteAction {
    None,
    CreateAnonymousLead,
}

fn merge_field(new: &Option<String>, slot: &mut Option<String>) {
    if new.is_some() {
        *slot = new.clone();
    }
}

/// Produces the up-to-date attribution record for this visit plus the remote
/// action to take. Pure; all I/O happens in the caller.
pub fn reconcile(
    existing: Option<AttributionRecord>,
    params: &CampaignParams,
    visit: &Visit,
    has_guest_id: bool,
) -> (AttributionRecord, RemoteAction) {
    let has_params = params.has_any();

    let mut record = match existing {
        None => {
            // First touch: stamp everything from the current request.
            let record = AttributionRecord {
                utm_source: params.utm_source.clone(),
                utm_medium: params.utm_medium.clone(),
                utm_campaign: params.utm_campaign.clone(),
                utm_term: params.utm_term.clone(),
                utm_content: params.utm_content.clone(),
                utm_id: params.utm_id.clone(),
                gclid: params.gclid.clone(),
                wbraid: params.wbraid.clone(),
                gbraid: params.gbraid.clone(),
                msclkid: params.msclkid.clone(),
                first_touch_ts: Some(visit.now.clone()),
                last_touch_ts: Some(visit.now.clone()),
                first_landing_url: Some(visit.url.clone()),
                last_landing_url: Some(visit.url.clone()),
                initial_referrer: visit.referrer.clone(),
            };
            let action = if has_params && !has_guest_id {
                RemoteAction::CreateAnonymousLead
            } else {
                RemoteAction::None
            };
            return (record, action);
        }
        Some(existing) => existing,
    };

    if has_params {
        merge_field(&params.utm_source, &mut record.utm_source);
        merge_field(&params.utm_medium, &mut record.utm_medium);
        merge_field(&params.utm_campaign, &mut record.utm_campaign);
        merge_field(&params.utm_term, &mut record.utm_term);
        merge_field(&params.utm_content, &mut record.utm_content);
        merge_field(&params.utm_id, &mut record.utm_id);
        merge_field(&params.gclid, &mut record.gclid);
        merge_field(&params.wbraid, &mut record.wbraid);
        merge_field(&params.gbraid, &mut record.gbraid);
        merge_field(&params.msclkid, &mut record.msclkid);
        if record.first_landing_url.is_none() {
            record.first_landing_url = Some(visit.url.clone());
        }
        if record.initial_referrer.is_none() {
            record.initial_referrer = visit.referrer.clone();
        }
    }

    // Last non-direct-touch: campaign fields only change above; last-seen
    // metadata refreshes on every visit.
    record.last_touch_ts = Some(visit.now.clone());
    record.last_landing_url = Some(visit.url.clone());

    // Covers a first visit that was direct and a later tagged visit inside
    // the retention window.
    let action = if has_params && !has_guest_id {
        RemoteAction::CreateAnonymousLead
    } else {
        RemoteAction::None
    };
    (record, action)
}

pub fn read_attribution(store: &impl CookieStore) -> Option<AttributionRecord> {
    // Fails soft: a missing or malformed cookie is treated as first touch.
    let raw = store.get(ATTR_COOKIE_NAME)?;
    let decoded = urlencoding::decode(&raw).ok()?;
    serde_json::from_str(&decoded).ok()
}

pub fn write_attribution(store: &impl CookieStore, record: &AttributionRecord) {
    match serde_json::to_string(record) {
        Ok(json) => store.set(ATTR_COOKIE_NAME, &urlencoding::encode(&json)),
        Err(err) => gloo_console::warn!("failed to serialize attribution", err.to_string()),
    }
}

/// Runs the reconciler for the current navigation. Never throws to the
/// caller; every failure degrades to skipping the side effect.
fn capture_visit(path: &str, query: &str) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };

    // The router can momentarily report an empty query right after hydration;
    // re-parse straight from the location in that case.
    let query = if query.is_empty() {
        window.location().search().unwrap_or_default()
    } else {
        query.to_string()
    };
    let params = CampaignParams::from_query(&query);

    let url = window
        .location()
        .href()
        .unwrap_or_else(|_| path.to_string());
    let referrer = window
        .document()
        .map(|d| d.referrer())
        .filter(|r| !r.is_empty());
    let visit = Visit {
        url,
        referrer: referrer.clone(),
        now: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    };

    let store = BrowserCookies;
    let existing = read_attribution(&store);
    let has_guest_id = store.get(GUEST_ID_COOKIE_NAME).is_some();
    let (record, action) = reconcile(existing, &params, &visit, has_guest_id);
    write_attribution(&store, &record);
    log::debug!("attribution updated: {:?}", record);

    if action != RemoteAction::CreateAnonymousLead {
        return;
    }
    let leads = match GuestLeadStore::from_config() {
        Some(leads) => leads,
        None => return,
    };

    let guest_id = uuid::Uuid::new_v4().to_string();
    // Optimistic: the id cookie is set before the network call resolves so a
    // form submission on the same page load can already see it. The create is
    // an upsert-by-id, which absorbs the resulting write race.
    store.set(GUEST_ID_COOKIE_NAME, &guest_id);

    let landing_page = path.to_string();
    spawn_local(async move {
        if let Err(err) = leads
            .create_anonymous(&guest_id, &record, &landing_page, referrer.as_deref())
            .await
        {
            gloo_console::warn!("anonymous guest lead create failed:", err.to_string());
            analytics::track_event(
                "guest_visit_capture_failed",
                &serde_json::json!({ "error_message": err.to_string() }),
            );
        }
    });
}

/// Invisible component mounted under the router; re-runs the reconciler on
/// every path or query-string change.
#[function_component(AttributionCapture)]
pub fn attribution_capture() -> Html {
    let location = use_location();
    let deps = location
        .as_ref()
        .map(|l| (l.path().to_string(), l.query_str().to_string()));

    use_effect_with_deps(
        move |deps| {
            if let Some((path, query)) = deps {
                capture_visit(path, query);
            }
            || ()
        },
        deps,
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::memory::MemoryCookies;

    fn visit(url: &str, now: &str) -> Visit {
        Visit {
            url: url.to_string(),
            referrer: Some("https://google.com/".to_string()),
            now: now.to_string(),
        }
    }

    #[test]
    fn parses_recognised_params_only() {
        let params =
            CampaignParams::from_query("?utm_source=google&utm_campaign=beta&foo=bar&gclid=x1");
        assert_eq!(params.utm_source.as_deref(), Some("google"));
        assert_eq!(params.utm_campaign.as_deref(), Some("beta"));
        assert_eq!(params.gclid.as_deref(), Some("x1"));
        assert_eq!(params.utm_medium, None);
        assert!(params.has_any());
    }

    #[test]
    fn decodes_percent_and_plus_encoding() {
        let params = CampaignParams::from_query("utm_term=best+dentists%20austin");
        assert_eq!(params.utm_term.as_deref(), Some("best dentists austin"));
    }

    #[test]
    fn empty_query_has_no_params() {
        assert!(!CampaignParams::from_query("").has_any());
        assert!(!CampaignParams::from_query("?utm_source=").has_any());
    }

    #[test]
    fn first_tagged_visit_creates_record_and_lead() {
        let params = CampaignParams::from_query("?utm_source=google&utm_campaign=beta");
        let (record, action) = reconcile(None, &params, &visit("https://x.com/?utm_source=google&utm_campaign=beta", "t0"), false);
        assert_eq!(record.utm_source.as_deref(), Some("google"));
        assert_eq!(record.utm_campaign.as_deref(), Some("beta"));
        assert_eq!(record.first_touch_ts.as_deref(), Some("t0"));
        assert_eq!(record.first_touch_ts, record.last_touch_ts);
        assert_eq!(record.first_landing_url, record.last_landing_url);
        assert_eq!(action, RemoteAction::CreateAnonymousLead);
    }

    #[test]
    fn first_direct_visit_creates_record_without_lead() {
        let params = CampaignParams::default();
        let (record, action) = reconcile(None, &params, &visit("https://x.com/", "t0"), false);
        assert_eq!(record.utm_source, None);
        assert_eq!(record.first_touch_ts.as_deref(), Some("t0"));
        assert_eq!(action, RemoteAction::None);
    }

    #[test]
    fn direct_revisit_preserves_campaign_and_first_touch() {
        let tagged = CampaignParams::from_query("utm_source=google&utm_campaign=beta");
        let (first, _) = reconcile(None, &tagged, &visit("https://x.com/?utm_source=google", "t0"), false);

        let (second, action) = reconcile(
            Some(first.clone()),
            &CampaignParams::default(),
            &visit("https://x.com/pricing", "t1"),
            true,
        );
        assert_eq!(second.utm_source, first.utm_source);
        assert_eq!(second.utm_campaign, first.utm_campaign);
        assert_eq!(second.first_touch_ts.as_deref(), Some("t0"));
        assert_eq!(second.first_landing_url, first.first_landing_url);
        assert_eq!(second.last_touch_ts.as_deref(), Some("t1"));
        assert_eq!(second.last_landing_url.as_deref(), Some("https://x.com/pricing"));
        assert_eq!(action, RemoteAction::None);
    }

    #[test]
    fn new_params_merge_field_wise() {
        let tagged = CampaignParams::from_query("utm_source=google&utm_campaign=beta");
        let (first, _) = reconcile(None, &tagged, &visit("https://x.com/", "t0"), false);

        // Later visit only carries a click id: campaign fields not present in
        // the new parameters are kept.
        let retag = CampaignParams::from_query("msclkid=m1");
        let (second, _) = reconcile(Some(first), &retag, &visit("https://x.com/b", "t1"), true);
        assert_eq!(second.utm_source.as_deref(), Some("google"));
        assert_eq!(second.utm_campaign.as_deref(), Some("beta"));
        assert_eq!(second.msclkid.as_deref(), Some("m1"));
        assert_eq!(second.first_touch_ts.as_deref(), Some("t0"));
    }

    #[test]
    fn tagged_revisit_without_guest_id_requests_create() {
        // First visit was direct, a later visit in the window carries tags.
        let (first, action) = reconcile(
            None,
            &CampaignParams::default(),
            &visit("https://x.com/", "t0"),
            false,
        );
        assert_eq!(action, RemoteAction::None);

        let tagged = CampaignParams::from_query("gclid=g1");
        let (_, action) = reconcile(Some(first.clone()), &tagged, &visit("https://x.com/", "t1"), false);
        assert_eq!(action, RemoteAction::CreateAnonymousLead);

        // With the id cookie already present no second create happens.
        let (_, action) = reconcile(Some(first), &tagged, &visit("https://x.com/", "t2"), true);
        assert_eq!(action, RemoteAction::None);
    }

    #[test]
    fn reconcile_is_idempotent_for_unchanged_input() {
        let tagged = CampaignParams::from_query("utm_source=google");
        let (first, _) = reconcile(None, &tagged, &visit("https://x.com/", "t0"), false);
        let (again, action) = reconcile(Some(first.clone()), &tagged, &visit("https://x.com/", "t0"), true);
        assert_eq!(first, again);
        assert_eq!(action, RemoteAction::None);
    }

    #[test]
    fn cookie_round_trip_preserves_record() {
        let jar = MemoryCookies::default();
        let tagged = CampaignParams::from_query("utm_source=google&utm_term=best+dentists");
        let (record, _) = reconcile(None, &tagged, &visit("https://x.com/?a=b", "t0"), false);
        write_attribution(&jar, &record);
        assert_eq!(read_attribution(&jar), Some(record));
    }

    #[test]
    fn malformed_cookie_reads_as_absent() {
        let jar = MemoryCookies::default();
        jar.set(ATTR_COOKIE_NAME, "%7Bnot-json");
        assert_eq!(read_attribution(&jar), None);
    }
}
