//! First-party cookie access.
//!
//! All persisted state lives in two cookies: the attribution blob and the
//! guest lead id. Access goes through the `CookieStore` trait so the
//! attribution and lead-submission logic can be exercised against an
//! in-memory jar in tests.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

pub const ATTR_COOKIE_NAME: &str = "seobot_attr";
pub const GUEST_ID_COOKIE_NAME: &str = "seobot_guest_id";
pub const COOKIE_MAX_AGE_DAYS: u32 = 90;

/// Splits a raw `document.cookie` string into name/value pairs. Malformed
/// fragments (missing name, stray separators) are skipped, never an error.
pub fn parse_cookie_header(raw: &str) -> Vec<(String, String)> {
    raw.split(';')
        .filter_map(|part| {
            let mut it = part.splitn(2, '=');
            let name = it.next()?.trim();
            if name.is_empty() {
                return None;
            }
            let value = it.next().unwrap_or("");
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}

pub trait CookieStore {
    fn get(&self, name: &str) -> Option<String>;
    /// Sets a cookie with the fixed site policy: `Path=/`, 90-day max-age,
    /// `SameSite=Lax`. The value must already be cookie-safe (URL-encoded
    /// where needed).
    fn set(&self, name: &str, value: &str);
    fn clear(&self, name: &str);
}

/// `document.cookie`-backed store used in the browser.
pub struct BrowserCookies;

impl BrowserCookies {
    fn html_document() -> Option<HtmlDocument> {
        web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
    }
}

impl CookieStore for BrowserCookies {
    fn get(&self, name: &str) -> Option<String> {
        let raw = Self::html_document()?.cookie().ok()?;
        parse_cookie_header(&raw)
            .into_iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    fn set(&self, name: &str, value: &str) {
        if let Some(document) = Self::html_document() {
            let max_age = COOKIE_MAX_AGE_DAYS * 24 * 60 * 60;
            let line = format!("{}={}; Path=/; Max-Age={}; SameSite=Lax", name, value, max_age);
            if document.set_cookie(&line).is_err() {
                gloo_console::warn!("failed to set cookie", name);
            }
        }
    }

    fn clear(&self, name: &str) {
        if let Some(document) = Self::html_document() {
            let line = format!("{}=; Path=/; Max-Age=0; SameSite=Lax", name);
            let _ = document.set_cookie(&line);
        }
    }
}

#[cfg(test)]
pub mod memory {
    use super::CookieStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory jar standing in for `document.cookie` in tests.
    #[derive(Default)]
    pub struct MemoryCookies {
        jar: RefCell<HashMap<String, String>>,
    }

    impl CookieStore for MemoryCookies {
        fn get(&self, name: &str) -> Option<String> {
            self.jar.borrow().get(name).cloned()
        }

        fn set(&self, name: &str, value: &str) {
            self.jar.borrow_mut().insert(name.to_string(), value.to_string());
        }

        fn clear(&self, name: &str) {
            self.jar.borrow_mut().remove(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryCookies;
    use super::*;

    #[test]
    fn parses_simple_header() {
        let pairs = parse_cookie_header("a=1; b=2");
        assert_eq!(
            pairs,
            vec![("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn keeps_equals_signs_in_values() {
        let pairs = parse_cookie_header("seobot_attr=%7B%22a%22%3A%22b%3Dc%22%7D; x=y=z");
        assert_eq!(pairs[0].1, "%7B%22a%22%3A%22b%3Dc%22%7D");
        assert_eq!(pairs[1].1, "y=z");
    }

    #[test]
    fn skips_malformed_fragments() {
        let pairs = parse_cookie_header(";; =orphan; ok=1;");
        assert_eq!(pairs, vec![("ok".to_string(), "1".to_string())]);
    }

    #[test]
    fn memory_store_round_trip() {
        let jar = MemoryCookies::default();
        assert_eq!(jar.get(GUEST_ID_COOKIE_NAME), None);
        jar.set(GUEST_ID_COOKIE_NAME, "abc");
        assert_eq!(jar.get(GUEST_ID_COOKIE_NAME), Some("abc".to_string()));
        jar.clear(GUEST_ID_COOKIE_NAME);
        assert_eq!(jar.get(GUEST_ID_COOKIE_NAME), None);
    }
}
