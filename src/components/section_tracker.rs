//! Fires a `section_viewed` analytics event the first time each
//! `data-track-section` element scrolls into view. Observation starts after
//! a short delay so the initial render and font loading settle first.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde_json::json;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::analytics;

const SECTION_SCAN_DELAY_MS: u32 = 2_500;
const SECTION_VIEW_THRESHOLD: f64 = 0.3;

type ObserverParts = (IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>);

fn observe_sections(holder: &Rc<RefCell<Option<ObserverParts>>>) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };
    let sections = match document.query_selector_all("[data-track-section]") {
        Ok(list) if list.length() > 0 => list,
        _ => return,
    };

    let fired = Rc::new(RefCell::new(HashSet::<String>::new()));
    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let name = match entry.target().get_attribute("data-track-section") {
                    Some(name) => name,
                    None => continue,
                };
                if fired.borrow_mut().insert(name.clone()) {
                    analytics::track_event("section_viewed", &json!({ "section_name": name }));
                }
            }
        },
    );

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(SECTION_VIEW_THRESHOLD));
    let observer = match IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            gloo_console::warn!("section tracking unavailable:", err);
            return;
        }
    };

    for i in 0..sections.length() {
        if let Some(node) = sections.item(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                observer.observe(&element);
            }
        }
    }
    *holder.borrow_mut() = Some((observer, on_intersect));
}

#[function_component(SectionTracker)]
pub fn section_tracker() -> Html {
    use_effect_with_deps(
        |_| {
            let holder: Rc<RefCell<Option<ObserverParts>>> = Rc::new(RefCell::new(None));
            let timer = {
                let holder = holder.clone();
                Timeout::new(SECTION_SCAN_DELAY_MS, move || observe_sections(&holder))
            };
            move || {
                drop(timer);
                if let Some((observer, _callback)) = holder.borrow_mut().take() {
                    observer.disconnect();
                }
            }
        },
        (),
    );

    html! {}
}
