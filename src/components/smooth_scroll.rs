//! Smooth-scrolls same-page anchor links (`<a href="#...">`) instead of the
//! default jump. Installed once per page via a delegated click listener.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

fn handle_click(event: &MouseEvent) {
    let target = match event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
        Some(target) => target,
        None => return,
    };
    let anchor = match target.closest("a[href^='#']") {
        Ok(Some(anchor)) => anchor,
        _ => return,
    };
    let href = match anchor.get_attribute("href") {
        Some(href) => href,
        None => return,
    };
    let id = href.trim_start_matches('#');
    let section = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(section) = section {
        event.prevent_default();
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(SmoothScrollAnchors)]
pub fn smooth_scroll_anchors() -> Html {
    use_effect_with_deps(
        |_| {
            let document = web_sys::window().and_then(|w| w.document());
            let listener = Closure::<dyn FnMut(MouseEvent)>::new(|event: MouseEvent| {
                handle_click(&event);
            });
            if let Some(document) = document.as_ref() {
                if document
                    .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                    .is_err()
                {
                    gloo_console::warn!("failed to install anchor scroll handler");
                }
            }
            move || {
                if let Some(document) = document {
                    let _ = document
                        .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                }
            }
        },
        (),
    );

    html! {}
}
