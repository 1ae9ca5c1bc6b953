//! Document and window listeners feeding the controller.

use landing_core::SectionId;
use landing_core::config::AnimationConfig;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dispatch;

/// Hook up visibility, scroll, resize and the entrance observer.
pub fn install(animation: &AnimationConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    // Pause rotation while the page is hidden
    let doc = document.clone();
    let on_visibility = Closure::wrap(Box::new(move || {
        let hidden = doc.hidden();
        dispatch(|page| page.set_page_hidden(hidden));
    }) as Box<dyn FnMut()>);
    let _ = document
        .add_event_listener_with_callback("visibilitychange", on_visibility.as_ref().unchecked_ref());
    on_visibility.forget();

    let win = window.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        dispatch(|page| page.on_scroll(scroll_y));
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();

    let win = window.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        dispatch(|page| page.on_resize(width, height));
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();

    observe_sections(&document, animation);
}

/// Watch every `[data-section]` element and reveal it once it intersects.
fn observe_sections(document: &web_sys::Document, animation: &AnimationConfig) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(id) = section_id(&target) else {
                    continue;
                };
                if dispatch(|page| page.on_section_intersecting(id)).unwrap_or(false) {
                    // Entrance is one-way, nothing left to watch.
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(animation.threshold));
    init.set_root_margin(&animation.root_margin());

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
    {
        Ok(observer) => observer,
        Err(e) => {
            warn!("[landing][animate] IntersectionObserver unavailable: {e:?}");
            return;
        }
    };
    callback.forget();

    let Ok(nodes) = document.query_selector_all("[data-section]") else {
        return;
    };
    let mut watched = 0;
    for node in (0..nodes.length()).filter_map(|i| nodes.item(i)) {
        if let Ok(el) = node.dyn_into::<web_sys::Element>() {
            observer.observe(&el);
            watched += 1;
        }
    }
    debug!("[landing][animate] observing {watched} sections");
}

fn section_id(el: &web_sys::Element) -> Option<SectionId> {
    el.get_attribute("data-section")?.parse().ok().map(SectionId)
}
