//! `window.CodePlatform`: the page's public surface for other scripts.
//!
//! ```js
//! CodePlatform.switchTab("python");      // true, or false for unknown tabs
//! CodePlatform.handleButtonClick("Start");
//! CodePlatform.init();
//! ```

use js_sys::{Object, Reflect};
use tracing::warn;
use wasm_bindgen::prelude::*;

use super::dispatch;

fn report(op: &str, result: Option<Result<(), landing_core::LandingError>>) -> bool {
    match result {
        Some(Ok(())) => true,
        Some(Err(e)) => {
            warn!("[landing][api] {op}: {e}");
            false
        }
        None => {
            warn!("[landing][api] {op}: page not initialized");
            false
        }
    }
}

/// Attach `CodePlatform` to `window`.
pub fn expose() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let api = Object::new();

    let switch_tab = Closure::wrap(Box::new(|name: String| {
        report("switchTab", dispatch(|page| page.switch_tab(&name)))
    }) as Box<dyn Fn(String) -> bool>);
    let _ = Reflect::set(&api, &JsValue::from_str("switchTab"), switch_tab.as_ref());
    switch_tab.forget();

    let handle_click = Closure::wrap(Box::new(|label: String| {
        report(
            "handleButtonClick",
            dispatch(|page| page.click_button_labeled(&label)),
        )
    }) as Box<dyn Fn(String) -> bool>);
    let _ = Reflect::set(&api, &JsValue::from_str("handleButtonClick"), handle_click.as_ref());
    handle_click.forget();

    let init = Closure::wrap(Box::new(|| report("init", Some(super::init()))) as Box<dyn Fn() -> bool>);
    let _ = Reflect::set(&api, &JsValue::from_str("init"), init.as_ref());
    init.forget();

    let _ = Reflect::set(&window, &JsValue::from_str("CodePlatform"), &api);
}
