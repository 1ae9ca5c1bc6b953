use landing_core::{CodeSample, SampleCatalog};
use leptos::prelude::*;
use tracing::warn;

use crate::runtime::{CODE_PANEL_ID, PageSignals, dispatch};

/// Editor-style window with one tab per code sample.
#[component]
pub fn CodeWindow() -> impl IntoView {
    let signals = expect_context::<PageSignals>();

    let tabs = SampleCatalog::builtin()
        .iter()
        .map(|sample| {
            let CodeSample { id, label, .. } = *sample;
            view! {
                <button
                    class=move || if signals.active_tab.get() == id { "tab active" } else { "tab" }
                    data-tab=id
                    on:click=move |_| {
                        if let Some(Err(e)) = dispatch(|page| page.switch_tab(id)) {
                            warn!("[landing][tabs] {e}");
                        }
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="code-window">
            <div class="code-header">
                <div class="code-dot red"></div>
                <div class="code-dot yellow"></div>
                <div class="code-dot green"></div>
                <div class="tabs">{tabs}</div>
            </div>
            <pre
                id=CODE_PANEL_ID
                class=move || signals.sample.get().map(|s| s.style_class).unwrap_or_default()
                style=move || format!("opacity: {};", signals.code_opacity.get())
            >
                <code>{move || signals.sample.get().map(|s| s.code).unwrap_or_default()}</code>
            </pre>
        </div>
    }
}
