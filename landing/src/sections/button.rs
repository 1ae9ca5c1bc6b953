use leptos::prelude::*;
use tracing::warn;

use crate::runtime::{PageSignals, dispatch};

/// Button that flashes a confirmation label when clicked.
#[component]
pub fn FeedbackButton(label: &'static str, #[prop(optional)] secondary: bool) -> impl IntoView {
    let signals = expect_context::<PageSignals>();
    let (id, button) = signals.register_button(label);
    let class = if secondary { "btn btn-secondary" } else { "btn btn-primary" };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if let Some(Err(e)) = dispatch(|page| page.handle_button_click(id)) {
            warn!("[landing][button] {e}");
        }
    };

    view! {
        <a
            href="#"
            class=class
            style=move || {
                button
                    .background
                    .get()
                    .map(|color| format!("background-color: {color};"))
                    .unwrap_or_default()
            }
            on:click=on_click
        >
            {move || button.label.get()}
        </a>
    }
}
