use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::BRAND;

/// In-page anchor that scrolls smoothly instead of jumping.
#[component]
pub fn NavLink(
    href: &'static str,
    label: &'static str,
    #[prop(default = "nav-link")] class: &'static str,
) -> impl IntoView {
    view! {
        <a href=href class=class on:click=move |ev| smooth_scroll(ev, href)>
            {label}
        </a>
    }
}

/// Selector for an in-page `#anchor` href; `None` for a bare `#` or any
/// other href.
fn scroll_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty()).map(|_| href)
}

/// Scroll the element `href` points at to the top of the viewport.
/// Unknown targets are ignored.
fn smooth_scroll(ev: leptos::ev::MouseEvent, href: &str) {
    ev.prevent_default();
    let Some(selector) = scroll_target(href) else {
        return;
    };
    let Some(target) = document().query_selector(selector).ok().flatten() else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <span class="nav-title">{BRAND}</span>
                </a>
                <div class="nav-links">
                    <NavLink href="#features" label="Features" />
                    <NavLink href="#start" label="Get Started" />
                </div>
            </div>
        </nav>
    }
}
