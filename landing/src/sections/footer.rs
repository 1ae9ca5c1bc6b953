use landing_core::SectionKind;
use leptos::prelude::*;

use super::{BRAND, NavLink};
use crate::runtime::PageSignals;

#[component]
pub fn Footer() -> impl IntoView {
    let signals = expect_context::<PageSignals>();
    let (id, style) = signals.register_section(SectionKind::Footer);
    let year = move || signals.footer_year.get().map(|y| y.to_string()).unwrap_or_default();
    view! {
        <footer class="footer" data-section=id.0.to_string() style=move || style.get()>
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">{BRAND}</span>
                </div>
                <div class="footer-links">
                    <NavLink href="#features" label="Features" class="footer-link" />
                    <NavLink href="#start" label="Get Started" class="footer-link" />
                </div>
                <p class="footer-copyright">
                    "© " <span id="current-year">{year}</span> " " {BRAND} ". All rights reserved."
                </p>
            </div>
        </footer>
    }
}
