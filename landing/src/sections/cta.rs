use landing_core::SectionKind;
use leptos::prelude::*;

use super::FeedbackButton;
use crate::runtime::PageSignals;

#[component]
pub fn CallToAction() -> impl IntoView {
    let signals = expect_context::<PageSignals>();
    let (id, style) = signals.register_section(SectionKind::CallToAction);
    view! {
        <section id="start" class="cta" data-section=id.0.to_string() style=move || style.get()>
            <div class="container">
                <h2 class="section-title">"Ready to write your first program?"</h2>
                <p class="section-description">
                    "Join a community of learners. No installs, no setup, just code."
                </p>
                <FeedbackButton label="Start" />
            </div>
        </section>
    }
}
