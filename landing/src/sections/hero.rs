use leptos::prelude::*;

use super::{CodeWindow, FeedbackButton};
use crate::runtime::PageSignals;

/// Title shown in the hero; the typing effect replays it.
pub const HERO_TITLE: &str = "Learn to code, one line at a time.";

#[component]
pub fn Hero() -> impl IntoView {
    let signals = expect_context::<PageSignals>();
    view! {
        <section
            class="hero"
            style=move || format!("transform: translateY({}px);", signals.hero_offset.get())
        >
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            "Java, Python and C++ in your browser"
                        </div>
                        <h1 class="hero-title">{move || signals.hero_title.get()}</h1>
                        <p class="hero-description">
                            "Hands-on lessons, real projects and instant feedback. "
                            "Write your first program in minutes and keep going from there."
                        </p>
                        <div class="hero-actions">
                            <FeedbackButton label="Start Learning" />
                            <FeedbackButton label="View Courses" secondary=true />
                        </div>
                    </div>
                    <CodeWindow />
                </div>
            </div>
        </section>
    }
}
