use landing_core::SectionKind;
use leptos::prelude::*;

use super::BRAND;
use crate::runtime::PageSignals;

#[component]
pub fn Features() -> impl IntoView {
    let eyebrow = format!("Why {BRAND}");
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">{eyebrow}</p>
                    <h2 class="section-title">"Everything you need to start coding"</h2>
                    <p class="section-description">
                        "From your first Hello World to complete projects, at your own pace."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="[1]"
                        title="Interactive Lessons"
                        description="Short lessons with a live editor. Read a concept, then try it right away."
                    />
                    <FeatureCard
                        icon="[2]"
                        title="Three Languages"
                        description="Start with Java, Python or C++ and switch whenever you like."
                    />
                    <FeatureCard
                        icon="[3]"
                        title="Instant Feedback"
                        description="Every exercise is checked as you type, with hints when you get stuck."
                    />
                    <FeatureCard
                        icon="[4]"
                        title="Real Projects"
                        description="Build games, tools and small web apps you can show to others."
                    />
                    <FeatureCard
                        icon="[5]"
                        title="Track Progress"
                        description="Streaks, milestones and a clear path from beginner to confident coder."
                    />
                    <FeatureCard
                        icon="[6]"
                        title="Community"
                        description="Ask questions, review code and learn together with other students."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    let signals = expect_context::<PageSignals>();
    let (id, style) = signals.register_section(SectionKind::FeatureCard);
    view! {
        <div class="feature-card" data-section=id.0.to_string() style=move || style.get()>
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </div>
    }
}
