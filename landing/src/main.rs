// CodePlatform Landing Page, Leptos 0.8 Edition
// Developed with 💀 by The CodePlatform Team (c)2025

mod logging;
mod runtime;
mod sections;

use leptos::prelude::*;
use runtime::PageSignals;
use sections::*;
use tracing::{error, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = runtime::read_config();
    logging::init(&config.log_level);
    if let Some(e) = config_error {
        warn!("[landing][config] {e}; using defaults");
    }

    let signals = PageSignals::new(HERO_TITLE);
    leptos::mount::mount_to_body(move || {
        provide_context(signals);
        view! { <App/> }
    });

    if let Err(e) = runtime::start(signals, config) {
        error!("[landing] init failed: {e}");
    }
    runtime::expose();
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <Features />
            <CallToAction />
        </main>
        <Footer />
    }
}
