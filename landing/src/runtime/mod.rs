//! Browser runtime: owns the single [`LandingController`] and routes events,
//! timer ticks and JS API calls into it.

mod api;
mod listeners;
mod scheduler;
mod signals;

use std::cell::RefCell;

use futures::StreamExt;
use futures::channel::mpsc::{self, UnboundedReceiver};
use landing_core::{LandingConfig, LandingController, LandingError, Tick, TimerId};
use tracing::{info, warn};

pub use api::expose;
pub use scheduler::WindowScheduler;
pub use signals::{CODE_PANEL_ID, PageSignals, SignalView};

pub type PageController = LandingController<SignalView, WindowScheduler>;

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
    static BOOT: RefCell<Option<(PageSignals, LandingConfig)>> = const { RefCell::new(None) };
}

/// Build the controller, run its init and start listening.
///
/// Nothing is installed when init fails; [`init`] can retry later.
pub fn start(signals: PageSignals, config: LandingConfig) -> Result<(), LandingError> {
    BOOT.with(|boot| *boot.borrow_mut() = Some((signals, config.clone())));

    let (tx, rx) = mpsc::unbounded();
    let animation = config.animation.clone();
    let mut controller = LandingController::new(SignalView::new(signals), WindowScheduler::new(tx), config);
    controller.init(current_year())?;

    CONTROLLER.with(|cell| *cell.borrow_mut() = Some(controller));
    wasm_bindgen_futures::spawn_local(pump(rx));
    listeners::install(&animation);
    info!("[landing] controller running");
    Ok(())
}

/// Idempotent init: a no-op once the controller runs, otherwise retries the
/// last [`start`] that failed.
pub fn init() -> Result<(), LandingError> {
    if CONTROLLER.with(|cell| cell.borrow().is_some()) {
        return Ok(());
    }
    let Some((signals, config)) = BOOT.with(|boot| boot.borrow().clone()) else {
        return Err(LandingError::MissingElement("landing page root"));
    };
    start(signals, config)
}

/// Run `f` against the controller. `None` before init or if the controller
/// is already borrowed further up the stack.
pub fn dispatch<T>(f: impl FnOnce(&mut PageController) -> T) -> Option<T> {
    CONTROLLER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => {
            warn!("[landing] controller busy, event dropped");
            None
        }
    })
}

async fn pump(mut rx: UnboundedReceiver<(TimerId, Tick)>) {
    while let Some((timer, tick)) = rx.next().await {
        dispatch(|page| {
            page.scheduler_mut().retire(timer);
            page.on_timer(timer, tick);
        });
    }
}

fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Read the optional `<script id="landing-config">` JSON block.
pub fn read_config() -> (LandingConfig, Option<LandingError>) {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("landing-config"))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());
    match raw.as_deref().map(LandingConfig::from_json) {
        None => (LandingConfig::default(), None),
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (LandingConfig::default(), Some(e)),
    }
}
