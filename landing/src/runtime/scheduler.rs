//! [`Scheduler`] on top of `window.setInterval` / `window.setTimeout`.
//!
//! Timer callbacks never touch the controller. They post `(TimerId, Tick)`
//! into a channel that [`super::pump`] drains, so a tick always runs after
//! the handler that was executing when it fired.

use std::collections::HashMap;
use std::time::Duration;

use futures::channel::mpsc::UnboundedSender;
use landing_core::{Scheduler, Tick, TimerId};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    Interval,
    Timeout,
}

struct BrowserTimer {
    handle: i32,
    kind: Kind,
    _callback: Closure<dyn FnMut()>,
}

pub struct WindowScheduler {
    tx: UnboundedSender<(TimerId, Tick)>,
    next_id: u64,
    timers: HashMap<TimerId, BrowserTimer>,
}

impl WindowScheduler {
    pub fn new(tx: UnboundedSender<(TimerId, Tick)>) -> Self {
        Self {
            tx,
            next_id: 0,
            timers: HashMap::new(),
        }
    }

    /// Drop the callback of a timeout that has fired. Intervals stay armed.
    pub fn retire(&mut self, id: TimerId) {
        if self.timers.get(&id).is_some_and(|t| t.kind == Kind::Timeout) {
            self.timers.remove(&id);
        }
    }

    fn arm(&mut self, kind: Kind, after: Duration, tick: Tick) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        let tx = self.tx.clone();
        let callback = Closure::wrap(Box::new(move || {
            let _ = tx.unbounded_send((id, tick));
        }) as Box<dyn FnMut()>);

        let millis = i32::try_from(after.as_millis()).unwrap_or(i32::MAX);
        let Some(window) = web_sys::window() else {
            warn!("[landing][timer] no window, {tick:?} will never fire");
            return id;
        };
        let armed = match kind {
            Kind::Interval => window.set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ),
            Kind::Timeout => window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ),
        };
        match armed {
            Ok(handle) => {
                self.timers.insert(
                    id,
                    BrowserTimer {
                        handle,
                        kind,
                        _callback: callback,
                    },
                );
            }
            Err(e) => warn!("[landing][timer] failed to arm {tick:?}: {e:?}"),
        }
        id
    }
}

impl Scheduler for WindowScheduler {
    fn set_interval(&mut self, period: Duration, tick: Tick) -> TimerId {
        self.arm(Kind::Interval, period, tick)
    }

    fn set_timeout(&mut self, delay: Duration, tick: Tick) -> TimerId {
        self.arm(Kind::Timeout, delay, tick)
    }

    fn clear(&mut self, id: TimerId) {
        let Some(timer) = self.timers.remove(&id) else {
            return;
        };
        if let Some(window) = web_sys::window() {
            match timer.kind {
                Kind::Interval => window.clear_interval_with_handle(timer.handle),
                Kind::Timeout => window.clear_timeout_with_handle(timer.handle),
            }
        }
    }
}
