//! Optional hero effects: scroll parallax and a typewriter title.

use std::time::Duration;

use crate::timer::{Scheduler, Tick, TimerId};
use crate::view::LandingView;

/// Hero vertical offset for a given scroll position.
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

/// Reveals the hero title one character per tick.
#[derive(Debug)]
pub struct TypingAnimation {
    text: Vec<char>,
    shown: usize,
    timer: Option<TimerId>,
}

impl TypingAnimation {
    /// Clear the title and start revealing it. Returns `None` when the view
    /// has no title to animate.
    pub fn start(
        view: &mut impl LandingView,
        scheduler: &mut impl Scheduler,
        step: Duration,
    ) -> Option<Self> {
        let text: Vec<char> = view.hero_title()?.chars().collect();
        if text.is_empty() {
            return None;
        }
        view.set_hero_title("");
        Some(Self {
            text,
            shown: 0,
            timer: Some(scheduler.set_interval(step, Tick::TypeNext)),
        })
    }

    pub fn on_step(&mut self, timer: TimerId, view: &mut impl LandingView, scheduler: &mut impl Scheduler) {
        if self.timer != Some(timer) {
            return;
        }
        self.shown += 1;
        let visible: String = self.text[..self.shown].iter().collect();
        view.set_hero_title(&visible);
        if self.is_done() {
            self.stop(scheduler);
        }
    }

    pub fn stop(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(id) = self.timer.take() {
            scheduler.clear(id);
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.len()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}
