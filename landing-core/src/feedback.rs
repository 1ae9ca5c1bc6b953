//! Temporary "clicked" feedback on buttons.
//!
//! A click swaps the label and background for a fixed window, then puts the
//! original label back. Clicking again inside the window restarts it and
//! still restores the label captured by the first click.

use std::collections::HashMap;
use std::time::Duration;

use tracing::info;

use crate::config::FeedbackConfig;
use crate::error::{LandingError, Result};
use crate::timer::{Scheduler, Tick, TimerId};
use crate::view::{ButtonId, LandingView};

#[derive(Debug, Clone)]
struct Active {
    original: String,
    restore: TimerId,
}

#[derive(Debug)]
pub struct ButtonFeedback {
    config: FeedbackConfig,
    duration: Duration,
    active: HashMap<ButtonId, Active>,
}

impl ButtonFeedback {
    pub fn new(config: FeedbackConfig, duration: Duration) -> Self {
        Self {
            config,
            duration,
            active: HashMap::new(),
        }
    }

    pub fn activate(
        &mut self,
        button: ButtonId,
        view: &mut impl LandingView,
        scheduler: &mut impl Scheduler,
    ) -> Result<()> {
        let original = match self.active.remove(&button) {
            Some(active) => {
                scheduler.clear(active.restore);
                active.original
            }
            None => view
                .button_label(button)
                .ok_or_else(|| LandingError::UnknownButton(format!("#{}", button.0)))?,
        };
        info!("[landing][button] clicked: {}", original.trim());

        view.set_button(button, &self.config.label, Some(&self.config.color));
        let restore = scheduler.set_timeout(self.duration, Tick::RestoreButton(button));
        self.active.insert(button, Active { original, restore });
        Ok(())
    }

    /// Restore timer fired. Ignored unless it is the button's current timer.
    pub fn on_restore(&mut self, button: ButtonId, timer: TimerId, view: &mut impl LandingView) {
        if self.active.get(&button).is_none_or(|a| a.restore != timer) {
            return;
        }
        if let Some(active) = self.active.remove(&button) {
            view.set_button(button, &active.original, None);
        }
    }

    pub fn is_active(&self, button: ButtonId) -> bool {
        self.active.contains_key(&button)
    }

    /// Button showing feedback whose captured label is `label`. Lowest id wins.
    pub fn find_by_original(&self, label: &str) -> Option<ButtonId> {
        let label = label.trim();
        self.active
            .iter()
            .filter(|(_, a)| a.original.trim() == label)
            .map(|(id, _)| *id)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingView;
    use crate::timer::VirtualScheduler;

    fn feedback() -> ButtonFeedback {
        ButtonFeedback::new(FeedbackConfig::default(), Duration::from_secs(2))
    }

    #[test]
    fn unknown_button_is_an_error() {
        let mut view = RecordingView::landing_page();
        let mut scheduler = VirtualScheduler::new();
        let err = feedback()
            .activate(ButtonId(42), &mut view, &mut scheduler)
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown button '#42'");
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn stale_restore_is_ignored() {
        let mut view = RecordingView::landing_page();
        let mut scheduler = VirtualScheduler::new();
        let mut fb = feedback();
        fb.activate(ButtonId(0), &mut view, &mut scheduler).unwrap();
        fb.on_restore(ButtonId(0), TimerId::new(999), &mut view);
        assert!(fb.is_active(ButtonId(0)));
        assert_eq!(view.buttons[0].label, "✓ Clicked!");
    }

    #[test]
    fn active_button_is_found_by_captured_label() {
        let mut view = RecordingView::landing_page();
        let mut scheduler = VirtualScheduler::new();
        let mut fb = feedback();
        assert_eq!(fb.find_by_original("Start"), None);
        fb.activate(ButtonId(0), &mut view, &mut scheduler).unwrap();
        assert_eq!(fb.find_by_original(" Start "), Some(ButtonId(0)));
        assert_eq!(fb.find_by_original("Learn More"), None);
    }
}
