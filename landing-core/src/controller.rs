//! The landing page controller.
//!
//! Owns the view, the scheduler and the three sub-controllers. Every browser
//! event and every fired timer goes through one of its methods.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::animation::EntranceAnimator;
use crate::config::LandingConfig;
use crate::effects::{TypingAnimation, parallax_offset};
use crate::error::{LandingError, Result};
use crate::feedback::ButtonFeedback;
use crate::rotation::{RotationState, TabRotation};
use crate::samples::{CodeSample, SampleCatalog};
use crate::timer::{Scheduler, Tick, TimerId, VirtualScheduler};
use crate::view::{ButtonId, LandingView, SectionId};

pub struct LandingController<V, S> {
    view: V,
    scheduler: S,
    config: LandingConfig,
    rotation: TabRotation,
    animator: EntranceAnimator,
    feedback: ButtonFeedback,
    typing: Option<TypingAnimation>,
    hidden: bool,
    initialized: bool,
}

impl<V: LandingView, S: Scheduler> LandingController<V, S> {
    pub fn new(view: V, scheduler: S, config: LandingConfig) -> Self {
        Self::with_catalog(view, scheduler, config, SampleCatalog::builtin())
    }

    pub fn with_catalog(view: V, scheduler: S, config: LandingConfig, catalog: SampleCatalog) -> Self {
        Self {
            rotation: TabRotation::new(catalog, config.timing.clone()),
            animator: EntranceAnimator::new(config.animation.clone()),
            feedback: ButtonFeedback::new(config.feedback.clone(), config.timing.feedback()),
            typing: None,
            hidden: false,
            initialized: false,
            view,
            scheduler,
            config,
        }
    }

    /// Wire the page up: check required elements, paint the first sample,
    /// hide animated sections, stamp the footer year and start rotating.
    ///
    /// Fails without touching the view if the code panel or the tabs are
    /// missing, if a tab names a sample the catalog does not have, or if a
    /// sample has no tab to mark active.
    pub fn init(&mut self, year: i32) -> Result<()> {
        if self.initialized {
            return Err(LandingError::AlreadyInitialized);
        }
        if !self.view.has_code_panel() {
            return Err(LandingError::MissingElement("code panel (#code-content)"));
        }
        let tabs = self.view.tab_ids();
        if tabs.is_empty() {
            return Err(LandingError::MissingElement("code tabs (.tab)"));
        }
        if let Some(unknown) = tabs.iter().find(|t| self.rotation.catalog().get(t).is_none()) {
            return Err(LandingError::UnknownTab(unknown.clone()));
        }
        let untabbed = self.rotation.catalog().iter().find(|s| !tabs.iter().any(|t| t == s.id));
        if let Some(sample) = untabbed {
            warn!("[landing] no tab control for sample '{}'", sample.id);
            return Err(LandingError::MissingElement("code tab (.tab) for every sample"));
        }

        self.view.set_footer_year(year);
        self.rotation.render_current(&mut self.view);
        for (id, kind) in self.view.sections() {
            self.animator.track(id, kind, &mut self.view);
        }
        if self.config.effects.typing {
            self.typing = TypingAnimation::start(
                &mut self.view,
                &mut self.scheduler,
                self.config.timing.typing_step(),
            );
        }
        self.rotation.start(&mut self.scheduler);
        self.initialized = true;
        info!(
            "[landing] initialized: {} tabs, {} animated sections",
            tabs.len(),
            self.animator.sections().len()
        );
        Ok(())
    }

    /// Manual tab selection. Pauses rotation for the grace period.
    pub fn switch_tab(&mut self, name: &str) -> Result<()> {
        self.rotation.select(name, &mut self.view, &mut self.scheduler)
    }

    pub fn start_rotation(&mut self) {
        self.rotation.start(&mut self.scheduler);
    }

    pub fn stop_rotation(&mut self) {
        self.rotation.stop(&mut self.scheduler);
    }

    pub fn handle_button_click(&mut self, button: ButtonId) -> Result<()> {
        self.feedback.activate(button, &mut self.view, &mut self.scheduler)
    }

    /// Click the button labeled `label`. A button still showing feedback is
    /// found by the label it will restore.
    pub fn click_button_labeled(&mut self, label: &str) -> Result<()> {
        let button = self
            .feedback
            .find_by_original(label)
            .or_else(|| self.view.find_button(label))
            .ok_or_else(|| LandingError::UnknownButton(label.to_string()))?;
        self.handle_button_click(button)
    }

    /// Page visibility changed. Showing the page only restarts rotation
    /// once `init` has succeeded.
    pub fn set_page_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
        if hidden {
            self.rotation.suspend(&mut self.scheduler);
        } else if self.initialized {
            self.rotation.start(&mut self.scheduler);
        }
        debug!("[landing] page hidden={hidden}");
    }

    /// Visible fraction of an animated section changed.
    pub fn on_section_visibility(&mut self, section: SectionId, ratio: f64) -> bool {
        self.animator.observe(section, ratio, &mut self.view)
    }

    /// The browser already decided the section crossed the threshold.
    pub fn on_section_intersecting(&mut self, section: SectionId) -> bool {
        self.animator.reveal(section, &mut self.view)
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        if self.config.effects.parallax {
            let offset = parallax_offset(scroll_y, self.config.effects.parallax_rate);
            self.view.set_hero_offset(offset);
        }
    }

    pub fn on_resize(&mut self, width: f64, height: f64) {
        debug!("[landing] window resized to {width}x{height}");
    }

    /// A timer fired.
    pub fn on_timer(&mut self, timer: TimerId, tick: Tick) {
        match tick {
            Tick::Rotate => self.rotation.on_rotate(timer, &mut self.view, &mut self.scheduler),
            Tick::ResumeRotation => self.rotation.on_resume(timer, &mut self.scheduler),
            Tick::FadeIn => self.rotation.on_fade_in(timer, &mut self.view),
            Tick::RestoreButton(button) => self.feedback.on_restore(button, timer, &mut self.view),
            Tick::TypeNext => {
                if let Some(typing) = self.typing.as_mut() {
                    typing.on_step(timer, &mut self.view, &mut self.scheduler);
                }
            }
        }
    }

    pub fn current_tab(&self) -> &CodeSample {
        self.rotation.current()
    }

    pub fn rotation_state(&self) -> RotationState {
        self.rotation.state()
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_running()
    }

    pub fn resume_pending(&self) -> bool {
        self.rotation.resume_pending()
    }

    pub fn is_section_entered(&self, section: SectionId) -> bool {
        self.animator.is_entered(section)
    }

    pub fn is_feedback_active(&self, button: ButtonId) -> bool {
        self.feedback.is_active(button)
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<V: LandingView> LandingController<V, VirtualScheduler> {
    /// Move the virtual clock forward by `by`, firing every timer that comes
    /// due, including ones scheduled by handlers along the way.
    pub fn advance(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;
        while let Some((timer, tick)) = self.scheduler.pop_due(until) {
            self.on_timer(timer, tick);
        }
        self.scheduler.set_now(until);
    }
}

#[cfg(test)]
mod tests;
