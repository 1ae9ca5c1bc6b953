//! Code tab rotation.
//!
//! Two states: `Stopped` and `Running`. Manual selection stops the interval
//! and arms a one-shot restart after the grace period; hiding the page stops
//! everything and showing it starts a fresh interval.

use tracing::{debug, warn};

use crate::config::TimingConfig;
use crate::error::Result;
use crate::samples::{CodeSample, SampleCatalog};
use crate::timer::{Scheduler, Tick, TimerId};
use crate::view::LandingView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationState {
    Stopped,
    Running(TimerId),
}

#[derive(Debug)]
pub struct TabRotation {
    catalog: SampleCatalog,
    current: usize,
    state: RotationState,
    resume: Option<TimerId>,
    fade: Option<TimerId>,
    timing: TimingConfig,
}

impl TabRotation {
    pub fn new(catalog: SampleCatalog, timing: TimingConfig) -> Self {
        Self {
            catalog,
            current: 0,
            state: RotationState::Stopped,
            resume: None,
            fade: None,
            timing,
        }
    }

    pub fn catalog(&self) -> &SampleCatalog {
        &self.catalog
    }

    pub fn current(&self) -> &CodeSample {
        self.catalog.at(self.current)
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RotationState::Running(_))
    }

    /// Whether a post-selection restart is waiting to fire.
    pub fn resume_pending(&self) -> bool {
        self.resume.is_some()
    }

    /// Paint the current sample without a fade. Used once at startup.
    pub fn render_current(&self, view: &mut impl LandingView) {
        let sample = *self.current();
        view.set_active_tab(sample.id);
        view.show_sample(&sample);
        view.set_code_opacity(1.0);
    }

    /// Display `id`: move the active marker, swap the code and fade it in.
    pub fn switch_to(
        &mut self,
        id: &str,
        view: &mut impl LandingView,
        scheduler: &mut impl Scheduler,
    ) -> Result<()> {
        let index = self.catalog.position(id).inspect_err(|e| warn!("[landing][tabs] {e}"))?;
        self.show_index(index, view, scheduler);
        Ok(())
    }

    /// Manual selection: stop rotating, switch, restart after the grace period.
    /// An unknown id is rejected before any timer is touched.
    pub fn select(
        &mut self,
        id: &str,
        view: &mut impl LandingView,
        scheduler: &mut impl Scheduler,
    ) -> Result<()> {
        let index = self.catalog.position(id).inspect_err(|e| warn!("[landing][tabs] {e}"))?;
        self.stop(scheduler);
        self.cancel_resume(scheduler);
        self.show_index(index, view, scheduler);
        self.resume = Some(scheduler.set_timeout(self.timing.resume_delay(), Tick::ResumeRotation));
        debug!("[landing][tabs] manual select '{id}', rotation paused");
        Ok(())
    }

    /// Start the interval from the current tab. Replaces a running interval.
    pub fn start(&mut self, scheduler: &mut impl Scheduler) {
        self.stop(scheduler);
        let id = scheduler.set_interval(self.timing.rotation_period(), Tick::Rotate);
        self.state = RotationState::Running(id);
        debug!("[landing][tabs] rotation running");
    }

    pub fn stop(&mut self, scheduler: &mut impl Scheduler) {
        if let RotationState::Running(id) = self.state {
            scheduler.clear(id);
            self.state = RotationState::Stopped;
            debug!("[landing][tabs] rotation stopped");
        }
    }

    /// Page hidden: stop and forget any pending restart.
    pub fn suspend(&mut self, scheduler: &mut impl Scheduler) {
        self.stop(scheduler);
        self.cancel_resume(scheduler);
    }

    /// Interval tick. Stale ticks from a cleared interval are ignored.
    pub fn on_rotate(
        &mut self,
        timer: TimerId,
        view: &mut impl LandingView,
        scheduler: &mut impl Scheduler,
    ) {
        if self.state != RotationState::Running(timer) {
            return;
        }
        let next = self.catalog.next_index(self.current);
        self.show_index(next, view, scheduler);
    }

    pub fn on_resume(&mut self, timer: TimerId, scheduler: &mut impl Scheduler) {
        if self.resume != Some(timer) {
            return;
        }
        self.resume = None;
        self.start(scheduler);
    }

    pub fn on_fade_in(&mut self, timer: TimerId, view: &mut impl LandingView) {
        if self.fade != Some(timer) {
            return;
        }
        self.fade = None;
        view.set_code_opacity(1.0);
    }

    fn cancel_resume(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(id) = self.resume.take() {
            scheduler.clear(id);
        }
    }

    fn show_index(
        &mut self,
        index: usize,
        view: &mut impl LandingView,
        scheduler: &mut impl Scheduler,
    ) {
        self.current = index;
        let sample = *self.catalog.at(index);
        view.set_active_tab(sample.id);
        view.show_sample(&sample);
        view.set_code_opacity(0.0);
        if let Some(id) = self.fade.take() {
            scheduler.clear(id);
        }
        self.fade = Some(scheduler.set_timeout(self.timing.fade_delay(), Tick::FadeIn));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingView;
    use crate::timer::VirtualScheduler;

    fn rotation() -> TabRotation {
        TabRotation::new(SampleCatalog::builtin(), TimingConfig::default())
    }

    #[test]
    fn stop_is_idempotent() {
        let mut tabs = rotation();
        let mut scheduler = VirtualScheduler::new();
        tabs.start(&mut scheduler);
        tabs.stop(&mut scheduler);
        tabs.stop(&mut scheduler);
        assert_eq!(tabs.state(), RotationState::Stopped);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn start_replaces_running_interval() {
        let mut tabs = rotation();
        let mut scheduler = VirtualScheduler::new();
        tabs.start(&mut scheduler);
        tabs.start(&mut scheduler);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn stale_rotate_tick_is_ignored() {
        let mut tabs = rotation();
        let mut view = RecordingView::landing_page();
        let mut scheduler = VirtualScheduler::new();
        tabs.start(&mut scheduler);
        let RotationState::Running(old) = tabs.state() else {
            panic!("rotation should be running");
        };
        tabs.start(&mut scheduler);
        tabs.on_rotate(old, &mut view, &mut scheduler);
        assert_eq!(tabs.current().id, "java");
    }

    #[test]
    fn unknown_select_leaves_rotation_running() {
        let mut tabs = rotation();
        let mut view = RecordingView::landing_page();
        let mut scheduler = VirtualScheduler::new();
        tabs.start(&mut scheduler);
        assert!(tabs.select("cobol", &mut view, &mut scheduler).is_err());
        assert!(tabs.is_running());
        assert!(!tabs.resume_pending());
        assert!(view.shown.is_empty());
    }

    #[test]
    fn switch_fades_out_then_schedules_fade_in() {
        let mut tabs = rotation();
        let mut view = RecordingView::landing_page();
        let mut scheduler = VirtualScheduler::new();
        tabs.switch_to("python", &mut view, &mut scheduler).unwrap();
        assert_eq!(view.code_opacity, 0.0);
        let (id, tick) = scheduler.pop_due(TimingConfig::default().fade_delay()).unwrap();
        assert_eq!(tick, Tick::FadeIn);
        tabs.on_fade_in(id, &mut view);
        assert_eq!(view.code_opacity, 1.0);
    }
}
