//! Timer seam.
//!
//! Controllers never sleep. They ask a [`Scheduler`] for intervals and
//! timeouts and get a [`Tick`] back through [`crate::LandingController::on_timer`]
//! when one fires. Every timer is cleared by handle before it is replaced.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::view::ButtonId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// What a fired timer asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Advance to the next sample.
    Rotate,
    /// Grace period after a manual selection is over.
    ResumeRotation,
    /// Bring the code panel back to full opacity.
    FadeIn,
    /// Put a button's original label back.
    RestoreButton(ButtonId),
    /// Reveal one more character of the hero title.
    TypeNext,
}

pub trait Scheduler {
    /// Fire `tick` every `period` until cleared.
    fn set_interval(&mut self, period: Duration, tick: Tick) -> TimerId;

    /// Fire `tick` once after `delay`.
    fn set_timeout(&mut self, delay: Duration, tick: Tick) -> TimerId;

    /// Cancel a timer. Unknown or already fired ids are ignored.
    fn clear(&mut self, id: TimerId);
}

#[derive(Debug, Clone)]
struct Pending {
    due: Duration,
    period: Option<Duration>,
    tick: Tick,
}

/// Deterministic scheduler on a virtual clock.
///
/// Used to drive the controller headlessly: nothing fires until the clock is
/// advanced, and due timers fire in deadline order (ties in the order they
/// were scheduled).
#[derive(Debug, Clone, Default)]
pub struct VirtualScheduler {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, Pending>,
}

/// Browsers clamp intervals; a zero period would never let the clock move.
const MIN_PERIOD: Duration = Duration::from_millis(1);

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its deadline. Intervals are re-armed one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, Tick)> {
        let (id, due) = self
            .timers
            .iter()
            .filter(|(_, pending)| pending.due <= until)
            .min_by_key(|(id, pending)| (pending.due, **id))
            .map(|(id, pending)| (*id, pending.due))?;

        self.now = self.now.max(due);
        let pending = self.timers.get_mut(&id)?;
        let tick = pending.tick;
        match pending.period {
            Some(period) => pending.due += period,
            None => {
                self.timers.remove(&id);
            }
        }
        Some((id, tick))
    }

    /// Move the clock forward without firing anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>, tick: Tick) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.insert(
            id,
            Pending {
                due: self.now + delay,
                period,
                tick,
            },
        );
        id
    }
}

impl Scheduler for VirtualScheduler {
    fn set_interval(&mut self, period: Duration, tick: Tick) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.insert(period, Some(period), tick)
    }

    fn set_timeout(&mut self, delay: Duration, tick: Tick) -> TimerId {
        self.insert(delay, None, tick)
    }

    fn clear(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain(scheduler: &mut VirtualScheduler, until: Duration) -> Vec<(Duration, Tick)> {
        let mut fired = Vec::new();
        while let Some((_, tick)) = scheduler.pop_due(until) {
            fired.push((scheduler.now(), tick));
        }
        scheduler.set_now(until);
        fired
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let mut scheduler = VirtualScheduler::new();
        scheduler.set_timeout(ms(100), Tick::FadeIn);
        assert!(scheduler.pop_due(ms(99)).is_none());
        assert_eq!(scheduler.pop_due(ms(100)).map(|(_, t)| t), Some(Tick::FadeIn));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn intervals_rearm_and_fire_in_deadline_order() {
        let mut scheduler = VirtualScheduler::new();
        scheduler.set_interval(ms(300), Tick::Rotate);
        scheduler.set_timeout(ms(500), Tick::ResumeRotation);

        let fired = drain(&mut scheduler, ms(900));
        assert_eq!(
            fired,
            vec![
                (ms(300), Tick::Rotate),
                (ms(500), Tick::ResumeRotation),
                (ms(600), Tick::Rotate),
                (ms(900), Tick::Rotate),
            ]
        );
        assert_eq!(scheduler.now(), ms(900));
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut scheduler = VirtualScheduler::new();
        scheduler.set_timeout(ms(10), Tick::TypeNext);
        scheduler.set_timeout(ms(10), Tick::FadeIn);
        let fired: Vec<_> = drain(&mut scheduler, ms(10)).into_iter().map(|(_, t)| t).collect();
        assert_eq!(fired, vec![Tick::TypeNext, Tick::FadeIn]);
    }

    #[test]
    fn cleared_timers_never_fire() {
        let mut scheduler = VirtualScheduler::new();
        let id = scheduler.set_interval(ms(50), Tick::Rotate);
        assert!(scheduler.is_scheduled(id));
        scheduler.clear(id);
        scheduler.clear(id);
        assert!(drain(&mut scheduler, ms(1000)).is_empty());
    }

    #[test]
    fn zero_period_interval_is_clamped() {
        let mut scheduler = VirtualScheduler::new();
        scheduler.set_interval(Duration::ZERO, Tick::Rotate);
        assert_eq!(drain(&mut scheduler, ms(3)).len(), 3);
    }
}
