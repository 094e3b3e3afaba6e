use std::time::Duration;

use super::{Host, ListenerOptions, Timer, TimerId};
use crate::error::{LoupeError, Result};

/// Outcome of [`Host::detect_passive_listeners`] on a [`ManualHost`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PassiveSupport {
    #[default]
    Supported,
    Unsupported,
    /// Detection itself fails.
    Broken,
}

#[derive(Clone, Copy, Debug)]
struct ScheduledTimer {
    id: TimerId,
    deadline: Duration,
    timer: Timer,
}

/// Deterministic host driven by an explicit clock. Nothing happens until the
/// owner advances time or flushes the pending animation frame.
#[derive(Debug, Default)]
pub struct ManualHost {
    now: Duration,
    next_id: u64,
    timers: Vec<ScheduledTimer>,
    frame_requested: bool,
    passive_support: PassiveSupport,
    region_listeners: Option<ListenerOptions>,
    global_listeners: Option<ListenerOptions>,
    global_attach_count: usize,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_passive_support(mut self, support: PassiveSupport) -> Self {
        self.passive_support = support;
        self
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Clear and return the pending animation frame request.
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    /// Remove the earliest timer due at or before `until`, moving the clock to
    /// its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, Timer)> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= until)
            .min_by_key(|(_, t)| (t.deadline, t.id))
            .map(|(i, _)| i)?;
        let due = self.timers.remove(index);
        self.set_now(due.deadline);
        Some((due.id, due.timer))
    }

    pub fn region_listeners(&self) -> Option<ListenerOptions> {
        self.region_listeners
    }

    pub fn global_listeners(&self) -> Option<ListenerOptions> {
        self.global_listeners
    }

    /// Number of times global listeners have been attached.
    pub fn global_attach_count(&self) -> usize {
        self.global_attach_count
    }
}

impl Host for ManualHost {
    fn detect_passive_listeners(&mut self) -> Result<bool> {
        match self.passive_support {
            PassiveSupport::Supported => Ok(true),
            PassiveSupport::Unsupported => Ok(false),
            PassiveSupport::Broken => Err(LoupeError::FeatureDetection(
                "options getter threw".into(),
            )),
        }
    }

    fn attach_region_listeners(&mut self, options: ListenerOptions) {
        self.region_listeners = Some(options);
    }

    fn detach_region_listeners(&mut self) {
        self.region_listeners = None;
    }

    fn attach_global_listeners(&mut self, options: ListenerOptions) {
        self.global_listeners = Some(options);
        self.global_attach_count += 1;
    }

    fn detach_global_listeners(&mut self) {
        self.global_listeners = None;
    }

    fn request_animation_frame(&mut self) {
        self.frame_requested = true;
    }

    fn schedule_timer(&mut self, delay: Duration, timer: Timer) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.push(ScheduledTimer {
            id,
            deadline: self.now + delay,
            timer,
        });
        id
    }

    fn cancel_timer(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }
}
