use std::time::{Duration, Instant};

use loupe_core::error::Result;
use loupe_core::host::{Host, ListenerOptions, Timer, TimerId};
use tracing::debug;

/// Runs the zoom controller inside the egui frame loop. Timers are wall-clock
/// deadlines polled once per frame; a repaint is requested for each so the
/// loop wakes up in time.
pub struct EguiHost {
    ctx: egui::Context,
    next_id: u64,
    timers: Vec<(TimerId, Instant, Timer)>,
    frame_requested: bool,
    region_listening: bool,
    global_listening: bool,
}

impl EguiHost {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next_id: 0,
            timers: Vec::new(),
            frame_requested: false,
            region_listening: false,
            global_listening: false,
        }
    }

    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    /// Remove and return every timer whose deadline has passed, earliest
    /// first.
    pub fn take_due(&mut self, now: Instant) -> Vec<(TimerId, Timer)> {
        let mut due: Vec<_> = self
            .timers
            .iter()
            .filter(|(_, deadline, _)| *deadline <= now)
            .copied()
            .collect();
        self.timers.retain(|(_, deadline, _)| *deadline > now);
        due.sort_by_key(|(id, deadline, _)| (*deadline, *id));
        due.into_iter().map(|(id, _, timer)| (id, timer)).collect()
    }

    /// Time until the earliest outstanding timer, if any.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.timers
            .iter()
            .map(|(_, deadline, _)| deadline.saturating_duration_since(now))
            .min()
    }

    pub fn is_region_listening(&self) -> bool {
        self.region_listening
    }

    /// Whether clicks and touches outside the widget are being routed in.
    pub fn is_listening_globally(&self) -> bool {
        self.global_listening
    }
}

impl Host for EguiHost {
    fn detect_passive_listeners(&mut self) -> Result<bool> {
        Ok(true)
    }

    fn attach_region_listeners(&mut self, options: ListenerOptions) {
        debug!(?options, "Region input enabled");
        self.region_listening = true;
    }

    fn detach_region_listeners(&mut self) {
        self.region_listening = false;
    }

    fn attach_global_listeners(&mut self, options: ListenerOptions) {
        debug!(?options, "Outside input enabled");
        self.global_listening = true;
    }

    fn detach_global_listeners(&mut self) {
        debug!("Outside input disabled");
        self.global_listening = false;
    }

    fn request_animation_frame(&mut self) {
        self.frame_requested = true;
        self.ctx.request_repaint();
    }

    fn schedule_timer(&mut self, delay: Duration, timer: Timer) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push((id, Instant::now() + delay, timer));
        self.ctx.request_repaint_after(delay);
        id
    }

    fn cancel_timer(&mut self, id: TimerId) {
        self.timers.retain(|(t, _, _)| *t != id);
    }
}
