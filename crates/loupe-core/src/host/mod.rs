//! Capabilities the controller borrows from its environment.
//!
//! A browser page, an egui frame loop and a test clock all provide the same
//! four things: listener registration, animation frames, timers and a way to
//! probe listener features. The controller only ever talks to [`Host`].

pub mod manual;

use std::time::Duration;

use crate::error::Result;

pub use manual::ManualHost;

/// Opaque handle to a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// The zoom-in animation has finished.
    ZoomInSettled,
    /// The zoom-out animation has finished.
    ZoomOutSettled,
    /// The tap confirmation window has closed.
    TapWindow,
}

/// Payload handed back to the controller when a timer fires. `epoch` is the
/// controller epoch the timer was armed in; a mismatch marks it stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub epoch: u64,
}

/// How touch listeners are registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerOptions {
    /// Explicitly non-passive, so handlers may suppress scrolling.
    NonPassive,
    /// Plain registration for hosts without passive-listener support.
    Legacy,
}

pub trait Host {
    /// Probe passive-listener support. Errors are treated as "unsupported".
    fn detect_passive_listeners(&mut self) -> Result<bool> {
        Ok(false)
    }

    /// Register touch and pinch listeners on the zoom viewport.
    fn attach_region_listeners(&mut self, options: ListenerOptions);

    fn detach_region_listeners(&mut self);

    /// Register page-wide click and touch listeners used for dismissal.
    fn attach_global_listeners(&mut self, options: ListenerOptions);

    fn detach_global_listeners(&mut self);

    /// Ask for `on_animation_frame` to be called before the next paint.
    fn request_animation_frame(&mut self);

    fn schedule_timer(&mut self, delay: Duration, timer: Timer) -> TimerId;

    fn cancel_timer(&mut self, id: TimerId);
}
