//! One pure function per event type: `(state, input) -> (state, effects)`.
//!
//! Nothing here talks to a host. Side effects are returned as [`Effect`]s and
//! carried out by [`ZoomController`](super::ZoomController).

use std::time::Duration;

use tracing::debug;

use super::event::{InputOrigin, TouchEvent, ZoomDirection, ZoomGesture};
use super::state::{ViewState, ZoomTransition};
use crate::config::WidgetConfig;
use crate::consts::{
    DEFAULT_ZOOM_LEVEL, GESTURE_GUARD_FLOOR, MAX_ZOOM_LEVEL, MIN_GESTURE_ZOOM_LEVEL,
    TAP_WINDOW_MS, ZOOM_STEP,
};
use crate::geometry::{clamp_to_bounds, drag_delta, is_within_bounds, round_zoom_level, Point};
use crate::host::{Timer, TimerKind};
use crate::image::ImageSet;

/// Work the controller must hand to the host after a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Prevent the triggering event's default action and stop propagation.
    SuppressDefault,
    RequestAnimationFrame,
    ScheduleTimer { delay: Duration, timer: Timer },
    AttachGlobalListeners,
    DetachGlobalListeners,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: ViewState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn new(state: ViewState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    fn with(mut self, effect: Effect) -> Self {
        self.push(effect);
        self
    }

    /// Queue `focus` for the next animation frame, requesting one if needed.
    fn queue_focus(&mut self, focus: Point) {
        self.state.pending_focus = Some(focus);
        self.request_frame();
    }

    fn request_frame(&mut self) {
        if !self.state.frame_requested {
            self.state.frame_requested = true;
            self.push(Effect::RequestAnimationFrame);
        }
    }

    fn arm_tap_window(&mut self) {
        self.state.is_awaiting_tap_confirmation = true;
        self.state.tap_epoch += 1;
        self.push(Effect::ScheduleTimer {
            delay: Duration::from_millis(TAP_WINDOW_MS),
            timer: Timer {
                kind: TimerKind::TapWindow,
                epoch: self.state.tap_epoch,
            },
        });
    }
}

/// Immutable inputs every transition may consult.
#[derive(Clone, Copy, Debug)]
pub struct WidgetContext<'a> {
    pub images: &'a ImageSet,
    pub config: &'a WidgetConfig,
}

/// Open the magnified view centred on `focal_point` (widget-local, base-image
/// pixels).
pub fn begin_zoom(
    state: ViewState,
    cx: WidgetContext<'_>,
    focal_point: Point,
    origin: InputOrigin,
) -> Transition {
    let mut t = Transition::new(state);
    let is_touch = origin == InputOrigin::Touch;

    let focus = if is_touch {
        let large = cx.images.large_size();
        let scaled = focal_point.scale(cx.images.touch_scale());
        if is_within_bounds(scaled, large) {
            scaled
        } else {
            clamp_to_bounds(scaled, large)
        }
    } else {
        focal_point
    };

    if focus != t.state.viewport_focus {
        t.state.viewport_focus = focus;
        t.state.last_click_point = Some(focal_point);
        t.state.is_drag_derived = is_touch;
    }
    // A hover queued before the click must not override the click focus.
    t.state.pending_focus = None;

    t.state.zoom_epoch += 1;
    t.state.is_zoomed = true;
    t.state.zoom_level = DEFAULT_ZOOM_LEVEL;
    t.state.suppress_background_transition = false;
    t.state.transition = ZoomTransition::Entering;
    t.push(Effect::ScheduleTimer {
        delay: cx.config.zoom_transition(),
        timer: Timer {
            kind: TimerKind::ZoomInSettled,
            epoch: t.state.zoom_epoch,
        },
    });

    debug!(
        x = focus.x,
        y = focus.y,
        touch = is_touch,
        epoch = t.state.zoom_epoch,
        "Zoom started"
    );
    t
}

/// Close the magnified view. Safe to call repeatedly.
pub fn end_zoom(state: ViewState, cx: WidgetContext<'_>) -> Transition {
    let mut t = Transition::new(state).with(Effect::SuppressDefault);

    if !t.state.is_zoomed && t.state.transition == ZoomTransition::Exiting {
        debug!("Dismissal already in flight");
        return t;
    }

    t.state.zoom_epoch += 1;
    t.state.is_zoomed = false;
    t.state.zoom_level = cx.images.unzoomed_level();
    t.state.suppress_background_transition = false;
    t.state.is_dragging = false;
    t.state.previous_drag_point = None;
    t.state.is_awaiting_tap_confirmation = false;
    if t.state.global_listeners_attached {
        t.state.global_listeners_attached = false;
        t.push(Effect::DetachGlobalListeners);
    }
    t.state.transition = ZoomTransition::Exiting;
    t.push(Effect::ScheduleTimer {
        delay: cx.config.zoom_transition(),
        timer: Timer {
            kind: TimerKind::ZoomOutSettled,
            epoch: t.state.zoom_epoch,
        },
    });

    debug!(epoch = t.state.zoom_epoch, "Zoom ended");
    t
}

/// Hover: follow the pointer in base-image space.
pub fn pointer_move(state: ViewState, offset: Point) -> Transition {
    let mut t = Transition::new(state);
    if t.state.is_dragging {
        return t;
    }
    t.state.is_drag_derived = false;
    t.queue_focus(offset);
    t
}

/// Pan the zoomed view by a touch drag in large-image space.
pub fn drag(state: ViewState, cx: WidgetContext<'_>, event: &TouchEvent) -> Transition {
    let mut t = Transition::new(state);
    let Some(current) = event.first() else {
        return t;
    };
    if !t.state.is_zoomed || !t.state.is_dragging {
        return t;
    }
    t.push(Effect::SuppressDefault);

    let previous = t.state.previous_drag_point.unwrap_or(current);
    let candidate = t.state.effective_focus() + drag_delta(previous, current, t.state.zoom_level);

    t.state.previous_drag_point = Some(current);
    t.state.is_drag_derived = true;

    if is_within_bounds(candidate, cx.images.large_size()) {
        t.queue_focus(candidate);
    } else {
        debug!(x = candidate.x, y = candidate.y, "Drag would leave the large image, dropped");
    }
    t
}

/// Step the zoom level from a wheel or pinch gesture.
pub fn zoom_gesture(state: ViewState, gesture: ZoomGesture) -> Transition {
    let mut t = Transition::new(state);
    let level = t.state.zoom_level;

    if !t.state.is_zoomed
        || t.state.is_calculating_zoom
        || !(GESTURE_GUARD_FLOOR..=MAX_ZOOM_LEVEL).contains(&level)
    {
        return t;
    }
    t.push(Effect::SuppressDefault);

    let next = match gesture.direction() {
        Some(ZoomDirection::In) if level < MAX_ZOOM_LEVEL => round_zoom_level(level + ZOOM_STEP),
        Some(ZoomDirection::Out) if level > MIN_GESTURE_ZOOM_LEVEL => {
            round_zoom_level(level - ZOOM_STEP)
        }
        _ => return t,
    };

    t.state.zoom_level = next;
    t.state.is_calculating_zoom = true;
    t.request_frame();
    debug!(from = level, to = next, "Zoom level stepped");
    t
}

pub fn touch_start(state: ViewState, event: &TouchEvent) -> Transition {
    let mut t = Transition::new(state);
    let Some(point) = event.first() else {
        return t;
    };
    if t.state.is_zoomed {
        t.push(Effect::SuppressDefault);
        t.state.is_dragging = true;
        t.state.previous_drag_point = Some(point);
    }
    t.arm_tap_window();
    t
}

/// Finish a touch: a tap opens or closes the zoom, a hold or drag just ends.
pub fn touch_end(state: ViewState, cx: WidgetContext<'_>, event: &TouchEvent) -> Transition {
    let Some(local) = event.first_local() else {
        return Transition::new(state);
    };
    let mut state = state;
    state.is_dragging = false;
    state.previous_drag_point = None;

    if !state.is_awaiting_tap_confirmation {
        let mut t = Transition::new(state);
        if t.state.is_zoomed {
            t.push(Effect::SuppressDefault);
        }
        return t;
    }
    state.is_awaiting_tap_confirmation = false;

    if state.is_zoomed {
        end_zoom(state, cx)
    } else {
        begin_zoom(state, cx, local, InputOrigin::Touch).with(Effect::SuppressDefault)
    }
}

/// A mouse click on the widget toggles the zoom. Clicks arriving while the
/// zoom-out animation runs are the tail of the dismissing gesture and are
/// swallowed.
pub fn click(state: ViewState, cx: WidgetContext<'_>, offset: Point) -> Transition {
    if state.is_zoomed {
        end_zoom(state, cx)
    } else if state.transition == ZoomTransition::Exiting {
        Transition::new(state).with(Effect::SuppressDefault)
    } else {
        begin_zoom(state, cx, offset, InputOrigin::Mouse)
    }
}

fn listening_outside(state: &ViewState, inside_zoom_region: bool) -> bool {
    state.global_listeners_attached && state.is_zoomed && !inside_zoom_region
}

pub fn document_click(
    state: ViewState,
    cx: WidgetContext<'_>,
    inside_zoom_region: bool,
) -> Transition {
    if listening_outside(&state, inside_zoom_region) {
        end_zoom(state, cx)
    } else {
        Transition::new(state)
    }
}

pub fn document_touch_start(state: ViewState, inside_zoom_region: bool) -> Transition {
    let mut t = Transition::new(state);
    if listening_outside(&t.state, inside_zoom_region) {
        t.arm_tap_window();
    }
    t
}

pub fn document_touch_end(
    state: ViewState,
    cx: WidgetContext<'_>,
    inside_zoom_region: bool,
) -> Transition {
    if listening_outside(&state, inside_zoom_region) && state.is_awaiting_tap_confirmation {
        let mut state = state;
        state.is_awaiting_tap_confirmation = false;
        end_zoom(state, cx)
    } else {
        Transition::new(state)
    }
}

/// Commit everything batched for this frame.
pub fn animation_frame(state: ViewState) -> Transition {
    let mut t = Transition::new(state);
    t.state.frame_requested = false;
    t.state.is_calculating_zoom = false;
    if let Some(focus) = t.state.pending_focus.take() {
        t.state.viewport_focus = focus;
    }
    t
}

/// Apply a fired timer, ignoring it if the state moved on since it was armed.
pub fn timer_fired(state: ViewState, timer: Timer) -> Transition {
    let mut t = Transition::new(state);
    match timer.kind {
        TimerKind::TapWindow => {
            if timer.epoch == t.state.tap_epoch {
                t.state.is_awaiting_tap_confirmation = false;
            }
        }
        TimerKind::ZoomInSettled => {
            if timer.epoch != t.state.zoom_epoch || !t.state.is_zoomed {
                debug!(epoch = timer.epoch, "Stale zoom-in timer ignored");
                return t;
            }
            t.state.transition = ZoomTransition::Settled;
            t.state.suppress_background_transition = true;
            if !t.state.global_listeners_attached {
                t.state.global_listeners_attached = true;
                t.push(Effect::AttachGlobalListeners);
            }
        }
        TimerKind::ZoomOutSettled => {
            if timer.epoch == t.state.zoom_epoch {
                t.state.transition = ZoomTransition::Settled;
            }
        }
    }
    t
}
