//! The stateful half of the widget.
//!
//! [`ZoomController`] owns a [`ViewState`] and a [`Host`]. Every input runs
//! through one of the pure functions in [`transition`], and the returned
//! effects are replayed against the host.

pub mod event;
pub mod state;
pub mod transition;

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::WidgetConfig;
use crate::error::Result;
use crate::host::{Host, ListenerOptions, ManualHost, Timer, TimerId};
use crate::image::ImageSet;
use crate::presentation::Presentation;

pub use event::{InputEvent, InputOrigin, PinchEvent, PinchKind, TouchEvent, ZoomGesture};
pub use state::{ViewState, ZoomTransition};
pub use transition::{Effect, Transition, WidgetContext};

/// What the host should do with the event that was just handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// Call `preventDefault` / `stopPropagation` on the source event.
    pub default_prevented: bool,
}

pub struct ZoomController<H: Host> {
    images: ImageSet,
    config: WidgetConfig,
    state: ViewState,
    host: H,
    listener_options: ListenerOptions,
    outstanding_timers: Vec<TimerId>,
    mounted: bool,
}

impl<H: Host> ZoomController<H> {
    /// Validate the config, probe listener support and register the viewport
    /// listeners.
    pub fn mount(images: ImageSet, config: WidgetConfig, mut host: H) -> Result<Self> {
        config.validate()?;

        let listener_options = match host.detect_passive_listeners() {
            Ok(true) => ListenerOptions::NonPassive,
            Ok(false) => ListenerOptions::Legacy,
            Err(e) => {
                warn!(error = %e, "Passive listener detection failed, using legacy listeners");
                ListenerOptions::Legacy
            }
        };
        host.attach_region_listeners(listener_options);

        let state = ViewState::initial(&images);
        info!(
            base = %images.base().src,
            large = %images.large().src,
            zoom_level = state.zoom_level,
            "Zoom widget mounted"
        );

        Ok(Self {
            images,
            config,
            state,
            host,
            listener_options,
            outstanding_timers: Vec::new(),
            mounted: true,
        })
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn listener_options(&self) -> ListenerOptions {
        self.listener_options
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::derive(&self.state, &self.images, &self.config)
    }

    pub fn handle(&mut self, event: &InputEvent) -> EventOutcome {
        if !self.mounted {
            return EventOutcome::default();
        }
        let cx = WidgetContext {
            images: &self.images,
            config: &self.config,
        };
        let state = self.state.clone();

        let t = match event {
            InputEvent::PointerMove { offset } => transition::pointer_move(state, *offset),
            InputEvent::Click { offset } => transition::click(state, cx, *offset),
            InputEvent::Wheel { delta_y } => {
                transition::zoom_gesture(state, ZoomGesture::Wheel { delta_y: *delta_y })
            }
            InputEvent::Pinch(pinch) => transition::zoom_gesture(state, ZoomGesture::Pinch(*pinch)),
            InputEvent::TouchStart(touch) => transition::touch_start(state, touch),
            InputEvent::TouchMove(touch) => transition::drag(state, cx, touch),
            InputEvent::TouchEnd(touch) => transition::touch_end(state, cx, touch),
            InputEvent::DocumentClick { inside_zoom_region } => {
                transition::document_click(state, cx, *inside_zoom_region)
            }
            InputEvent::DocumentTouchStart { inside_zoom_region } => {
                transition::document_touch_start(state, *inside_zoom_region)
            }
            InputEvent::DocumentTouchEnd { inside_zoom_region } => {
                transition::document_touch_end(state, cx, *inside_zoom_region)
            }
        };
        self.apply(t)
    }

    /// Called by the host when a requested animation frame arrives.
    pub fn on_animation_frame(&mut self) {
        if !self.mounted {
            return;
        }
        let t = transition::animation_frame(self.state.clone());
        self.apply(t);
    }

    /// Called by the host when a scheduled timer fires.
    pub fn on_timer(&mut self, id: TimerId, timer: Timer) {
        let Some(index) = self.outstanding_timers.iter().position(|t| *t == id) else {
            debug!(?id, "Unknown or cancelled timer ignored");
            return;
        };
        self.outstanding_timers.swap_remove(index);
        let t = transition::timer_fired(self.state.clone(), timer);
        self.apply(t);
    }

    /// Release every listener and timer. Idempotent; also runs on drop.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        for id in self.outstanding_timers.drain(..) {
            self.host.cancel_timer(id);
        }
        if self.state.global_listeners_attached {
            self.state.global_listeners_attached = false;
            self.host.detach_global_listeners();
        }
        self.host.detach_region_listeners();
        info!("Zoom widget unmounted");
    }

    fn apply(&mut self, t: Transition) -> EventOutcome {
        self.state = t.state;
        let mut outcome = EventOutcome::default();
        for effect in t.effects {
            match effect {
                Effect::SuppressDefault => outcome.default_prevented = true,
                Effect::RequestAnimationFrame => self.host.request_animation_frame(),
                Effect::ScheduleTimer { delay, timer } => {
                    let id = self.host.schedule_timer(delay, timer);
                    self.outstanding_timers.push(id);
                }
                Effect::AttachGlobalListeners => {
                    self.host.attach_global_listeners(self.listener_options)
                }
                Effect::DetachGlobalListeners => self.host.detach_global_listeners(),
            }
        }
        outcome
    }
}

impl<H: Host> Drop for ZoomController<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl ZoomController<ManualHost> {
    /// Run the pending animation frame, if one was requested.
    pub fn flush_frame(&mut self) {
        if self.host.take_frame_request() {
            self.on_animation_frame();
        }
    }

    /// Move the fake clock forward. Elapsed time always contains a frame, so a
    /// pending frame runs first; timers then fire in deadline order.
    pub fn advance(&mut self, by: Duration) {
        let target = self.host.now() + by;
        if !by.is_zero() {
            self.flush_frame();
        }
        while let Some((id, timer)) = self.host.pop_due(target) {
            self.on_timer(id, timer);
            self.flush_frame();
        }
        self.host.set_now(target);
    }
}
