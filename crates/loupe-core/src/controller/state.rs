use crate::geometry::Point;
use crate::image::ImageSet;

/// Phase of the zoom animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoomTransition {
    #[default]
    Settled,
    Entering,
    Exiting,
}

/// Everything the controller knows about the view. Owned by one controller
/// and replaced wholesale by each transition.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub is_zoomed: bool,
    pub zoom_level: f64,
    /// Base-image space when hover-derived, large-image space when
    /// drag-derived.
    pub viewport_focus: Point,
    pub is_drag_derived: bool,
    pub last_click_point: Option<Point>,

    pub is_dragging: bool,
    pub previous_drag_point: Option<Point>,
    pub is_awaiting_tap_confirmation: bool,

    pub transition: ZoomTransition,
    /// Set once the zoom-in animation settles so that focus changes reposition
    /// the background without lag.
    pub suppress_background_transition: bool,
    /// Rate limiter for wheel/pinch: one zoom step per animation frame.
    pub is_calculating_zoom: bool,
    pub global_listeners_attached: bool,

    /// Focus waiting for the next animation frame (last write wins).
    pub pending_focus: Option<Point>,
    pub frame_requested: bool,

    /// Bumped by every zoom begin/end. Zoom timers from older epochs are stale.
    pub zoom_epoch: u64,
    /// Bumped every time the tap window is armed.
    pub tap_epoch: u64,
}

impl ViewState {
    pub fn initial(images: &ImageSet) -> Self {
        Self {
            is_zoomed: false,
            zoom_level: images.unzoomed_level(),
            viewport_focus: Point::ORIGIN,
            is_drag_derived: false,
            last_click_point: None,
            is_dragging: false,
            previous_drag_point: None,
            is_awaiting_tap_confirmation: false,
            transition: ZoomTransition::Settled,
            suppress_background_transition: false,
            is_calculating_zoom: false,
            global_listeners_attached: false,
            pending_focus: None,
            frame_requested: false,
            zoom_epoch: 0,
            tap_epoch: 0,
        }
    }

    /// Focus as it will be after the next animation frame.
    pub fn effective_focus(&self) -> Point {
        self.pending_focus.unwrap_or(self.viewport_focus)
    }
}
