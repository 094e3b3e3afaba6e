use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Where a zoom request came from. Touch input is interpreted in large-image
/// space, mouse input in base-image space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOrigin {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinchKind {
    PinchIn,
    PinchOut,
}

/// Normalized output of an external pinch recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinchEvent {
    pub kind: PinchKind,
    #[serde(default)]
    pub delta: f64,
}

/// Touch points in page (client) coordinates plus the widget's top-left
/// corner in the same space.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub touches: Vec<Point>,
    #[serde(default)]
    pub origin: Point,
}

impl TouchEvent {
    pub fn single(point: Point, origin: Point) -> Self {
        Self {
            touches: vec![point],
            origin,
        }
    }

    pub fn first(&self) -> Option<Point> {
        self.touches.first().copied()
    }

    /// First touch translated into widget-local coordinates.
    pub fn first_local(&self) -> Option<Point> {
        self.first().map(|p| p - self.origin)
    }
}

/// Input the controller reacts to. Widget events are already routed to the
/// widget; `Document*` events come from the page-wide listeners.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerMove { offset: Point },
    Click { offset: Point },
    Wheel { delta_y: f64 },
    Pinch(PinchEvent),
    TouchStart(TouchEvent),
    TouchMove(TouchEvent),
    TouchEnd(TouchEvent),
    DocumentClick {
        #[serde(default)]
        inside_zoom_region: bool,
    },
    DocumentTouchStart {
        #[serde(default)]
        inside_zoom_region: bool,
    },
    DocumentTouchEnd {
        #[serde(default)]
        inside_zoom_region: bool,
    },
}

impl InputEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PointerMove { .. } => "pointer_move",
            Self::Click { .. } => "click",
            Self::Wheel { .. } => "wheel",
            Self::Pinch(_) => "pinch",
            Self::TouchStart(_) => "touch_start",
            Self::TouchMove(_) => "touch_move",
            Self::TouchEnd(_) => "touch_end",
            Self::DocumentClick { .. } => "document_click",
            Self::DocumentTouchStart { .. } => "document_touch_start",
            Self::DocumentTouchEnd { .. } => "document_touch_end",
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointerMove { offset } | Self::Click { offset } => {
                write!(f, "{} ({:.1}, {:.1})", self.name(), offset.x, offset.y)
            }
            Self::Wheel { delta_y } => write!(f, "wheel {delta_y:+}"),
            Self::Pinch(p) => write!(f, "{:?}", p.kind),
            Self::TouchStart(t) | Self::TouchMove(t) | Self::TouchEnd(t) => match t.first() {
                Some(p) => write!(f, "{} ({:.1}, {:.1})", self.name(), p.x, p.y),
                None => write!(f, "{} (no touches)", self.name()),
            },
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// A zoom-level request, from either the wheel or a pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomGesture {
    Wheel { delta_y: f64 },
    Pinch(PinchEvent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomGesture {
    /// Pinch-out and wheel-up zoom in; pinch-in and wheel-down zoom out.
    pub fn direction(self) -> Option<ZoomDirection> {
        match self {
            Self::Pinch(PinchEvent { kind: PinchKind::PinchOut, .. }) => Some(ZoomDirection::In),
            Self::Pinch(PinchEvent { kind: PinchKind::PinchIn, .. }) => Some(ZoomDirection::Out),
            Self::Wheel { delta_y } if delta_y < 0.0 => Some(ZoomDirection::In),
            Self::Wheel { delta_y } if delta_y > 0.0 => Some(ZoomDirection::Out),
            Self::Wheel { .. } => None,
        }
    }
}
