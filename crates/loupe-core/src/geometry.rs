//! Pure coordinate arithmetic shared by the controller and the presentation
//! layer. Nothing in here touches widget state.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::{DRAG_SENSITIVITY, ZOOM_ROUNDING_SCALE};

/// A 2D coordinate in pixels (or percent, for derived positions).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both coordinates by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// True iff every coordinate lies strictly between 0 and its bound.
pub fn is_within_bounds(point: Point, bounds: Size) -> bool {
    point.x > 0.0 && point.x < bounds.width && point.y > 0.0 && point.y < bounds.height
}

/// Cap each coordinate at its bound.
///
/// Only the upper side is clamped: a coordinate at or below zero is returned
/// unchanged. Callers that need a point strictly inside the bounds must check
/// [`is_within_bounds`] themselves.
pub fn clamp_to_bounds(point: Point, bounds: Size) -> Point {
    Point::new(point.x.min(bounds.width), point.y.min(bounds.height))
}

/// Express `offset` as a percentage of `reference` with one decimal place.
pub fn percent_from_offset(offset: f64, reference: f64) -> f64 {
    (offset / reference * 1000.0).round() / 10.0
}

/// Per-axis [`percent_from_offset`].
pub fn percent_point(point: Point, reference: Size) -> Point {
    Point::new(
        percent_from_offset(point.x, reference.width),
        percent_from_offset(point.y, reference.height),
    )
}

/// Fraction of the large image visible through the base image footprint at
/// `zoom_level`. Sizes the highlight box of the overview map.
pub fn background_scale_ratio(base_width: f64, large_width: f64, zoom_level: f64) -> f64 {
    base_width / (large_width * zoom_level)
}

/// Factor converting base-image pixels into large-image pixels.
pub fn base_to_large_factor(base: Size, large: Size) -> f64 {
    large.width / base.width
}

/// Drag sensitivity at `zoom_level`: higher zoom pans more slowly.
pub fn drag_sensitivity(zoom_level: f64) -> f64 {
    DRAG_SENSITIVITY / (zoom_level * zoom_level)
}

/// Focus translation for a touch moving from `previous` to `current`.
///
/// The sign is `previous - current`: dragging right moves the focus left, so
/// the content follows the finger.
pub fn drag_delta(previous: Point, current: Point, zoom_level: f64) -> Point {
    (previous - current).scale(drag_sensitivity(zoom_level))
}

/// Round a zoom level to the nearest step to keep repeated increments exact.
pub fn round_zoom_level(level: f64) -> f64 {
    (level * ZOOM_ROUNDING_SCALE).round() / ZOOM_ROUNDING_SCALE
}

/// Offset of a background layer inside its container for a CSS-style
/// `background-position` percentage: the point at `percent` of the layer lines
/// up with the point at `percent` of the container.
pub fn background_offset(container: f64, background: f64, percent: f64) -> f64 {
    (container - background) * percent / 100.0
}
