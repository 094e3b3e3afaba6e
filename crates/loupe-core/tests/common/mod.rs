#![allow(dead_code)]

use std::time::Duration;

use loupe_core::config::WidgetConfig;
use loupe_core::controller::{InputEvent, TouchEvent, ZoomController};
use loupe_core::geometry::Point;
use loupe_core::host::ManualHost;
use loupe_core::image::{ImageDescriptor, ImageSet};

pub const BASE: (f64, f64) = (350.0, 550.0);
pub const LARGE: (f64, f64) = (450.0, 707.0);

/// Base 350x550, large 450x707, thumbnail without dimensions.
pub fn image_set() -> ImageSet {
    ImageSet::new(
        ImageDescriptor::new("An image for test rendering", "base.jpg").with_size(BASE.0, BASE.1),
        ImageDescriptor::new("A large image for test rendering", "large.jpg")
            .with_size(LARGE.0, LARGE.1),
        Some(ImageDescriptor::new("A small image for test rendering", "thumb.jpg")),
    )
    .unwrap()
}

pub fn mount() -> ZoomController<ManualHost> {
    mount_with(WidgetConfig::default(), ManualHost::new())
}

pub fn mount_with(config: WidgetConfig, host: ManualHost) -> ZoomController<ManualHost> {
    ZoomController::mount(image_set(), config, host).unwrap()
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub fn touch(x: f64, y: f64) -> TouchEvent {
    TouchEvent::single(Point::new(x, y), Point::ORIGIN)
}

pub fn click(x: f64, y: f64) -> InputEvent {
    InputEvent::Click {
        offset: Point::new(x, y),
    }
}

/// Click to zoom and wait for the zoom-in animation to settle.
pub fn zoom_in_settled(c: &mut ZoomController<ManualHost>, x: f64, y: f64) {
    c.handle(&click(x, y));
    c.advance(ms(300));
}

/// Tap to zoom and wait for the zoom-in animation to settle.
pub fn tap_zoom_settled(c: &mut ZoomController<ManualHost>, x: f64, y: f64) {
    c.handle(&InputEvent::TouchStart(touch(x, y)));
    c.handle(&InputEvent::TouchEnd(touch(x, y)));
    c.advance(ms(300));
}
