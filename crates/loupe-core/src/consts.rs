/// Zoom level applied when the magnified view opens.
pub const DEFAULT_ZOOM_LEVEL: f64 = 1.2;

/// Largest zoom level reachable through wheel or pinch input.
pub const MAX_ZOOM_LEVEL: f64 = 2.0;

/// Wheel and pinch input never zoom out below this level.
pub const MIN_GESTURE_ZOOM_LEVEL: f64 = 1.0;

/// Zoom levels outside `[0, MAX_ZOOM_LEVEL]` disable gesture handling entirely.
pub const GESTURE_GUARD_FLOOR: f64 = 0.0;

/// Increment applied per wheel notch or pinch event.
pub const ZOOM_STEP: f64 = 0.1;

/// Zoom levels are rounded to this many steps per unit to avoid float drift.
pub const ZOOM_ROUNDING_SCALE: f64 = 10.0;

/// Numerator of the drag sensitivity `DRAG_SENSITIVITY / zoom_level^2`.
pub const DRAG_SENSITIVITY: f64 = 3.0;

/// How long a touch may last and still count as a tap (ms).
pub const TAP_WINDOW_MS: u64 = 250;

/// Default duration of the zoom in/out animation (ms).
pub const DEFAULT_ZOOM_TRANSITION_MS: u64 = 300;

/// Default overview map size as a fraction of the base image.
pub const DEFAULT_MAP_SCALE_FACTOR: f64 = 0.2;

/// Default overview map border colour.
pub const DEFAULT_MAP_BORDER_COLOR: &str = "grey";

/// Overview map inset from the top-left corner of the widget (px).
pub const MAP_INSET: f64 = 10.0;

/// Overview map border width (px).
pub const MAP_BORDER_WIDTH: f64 = 2.0;

/// Fill of the overview map highlight box, RGBA.
pub const MAP_HIGHLIGHT_RGBA: [u8; 4] = [140, 137, 131, 153];

/// Stacking order of each layer while zoomed. Unzoomed, every layer but the
/// base image collapses to 0 and the base image sits at `BASE_Z_INDEX`.
pub const BASE_Z_INDEX: i32 = 1;
pub const BASE_Z_INDEX_ZOOMED: i32 = -1;
pub const CONTAINER_Z_INDEX: i32 = 100;
pub const ZOOM_IMAGE_Z_INDEX: i32 = 110;
pub const MAP_Z_INDEX: i32 = 200;
