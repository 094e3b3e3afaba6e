//! Render-ready values derived from the view state.

use std::fmt;
use std::time::Duration;

use crate::config::WidgetConfig;
use crate::consts::{
    BASE_Z_INDEX, BASE_Z_INDEX_ZOOMED, CONTAINER_Z_INDEX, MAP_BORDER_WIDTH, MAP_HIGHLIGHT_RGBA,
    MAP_INSET, MAP_Z_INDEX, ZOOM_IMAGE_Z_INDEX,
};
use crate::controller::ViewState;
use crate::geometry::{background_offset, background_scale_ratio, percent_point, Point, Size};
use crate::image::ImageSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorIcon {
    ZoomIn,
    ZoomOut,
}

impl fmt::Display for CursorIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomIn => write!(f, "zoom-in"),
            Self::ZoomOut => write!(f, "zoom-out"),
        }
    }
}

/// The box on the overview map marking the visible region, in percent of the
/// map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightBox {
    pub left_percent: f64,
    pub top_percent: f64,
    pub width_percent: f64,
    pub height_percent: f64,
    pub rgba: [u8; 4],
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverviewMap {
    /// Offset from the widget's top-left corner.
    pub inset: Point,
    pub size: Size,
    pub border_color: String,
    pub border_width: f64,
    pub thumbnail_src: Option<String>,
    pub z_index: i32,
    pub highlight: HighlightBox,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    pub widget_size: Size,
    pub cursor: CursorIcon,

    pub base_z_index: i32,
    /// The base image changes stacking order only once the zoom animation ends.
    pub base_transition_delay: Duration,

    pub container_z_index: i32,
    pub zoom_image_z_index: i32,
    pub background_src: String,
    /// Percent, CSS `background-position` semantics.
    pub background_position: Point,
    pub background_size: Size,
    /// Animation applied to `background_size`; `None` once suppressed.
    pub background_transition: Option<Duration>,

    pub map: Option<OverviewMap>,
}

impl Presentation {
    pub fn derive(state: &ViewState, images: &ImageSet, config: &WidgetConfig) -> Self {
        let base = images.base_size();
        let large = images.large_size();
        let zoomed = i32::from(state.is_zoomed);

        // A drag-derived focus lives in large-image pixels.
        let reference = if state.is_drag_derived { large } else { base };
        let background_position = percent_point(state.viewport_focus, reference);

        let map = config.display_map.then(|| {
            let ratio = background_scale_ratio(base.width, large.width, state.zoom_level);
            OverviewMap {
                inset: Point::new(MAP_INSET, MAP_INSET),
                size: base.scale(config.map_scale_factor),
                border_color: config.map_border_color.clone(),
                border_width: MAP_BORDER_WIDTH,
                thumbnail_src: images.thumbnail().map(|t| t.src.clone()),
                z_index: zoomed * MAP_Z_INDEX,
                highlight: HighlightBox {
                    left_percent: background_position.x * (1.0 - ratio),
                    top_percent: background_position.y * (1.0 - ratio),
                    width_percent: ratio * 100.0,
                    height_percent: ratio * 100.0,
                    rgba: MAP_HIGHLIGHT_RGBA,
                },
            }
        });

        Self {
            widget_size: base,
            cursor: if state.is_zoomed {
                CursorIcon::ZoomOut
            } else {
                CursorIcon::ZoomIn
            },
            base_z_index: if state.is_zoomed {
                BASE_Z_INDEX_ZOOMED
            } else {
                BASE_Z_INDEX
            },
            base_transition_delay: config.zoom_transition(),
            container_z_index: zoomed * CONTAINER_Z_INDEX,
            zoom_image_z_index: zoomed * ZOOM_IMAGE_Z_INDEX,
            background_src: images.large().src.clone(),
            background_position,
            background_size: large.scale(state.zoom_level),
            background_transition: (!state.suppress_background_transition)
                .then(|| config.zoom_transition()),
            map,
        }
    }

    /// Top-left corner of the background layer relative to the widget, for
    /// hosts that paint the layer themselves.
    pub fn background_offset(&self) -> Point {
        Point::new(
            background_offset(
                self.widget_size.width,
                self.background_size.width,
                self.background_position.x,
            ),
            background_offset(
                self.widget_size.height,
                self.background_size.height,
                self.background_position.y,
            ),
        )
    }

    /// CSS `background-position` value, e.g. `"85.7% 72.7%"`.
    pub fn background_position_css(&self) -> String {
        format!(
            "{}% {}%",
            self.background_position.x, self.background_position.y
        )
    }

    /// True when the zoomed layer paints above the base image.
    pub fn shows_zoom_layer(&self) -> bool {
        self.zoom_image_z_index > self.base_z_index
    }
}
