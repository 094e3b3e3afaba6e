//! Deterministic playback of recorded input against a [`ManualHost`].
//!
//! ```toml
//! [base]
//! alt = "Base"
//! src = "base.jpg"
//! width = 350
//! height = 550
//!
//! [large]
//! alt = "Large"
//! src = "large.jpg"
//! width = 450
//! height = 707
//!
//! [[steps]]
//! at_ms = 0
//! event = { type = "click", offset = { x = 300, y = 400 } }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::WidgetConfig;
use crate::consts::TAP_WINDOW_MS;
use crate::controller::{InputEvent, ZoomController};
use crate::error::{LoupeError, Result};
use crate::geometry::Point;
use crate::host::ManualHost;
use crate::image::{ImageDescriptor, ImageSet};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReplayStep {
    /// Time since mount at which the event is delivered.
    #[serde(default)]
    pub at_ms: u64,
    pub event: InputEvent,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReplayScript {
    pub base: ImageDescriptor,
    pub large: ImageDescriptor,
    #[serde(default)]
    pub thumbnail: Option<ImageDescriptor>,
    #[serde(default)]
    pub config: WidgetConfig,
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

/// View state after one step, flattened for printing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub at_ms: u64,
    pub label: String,
    pub is_zoomed: bool,
    pub zoom_level: f64,
    pub focus: Point,
    pub drag_derived: bool,
    pub background_position: Point,
    pub default_prevented: bool,
}

impl ReplayScript {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Play every step in order, then let all timers settle.
    pub fn run(&self) -> Result<Vec<Snapshot>> {
        if let Some(w) = self.steps.windows(2).find(|w| w[1].at_ms < w[0].at_ms) {
            return Err(LoupeError::Script(format!(
                "steps must be in time order ({} ms follows {} ms)",
                w[1].at_ms, w[0].at_ms
            )));
        }

        let images = ImageSet::new(
            self.base.clone(),
            self.large.clone(),
            self.thumbnail.clone(),
        )?;
        let mut controller = ZoomController::mount(images, self.config.clone(), ManualHost::new())?;
        let mut snapshots = Vec::with_capacity(self.steps.len() + 1);

        for step in &self.steps {
            let elapsed = controller.host().now();
            controller.advance(Duration::from_millis(step.at_ms).saturating_sub(elapsed));
            let outcome = controller.handle(&step.event);
            snapshots.push(snapshot(
                &controller,
                step.at_ms,
                step.event.to_string(),
                outcome.default_prevented,
            ));
        }

        let settle = self.config.zoom_transition_ms.max(TAP_WINDOW_MS);
        controller.advance(Duration::from_millis(settle));
        let at_ms = u64::try_from(controller.host().now().as_millis()).unwrap_or(u64::MAX);
        snapshots.push(snapshot(&controller, at_ms, "settled".into(), false));

        controller.unmount();
        Ok(snapshots)
    }
}

fn snapshot(
    controller: &ZoomController<ManualHost>,
    at_ms: u64,
    label: String,
    default_prevented: bool,
) -> Snapshot {
    let state = controller.state();
    Snapshot {
        at_ms,
        label,
        is_zoomed: state.is_zoomed,
        zoom_level: state.zoom_level,
        focus: state.viewport_focus,
        drag_derived: state.is_drag_derived,
        background_position: controller.presentation().background_position,
        default_prevented,
    }
}
