use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAP_BORDER_COLOR, DEFAULT_MAP_SCALE_FACTOR, DEFAULT_ZOOM_TRANSITION_MS};
use crate::error::{LoupeError, Result};

/// Construction-time widget options. Immutable once a controller is mounted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Duration of the zoom in/out animation in milliseconds.
    pub zoom_transition_ms: u64,
    /// Show the overview map while zoomed.
    pub display_map: bool,
    /// CSS-style colour name or `#rrggbb` for the map border.
    pub map_border_color: String,
    /// Overview map size as a fraction of the base image (0..=1).
    pub map_scale_factor: f64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            zoom_transition_ms: DEFAULT_ZOOM_TRANSITION_MS,
            display_map: true,
            map_border_color: DEFAULT_MAP_BORDER_COLOR.to_string(),
            map_scale_factor: DEFAULT_MAP_SCALE_FACTOR,
        }
    }
}

impl WidgetConfig {
    pub fn zoom_transition(&self) -> Duration {
        Duration::from_millis(self.zoom_transition_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.map_scale_factor > 0.0 && self.map_scale_factor <= 1.0) {
            return Err(LoupeError::InvalidConfig(format!(
                "map_scale_factor must be in (0, 1], got {}",
                self.map_scale_factor
            )));
        }
        if self.map_border_color.trim().is_empty() {
            return Err(LoupeError::InvalidConfig(
                "map_border_color must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
