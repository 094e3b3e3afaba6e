use thiserror::Error;

use crate::image::ImageRole;

#[derive(Error, Debug)]
pub enum LoupeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {role} image dimensions: {width}x{height}")]
    InvalidDimensions {
        role: ImageRole,
        width: f64,
        height: f64,
    },

    #[error("The {role} image must declare both width and height")]
    MissingDimensions { role: ImageRole },

    #[error("Invalid widget config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Feature detection failed: {0}")]
    FeatureDetection(String),

    #[error("Replay script error: {0}")]
    Script(String),
}

pub type Result<T> = std::result::Result<T, LoupeError>;
