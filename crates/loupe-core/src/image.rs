use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LoupeError, Result};
use crate::geometry::{base_to_large_factor, Size};

/// An image supplied by the host. Dimensions are in pixels and optional only
/// for the thumbnail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub alt: String,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl ImageDescriptor {
    pub fn new(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            src: src.into(),
            width: None,
            height: None,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Declared size, if both dimensions are present.
    pub fn size(&self) -> Option<Size> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(Size::new(w, h)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageRole {
    Base,
    Large,
    Thumbnail,
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Large => write!(f, "large"),
            Self::Thumbnail => write!(f, "thumbnail"),
        }
    }
}

/// The validated image triple a widget is built from.
#[derive(Clone, Debug)]
pub struct ImageSet {
    base: ImageDescriptor,
    large: ImageDescriptor,
    thumbnail: Option<ImageDescriptor>,
    base_size: Size,
    large_size: Size,
}

impl ImageSet {
    /// Validate the descriptors. Base and large images must declare positive
    /// dimensions; a thumbnail may omit them but may not declare a
    /// non-positive one.
    pub fn new(
        base: ImageDescriptor,
        large: ImageDescriptor,
        thumbnail: Option<ImageDescriptor>,
    ) -> Result<Self> {
        let base_size = required_size(&base, ImageRole::Base)?;
        let large_size = required_size(&large, ImageRole::Large)?;
        if let Some(ref thumb) = thumbnail {
            check_declared(thumb, ImageRole::Thumbnail)?;
        }

        Ok(Self {
            base,
            large,
            thumbnail,
            base_size,
            large_size,
        })
    }

    pub fn base(&self) -> &ImageDescriptor {
        &self.base
    }

    pub fn large(&self) -> &ImageDescriptor {
        &self.large
    }

    pub fn thumbnail(&self) -> Option<&ImageDescriptor> {
        self.thumbnail.as_ref()
    }

    pub fn base_size(&self) -> Size {
        self.base_size
    }

    pub fn large_size(&self) -> Size {
        self.large_size
    }

    /// Zoom level at which the large image exactly covers the base footprint.
    pub fn unzoomed_level(&self) -> f64 {
        self.base_size.width / self.large_size.width
    }

    /// Factor mapping base-image coordinates onto the large image.
    pub fn touch_scale(&self) -> f64 {
        base_to_large_factor(self.base_size, self.large_size)
    }
}

fn required_size(image: &ImageDescriptor, role: ImageRole) -> Result<Size> {
    let size = image
        .size()
        .ok_or(LoupeError::MissingDimensions { role })?;
    check_positive(size, role)?;
    Ok(size)
}

fn check_declared(image: &ImageDescriptor, role: ImageRole) -> Result<()> {
    let width = image.width.unwrap_or(1.0);
    let height = image.height.unwrap_or(1.0);
    check_positive(Size::new(width, height), role)
}

fn check_positive(size: Size, role: ImageRole) -> Result<()> {
    let valid = |v: f64| v > 0.0 && v.is_finite();
    if !(valid(size.width) && valid(size.height)) {
        return Err(LoupeError::InvalidDimensions {
            role,
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}
