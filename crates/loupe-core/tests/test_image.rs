use approx::assert_abs_diff_eq;

use loupe_core::error::LoupeError;
use loupe_core::image::{ImageDescriptor, ImageRole, ImageSet};

mod common;

fn base() -> ImageDescriptor {
    ImageDescriptor::new("base", "base.jpg").with_size(350.0, 550.0)
}

fn large() -> ImageDescriptor {
    ImageDescriptor::new("large", "large.jpg").with_size(450.0, 707.0)
}

#[test]
fn test_valid_set_exposes_sizes() {
    let set = common::image_set();
    assert_eq!(set.base_size().width, 350.0);
    assert_eq!(set.large_size().height, 707.0);
    assert_eq!(set.thumbnail().map(|t| t.src.as_str()), Some("thumb.jpg"));
}

#[test]
fn test_unzoomed_level_and_touch_scale() {
    let set = common::image_set();
    assert_abs_diff_eq!(set.unzoomed_level(), 350.0 / 450.0);
    assert_abs_diff_eq!(set.touch_scale(), 1.285714, epsilon = 1e-6);
}

#[test]
fn test_zero_width_rejected() {
    let err = ImageSet::new(base(), ImageDescriptor::new("l", "l").with_size(0.0, 10.0), None)
        .unwrap_err();
    assert!(matches!(
        err,
        LoupeError::InvalidDimensions {
            role: ImageRole::Large,
            ..
        }
    ));
}

#[test]
fn test_negative_and_nan_rejected() {
    let neg = ImageDescriptor::new("b", "b").with_size(350.0, -1.0);
    assert!(ImageSet::new(neg, large(), None).is_err());

    let nan = ImageDescriptor::new("b", "b").with_size(f64::NAN, 10.0);
    assert!(ImageSet::new(nan, large(), None).is_err());
}

#[test]
fn test_missing_dimensions_rejected() {
    let err = ImageSet::new(ImageDescriptor::new("b", "b"), large(), None).unwrap_err();
    assert!(matches!(
        err,
        LoupeError::MissingDimensions {
            role: ImageRole::Base
        }
    ));
    assert!(err.to_string().contains("base"), "got: {err}");
}

#[test]
fn test_thumbnail_may_omit_dimensions() {
    let thumb = ImageDescriptor::new("t", "t.jpg");
    assert!(ImageSet::new(base(), large(), Some(thumb)).is_ok());
}

#[test]
fn test_thumbnail_declared_zero_rejected() {
    let thumb = ImageDescriptor {
        width: Some(0.0),
        ..ImageDescriptor::new("t", "t.jpg")
    };
    let err = ImageSet::new(base(), large(), Some(thumb)).unwrap_err();
    assert!(matches!(
        err,
        LoupeError::InvalidDimensions {
            role: ImageRole::Thumbnail,
            ..
        }
    ));
}
