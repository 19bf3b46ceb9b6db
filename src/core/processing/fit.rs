//! The fit transform engine: maps an arbitrary-aspect source image onto an
//! exact target size under a `Cover` (scale-to-fill, center-crop) or
//! `Contain` (scale-to-fit, letterbox) policy. Both policies preserve the
//! source aspect ratio; only the excess handling differs.
use image::{Rgb, RgbImage, imageops};

use crate::core::processing::resize::resize_rgb;
use crate::error::{Error, Result};
use crate::types::{Fill, FitPolicy, TargetSize};

/// Scaled dimensions and centered offsets for one fit computation.
///
/// For `Cover`, `left`/`top` are crop offsets into the scaled image; for
/// `Contain`, they are paste offsets onto the target canvas. Offsets are
/// floor-halved, so a crop is symmetric within one pixel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FitGeometry {
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub left: u32,
    pub top: u32,
}

/// Geometry for scale-to-fill: the scaled image covers the whole target box
/// and the overhang on one axis is cropped around the center.
pub fn cover_geometry(source_width: u32, source_height: u32, target: TargetSize) -> FitGeometry {
    let source_ratio = source_width as f64 / source_height as f64;

    let (scaled_width, scaled_height) = if source_ratio > target.ratio() {
        // Source relatively wider: the height drives the scale
        let height = target.height;
        let width = (target.height as f64 * source_ratio).round() as u32;
        (width, height)
    } else {
        let width = target.width;
        let height = (target.width as f64 / source_ratio).round() as u32;
        (width, height)
    };

    // Both offsets apply whichever axis drove the scale; the non-overhanging
    // one is simply zero.
    FitGeometry {
        scaled_width,
        scaled_height,
        left: (scaled_width - target.width) / 2,
        top: (scaled_height - target.height) / 2,
    }
}

/// Geometry for scale-to-fit: the scaled image sits entirely inside the
/// target box, centered, leaving letterbox bars on at most one axis.
pub fn contain_geometry(source_width: u32, source_height: u32, target: TargetSize) -> FitGeometry {
    let source_ratio = source_width as f64 / source_height as f64;

    let (scaled_width, scaled_height) = if source_ratio > target.ratio() {
        let width = target.width;
        let height = (target.width as f64 / source_ratio).round() as u32;
        (width, height)
    } else {
        let height = target.height;
        let width = (target.height as f64 * source_ratio).round() as u32;
        (width, height)
    };

    FitGeometry {
        scaled_width,
        scaled_height,
        left: (target.width - scaled_width) / 2,
        top: (target.height - scaled_height) / 2,
    }
}

/// Produce an image of exactly `target.width x target.height` from `source`
/// under the given policy. `fill` paints the letterbox bars for `Contain`
/// and is ignored for `Cover`. A source already at the target size is
/// returned pixel-identical.
pub fn fit_image(
    source: &RgbImage,
    target: TargetSize,
    policy: FitPolicy,
    fill: Fill,
) -> Result<RgbImage> {
    if source.width() == 0 {
        return Err(Error::InvalidDimension {
            dim: "source_width",
            value: source.width(),
        });
    }
    if source.height() == 0 {
        return Err(Error::InvalidDimension {
            dim: "source_height",
            value: source.height(),
        });
    }
    if target.width == 0 {
        return Err(Error::InvalidDimension {
            dim: "width",
            value: target.width,
        });
    }
    if target.height == 0 {
        return Err(Error::InvalidDimension {
            dim: "height",
            value: target.height,
        });
    }

    if source.dimensions() == (target.width, target.height) {
        return Ok(source.clone());
    }

    match policy {
        FitPolicy::Cover => {
            let geometry = cover_geometry(source.width(), source.height(), target);
            let scaled = resize_rgb(source, geometry.scaled_width, geometry.scaled_height)?;
            let cropped = imageops::crop_imm(
                &scaled,
                geometry.left,
                geometry.top,
                target.width,
                target.height,
            )
            .to_image();
            Ok(cropped)
        }
        FitPolicy::Contain => {
            let geometry = contain_geometry(source.width(), source.height(), target);
            let scaled = resize_rgb(source, geometry.scaled_width, geometry.scaled_height)?;
            let mut canvas = RgbImage::from_pixel(target.width, target.height, Rgb(fill));
            imageops::overlay(
                &mut canvas,
                &scaled,
                geometry.left as i64,
                geometry.top as i64,
            );
            Ok(canvas)
        }
    }
}
