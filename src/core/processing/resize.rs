use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;

use crate::error::{Error, Result};

/// Resample an RGB image to exactly `target_cols x target_rows` with
/// Lanczos3 convolution. An image already at the requested size passes
/// through untouched.
pub fn resize_rgb(source: &RgbImage, target_cols: u32, target_rows: u32) -> Result<RgbImage> {
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
    if target_cols == 0 {
        return Err(Error::InvalidDimension {
            dim: "width",
            value: target_cols,
        });
    }
    if target_rows == 0 {
        return Err(Error::InvalidDimension {
            dim: "height",
            value: target_rows,
        });
    }

    if source.dimensions() == (target_cols, target_rows) {
        return Ok(source.clone());
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        source.width(),
        source.height(),
        source.as_raw().clone(),
        PixelType::U8x3,
    )
    .map_err(Error::external)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    RgbImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| Error::Processing("resampled buffer has unexpected length".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn resamples_to_exact_dimensions() {
        let source = RgbImage::from_pixel(640, 360, Rgb([120, 40, 200]));
        let resized = resize_rgb(&source, 200, 150).unwrap();
        assert_eq!(resized.dimensions(), (200, 150));
    }

    #[test]
    fn uniform_image_stays_uniform() {
        let source = RgbImage::from_pixel(128, 96, Rgb([77, 77, 77]));
        let resized = resize_rgb(&source, 50, 50).unwrap();
        for pixel in resized.pixels() {
            for channel in 0..3 {
                assert!((pixel.0[channel] as i16 - 77).abs() <= 1);
            }
        }
    }

    #[test]
    fn matching_size_is_passthrough() {
        let mut source = RgbImage::from_pixel(32, 32, Rgb([10, 20, 30]));
        source.put_pixel(7, 9, Rgb([250, 1, 128]));
        let resized = resize_rgb(&source, 32, 32).unwrap();
        assert_eq!(resized.as_raw(), source.as_raw());
    }

    #[test]
    fn zero_target_is_rejected() {
        let source = RgbImage::from_pixel(16, 16, Rgb([0, 0, 0]));
        assert!(matches!(
            resize_rgb(&source, 0, 10),
            Err(Error::InvalidDimension { dim: "width", .. })
        ));
        assert!(matches!(
            resize_rgb(&source, 10, 0),
            Err(Error::InvalidDimension { dim: "height", .. })
        ));
    }
}
