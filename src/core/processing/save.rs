use std::path::Path;

use image::RgbImage;
use tracing::info;

use crate::error::Result;
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::png::write_rgb_png;
use crate::types::OutputFormat;

/// Encode `image` to `output` in the requested format.
pub fn save_image(image: &RgbImage, output: &Path, format: OutputFormat) -> Result<()> {
    let cols = image.width() as usize;
    let rows = image.height() as usize;
    match format {
        OutputFormat::PNG => write_rgb_png(output, cols, rows, image.as_raw())?,
        OutputFormat::JPEG => write_rgb_jpeg(output, cols, rows, image.as_raw())?,
    }
    info!("Saved {} {}x{} to {:?}", format, cols, rows, output);
    Ok(())
}
