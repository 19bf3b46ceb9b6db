use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

/// Write a solid-color synthetic frame as a PNG screenshot.
pub fn write_frame(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let frame = RgbImage::from_pixel(width, height, Rgb([40, 90, 160]));
    frame.save(&path).unwrap();
    path
}
