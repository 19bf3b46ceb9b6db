//! Screenshot directory scanning and decoding. Capture filenames embed a
//! `%Y%m%d_%H%M%S` timestamp, so lexicographic order is chronological order.
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use image::RgbImage;
use tracing::info;

use crate::error::Result;

/// PNG files in `dir`, lexicographically sorted.
pub fn scan_screenshots(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        {
            found.push(path);
        }
    }
    found.sort();
    info!("Found {} screenshots in {:?}", found.len(), dir);
    Ok(found)
}

/// Decode any supported image file into an 8-bit RGB buffer.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let image = image::open(path)?;
    Ok(image.to_rgb8())
}

/// Capture-style file stem: `<stem>_YYYYmmdd_HHMMSS`.
pub fn timestamped_stem(stem: &str) -> String {
    format!("{}_{}", stem, Local::now().format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_skips_non_png_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b_frame.png", "a_frame.png", "notes.txt", "c_frame.PNG"] {
            fs::write(dir.path().join(name), b"stub").unwrap();
        }
        let found = scan_screenshots(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a_frame.png", "b_frame.png", "c_frame.PNG"]);
    }

    #[test]
    fn timestamped_stem_keeps_the_prefix() {
        let stem = timestamped_stem("01_main_interface");
        assert!(stem.starts_with("01_main_interface_"));
        // prefix + underscore + 15-char timestamp
        assert_eq!(stem.len(), "01_main_interface_".len() + 15);
    }
}
