//! I/O layer for loading captured screenshots and persisting generated
//! assets. Provides the screenshot directory scanner/decoder and the
//! PNG/JPEG `writers`.
pub mod screenshots;
pub use screenshots::{load_rgb, scan_screenshots, timestamped_stem};

pub mod writers;
