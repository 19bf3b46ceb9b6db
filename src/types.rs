//! Shared types and enums used across CAPSHOT.
//! Includes `FitPolicy`, `OutputFormat`, the `TargetSize` pair used for all
//! aspect-ratio comparisons, and the default fill colors.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// RGB fill color as an interleaved triple.
pub type Fill = [u8; 3];

/// Letterbox bars for `FitPolicy::Contain`.
pub const DEFAULT_LETTERBOX: Fill = [0, 0, 0];
/// Hero composite canvas background.
pub const DEFAULT_CANVAS_FILL: Fill = [15, 15, 25];
/// Simulated capture frame background.
pub const PLACEHOLDER_FILL: Fill = [30, 30, 50];
/// Title-bar accent block on the hero composite.
pub const TITLE_ACCENT: Fill = [100, 100, 200];

/// How a source image is mapped onto a target box with a different aspect ratio.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum FitPolicy {
    /// Scale to fill and center-crop the excess; edge content may be lost.
    Cover,
    /// Scale to fit entirely and pad with a solid fill; full content kept.
    Contain,
}

impl std::fmt::Display for FitPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitPolicy::Cover => write!(f, "Cover"),
            FitPolicy::Contain => write!(f, "Contain"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    PNG,
    JPEG, // Lossy, storefront accepts both
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::PNG => "png",
            OutputFormat::JPEG => "jpg",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::PNG => write!(f, "PNG"),
            OutputFormat::JPEG => write!(f, "JPEG"),
        }
    }
}

/// An exact output size in pixels. `width / height` defines the aspect
/// ratio used for every fit comparison.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for TargetSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}
