use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_CANVAS_FILL, DEFAULT_LETTERBOX, Fill, FitPolicy, OutputFormat};

/// Generation parameters suitable for config files and automation presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    pub format: OutputFormat,
    pub fit: FitPolicy,
    /// Letterbox fill for `Contain` fits
    pub letterbox: Fill,
    /// Background fill for the hero composite canvas
    pub canvas_fill: Fill,
    /// Newest screenshots tiled into the hero composite
    pub hero_tiles: usize,
    /// Hard cap on tiles the grid composer will accept
    pub max_tiles: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::PNG,
            fit: FitPolicy::Cover,
            letterbox: DEFAULT_LETTERBOX,
            canvas_fill: DEFAULT_CANVAS_FILL,
            hero_tiles: 6,
            max_tiles: 12,
        }
    }
}
