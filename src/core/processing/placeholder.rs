//! Simulated capture: renders the fixed scene checklist as placeholder
//! frames when no live UI is available to shoot. Text rendering is out of
//! scope, so the two caption lines become neutral banner blocks; a per-scene
//! accent stripe keeps the frames distinguishable.
use image::{Rgb, RgbImage};

use crate::core::processing::grid::fill_rect;
use crate::error::{Error, Result};
use crate::types::{Fill, PLACEHOLDER_FILL};

/// Native resolution of simulated capture frames.
pub const FRAME_WIDTH: u32 = 1920;
pub const FRAME_HEIGHT: u32 = 1080;

/// One scene in the capture plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    pub name: &'static str,
    pub caption: &'static str,
}

/// The capture checklist: must-shoot scenes, in display order.
pub const SCENE_PLAN: &[Scene] = &[
    Scene {
        name: "01_main_interface",
        caption: "Main interface overview",
    },
    Scene {
        name: "02_dark_theme",
        caption: "Dark theme",
    },
    Scene {
        name: "03_retro_theme",
        caption: "Retro theme",
    },
    Scene {
        name: "04_cyber_theme",
        caption: "Cyber theme",
    },
    Scene {
        name: "05_oscillator_control",
        caption: "Oscillator controls",
    },
    Scene {
        name: "06_filter_control",
        caption: "Filter adjustment",
    },
    Scene {
        name: "07_ai_melody_generation",
        caption: "AI melody generation",
    },
    Scene {
        name: "08_ai_chord_progression",
        caption: "AI chord progression",
    },
    Scene {
        name: "09_ai_rhythm_generation",
        caption: "AI rhythm generation",
    },
    Scene {
        name: "10_visualizer",
        caption: "Real-time visualization",
    },
    Scene {
        name: "11_preset_browser",
        caption: "Preset browser",
    },
    Scene {
        name: "12_community_panel",
        caption: "Community panel",
    },
];

/// Accent stripe color for the scene at `index`; deterministic so repeated
/// simulation runs produce identical frames.
fn scene_accent(index: usize) -> Fill {
    let step = (index % SCENE_PLAN.len()) as u8;
    [40 + step * 16, 70, 180 - step * 12]
}

/// Render one placeholder frame: solid dark background, a title banner and
/// a smaller caption banner where the text lines would sit, and the scene's
/// accent stripe along the top edge.
pub fn render_placeholder(scene_index: usize, width: u32, height: u32) -> Result<RgbImage> {
    if width == 0 {
        return Err(Error::InvalidDimension {
            dim: "width",
            value: width,
        });
    }
    if height == 0 {
        return Err(Error::InvalidDimension {
            dim: "height",
            value: height,
        });
    }

    let mut frame = RgbImage::from_pixel(width, height, Rgb(PLACEHOLDER_FILL));

    fill_rect(&mut frame, 0, 0, width, 12, scene_accent(scene_index));

    let cx = width as i64 / 2;
    let cy = height as i64 / 2;
    // Title line stand-in
    fill_rect(&mut frame, cx - 300, cy - 50, 600, 60, [255, 255, 255]);
    // Caption line stand-in
    fill_rect(&mut frame, cx - 200, cy + 20, 400, 40, [150, 150, 150]);

    Ok(frame)
}
