//! The hero grid composer: tiles an ordered set of screenshots into a fixed
//! 16:9 cell grid on a larger canvas, with uniform padding, a centered
//! vertical placement, and a reserved title-bar block above the grid.
use image::{Rgb, RgbImage, imageops};
use tracing::info;

use crate::core::processing::resize::resize_rgb;
use crate::error::{Error, Result};
use crate::types::{Fill, TITLE_ACCENT, TargetSize};

/// Height reserved above the grid for the title-bar block.
const TITLE_OFFSET: i64 = 80;
/// Fixed size of the title-bar accent block.
const TITLE_BLOCK: (u32, u32) = (400, 60);

/// Derived tile placement for one composition; computed, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub cols: u32,
    pub rows: u32,
    /// Outer margin; also the gap between tiles.
    pub padding: u32,
    pub gap: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    /// Top edge of the first tile row. A grid taller than the canvas is
    /// top-aligned (clamped to 0) and clipped at the bottom edge.
    pub start_y: u32,
    /// Tile count after the max-tiles cap.
    pub tiles: usize,
}

impl GridLayout {
    pub fn compute(count: usize, canvas: TargetSize, max_tiles: usize) -> Result<Self> {
        if count == 0 || max_tiles == 0 {
            return Err(Error::EmptyInput);
        }
        if canvas.width == 0 {
            return Err(Error::InvalidDimension {
                dim: "canvas_width",
                value: canvas.width,
            });
        }
        if canvas.height == 0 {
            return Err(Error::InvalidDimension {
                dim: "canvas_height",
                value: canvas.height,
            });
        }

        let tiles = count.min(max_tiles);
        let cols = (tiles as u32).min(4);
        let rows = (tiles as u32).div_ceil(cols);

        let padding = (canvas.width as f64 * 0.02).round() as u32;
        let gap = padding;
        let cell_width = (canvas.width - padding * (cols + 1)) / cols;
        let cell_height = (cell_width as f64 * 9.0 / 16.0).round() as u32;

        let total_height = padding + cell_height * rows + gap * (rows - 1);
        let start_y = canvas.height.saturating_sub(total_height) / 2;

        Ok(Self {
            cols,
            rows,
            padding,
            gap,
            cell_width,
            cell_height,
            start_y,
            tiles,
        })
    }

    /// Top-left corner of the tile at `index` (0-based, row-major).
    pub fn position(&self, index: usize) -> (u32, u32) {
        let col = index as u32 % self.cols;
        let row = index as u32 / self.cols;
        let x = self.padding + col * (self.cell_width + self.gap);
        let y = self.start_y + row * (self.cell_height + self.gap);
        (x, y)
    }
}

/// Compose the first `max_tiles` of `sources`, in order, into a grid on a
/// `canvas`-sized image filled with `fill`. Tiles are force-stretched to
/// the 16:9 cell, not aspect-preserved.
pub fn compose_grid(
    sources: &[RgbImage],
    canvas: TargetSize,
    max_tiles: usize,
    fill: Fill,
) -> Result<RgbImage> {
    let layout = GridLayout::compute(sources.len(), canvas, max_tiles)?;
    info!(
        "Composing {} tiles as a {}x{} grid on {} (cell {}x{})",
        layout.tiles, layout.cols, layout.rows, canvas, layout.cell_width, layout.cell_height
    );

    let mut composed = RgbImage::from_pixel(canvas.width, canvas.height, Rgb(fill));

    for (index, source) in sources.iter().take(layout.tiles).enumerate() {
        let tile = resize_rgb(source, layout.cell_width, layout.cell_height)?;
        let (x, y) = layout.position(index);
        imageops::overlay(&mut composed, &tile, x as i64, y as i64);
    }

    // Reserved branding block above the grid; partially or fully clipped
    // when the grid reaches the top edge.
    let (title_width, title_height) = TITLE_BLOCK;
    fill_rect(
        &mut composed,
        layout.padding as i64,
        layout.start_y as i64 - TITLE_OFFSET,
        title_width,
        title_height,
        TITLE_ACCENT,
    );

    Ok(composed)
}

/// Paint a solid rectangle, clipped to the canvas bounds.
pub(crate) fn fill_rect(canvas: &mut RgbImage, x: i64, y: i64, width: u32, height: u32, fill: Fill) {
    let x0 = x.clamp(0, canvas.width() as i64) as u32;
    let y0 = y.clamp(0, canvas.height() as i64) as u32;
    let x1 = (x + width as i64).clamp(0, canvas.width() as i64) as u32;
    let y1 = (y + height as i64).clamp(0, canvas.height() as i64) as u32;
    for yy in y0..y1 {
        for xx in x0..x1 {
            canvas.put_pixel(xx, yy, Rgb(fill));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_CANVAS_FILL;

    const HERO: TargetSize = TargetSize::new(3840, 1240);

    fn frames(count: usize) -> Vec<RgbImage> {
        (0..count)
            .map(|i| RgbImage::from_pixel(160, 90, Rgb([(i * 20) as u8, 128, 64])))
            .collect()
    }

    #[test]
    fn up_to_four_tiles_stay_on_one_row() {
        for count in 1..=4 {
            let layout = GridLayout::compute(count, HERO, 12).unwrap();
            assert_eq!(layout.rows, 1, "count {count}");
            assert_eq!(layout.cols, count as u32);
        }
    }

    #[test]
    fn fifth_tile_wraps_to_second_row() {
        let layout = GridLayout::compute(5, HERO, 12).unwrap();
        assert_eq!(layout.cols, 4);
        assert_eq!(layout.rows, 2);
    }

    #[test]
    fn hero_scenario_dimensions() {
        // 6 tiles on 3840x1240: 2% padding is 77, four columns of 863x485
        // (the widest cell that keeps 4 columns plus 5 margins inside 3840).
        let layout = GridLayout::compute(6, HERO, 12).unwrap();
        assert_eq!(layout.padding, 77);
        assert_eq!(layout.cell_width, 863);
        assert_eq!(layout.cell_height, 485);
        assert_eq!(layout.rows, 2);
        let total = layout.padding + layout.cell_height * 2 + layout.gap;
        assert_eq!(layout.start_y, (1240 - total) / 2);
    }

    #[test]
    fn truncates_to_max_tiles_in_order() {
        let layout = GridLayout::compute(15, HERO, 12).unwrap();
        assert_eq!(layout.tiles, 12);
        assert_eq!(layout.rows, 3);

        let composed = compose_grid(&frames(15), HERO, 12, DEFAULT_CANVAS_FILL).unwrap();
        assert_eq!(composed.dimensions(), (3840, 1240));
    }

    #[test]
    fn oversized_grid_top_aligns() {
        // Three rows of 51px cells plus spacing exceed a 120px-tall canvas.
        let canvas = TargetSize::new(400, 120);
        let layout = GridLayout::compute(12, canvas, 12).unwrap();
        assert_eq!(layout.padding, 8);
        assert_eq!(layout.cell_width, 90);
        assert_eq!(layout.cell_height, 51);
        assert_eq!(layout.start_y, 0);

        // Overflowing tiles are clipped, not an error.
        let composed = compose_grid(&frames(12), canvas, 12, DEFAULT_CANVAS_FILL).unwrap();
        assert_eq!(composed.dimensions(), (400, 120));
    }

    #[test]
    fn empty_sources_are_rejected() {
        assert!(matches!(
            compose_grid(&[], HERO, 12, DEFAULT_CANVAS_FILL),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn tiles_land_on_layout_positions() {
        // 960x540 matches the computed cell exactly, so the tile is pasted
        // without resampling and stays pure red.
        let sources = vec![RgbImage::from_pixel(960, 540, Rgb([255, 0, 0]))];
        let canvas = TargetSize::new(1000, 800);
        let layout = GridLayout::compute(1, canvas, 12).unwrap();
        assert_eq!((layout.cell_width, layout.cell_height), (960, 540));
        let composed = compose_grid(&sources, canvas, 12, DEFAULT_CANVAS_FILL).unwrap();

        let (x, y) = layout.position(0);
        let inside = composed.get_pixel(x + layout.cell_width / 2, y + layout.cell_height / 2);
        assert_eq!(*inside, Rgb([255, 0, 0]));
        assert_eq!(*composed.get_pixel(0, 0), Rgb(DEFAULT_CANVAS_FILL));
    }

    #[test]
    fn title_block_sits_above_the_grid() {
        let sources = frames(4);
        let canvas = TargetSize::new(2000, 1500);
        let layout = GridLayout::compute(4, canvas, 12).unwrap();
        assert!(layout.start_y > 80);

        let composed = compose_grid(&sources, canvas, 12, DEFAULT_CANVAS_FILL).unwrap();
        let probe = composed.get_pixel(layout.padding + 10, layout.start_y - 70);
        assert_eq!(*probe, Rgb(TITLE_ACCENT));
    }

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut canvas = RgbImage::from_pixel(50, 50, Rgb([0, 0, 0]));
        fill_rect(&mut canvas, -10, 40, 30, 30, [255, 255, 255]);
        assert_eq!(*canvas.get_pixel(0, 49), Rgb([255, 255, 255]));
        assert_eq!(*canvas.get_pixel(25, 49), Rgb([0, 0, 0]));
    }
}
