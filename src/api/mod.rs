//! High-level, ergonomic library API: generate the storefront asset set from
//! captured or simulated screenshots, compose the library hero, and batch
//! helpers for directories. Prefer these entrypoints over the low-level
//! processing modules when embedding CAPSHOT.
use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::{info, warn};

use crate::core::catalog::AssetCatalog;
use crate::core::params::GenerationParams;
use crate::core::processing::fit::fit_image;
use crate::core::processing::grid::compose_grid;
use crate::core::processing::placeholder::{
    FRAME_HEIGHT, FRAME_WIDTH, SCENE_PLAN, render_placeholder,
};
use crate::core::processing::save::save_image;
use crate::error::{Error, Result};
use crate::io::screenshots::{load_rgb, scan_screenshots, timestamped_stem};
use crate::types::{FitPolicy, OutputFormat, TargetSize};

/// Outcome tally of one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub generated: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// True when a Cover fit would have to upsample `source` on either axis.
/// The transform itself always produces an exact-size result; refusing to
/// upsample is an orchestration policy, enforced here.
fn needs_upsampling(source: &RgbImage, target: TargetSize) -> bool {
    target.width > source.width() || target.height > source.height()
}

/// Generate every fit-transformed catalog asset from a single source frame.
/// Output files are named `<stem>_<asset>.<ext>` under `out_dir`. Per-asset
/// failures are tallied and the batch continues.
pub fn generate_store_assets(
    source: &RgbImage,
    stem: &str,
    out_dir: &Path,
    catalog: &AssetCatalog,
    params: &GenerationParams,
) -> Result<BatchReport> {
    fs::create_dir_all(out_dir)?;

    let mut report = BatchReport::default();
    for spec in catalog.fit_assets() {
        let target = spec.size();

        if params.fit == FitPolicy::Cover && needs_upsampling(source, target) {
            warn!(
                "Skipping {}: source {}x{} is smaller than target {}",
                spec.name,
                source.width(),
                source.height(),
                target
            );
            report.skipped += 1;
            continue;
        }

        let output = out_dir.join(format!(
            "{}_{}.{}",
            stem,
            spec.name,
            params.format.extension()
        ));
        let result = fit_image(source, target, params.fit, params.letterbox)
            .and_then(|asset| save_image(&asset, &output, params.format));
        match result {
            Ok(()) => {
                info!("{}: {} -> {:?}", spec.name, target, output);
                report.generated += 1;
            }
            Err(e) => {
                warn!("Error generating {}: {}", spec.name, e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}

/// Compose the library hero composite from `sources` and save it.
pub fn compose_library_hero(
    sources: &[RgbImage],
    output: &Path,
    canvas: TargetSize,
    params: &GenerationParams,
) -> Result<()> {
    let hero = compose_grid(sources, canvas, params.max_tiles, params.canvas_fill)?;
    save_image(&hero, output, params.format)
}

fn hero_from_paths(
    paths: &[PathBuf],
    output: &Path,
    canvas: TargetSize,
    params: &GenerationParams,
) -> Result<()> {
    let tiles = paths.iter().map(|p| load_rgb(p)).collect::<Result<Vec<_>>>()?;
    compose_library_hero(&tiles, output, canvas, params)
}

/// Run the full batch over a screenshots directory: the newest frame feeds
/// the fit-transformed assets, the newest `params.hero_tiles` frames feed
/// the hero composite. Fails with `EmptyInput` when the directory holds no
/// screenshots.
pub fn generate_assets_from_dir(
    screenshots_dir: &Path,
    out_dir: &Path,
    catalog: &AssetCatalog,
    params: &GenerationParams,
) -> Result<BatchReport> {
    let shots = scan_screenshots(screenshots_dir)?;
    let latest = shots.last().ok_or(Error::EmptyInput)?;

    let stem = latest
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "screenshot".to_string());
    info!("Using newest screenshot: {:?}", latest);

    let source = load_rgb(latest)?;
    let mut report = generate_store_assets(&source, &stem, out_dir, catalog, params)?;

    if let Some(hero_spec) = catalog.hero() {
        let newest = &shots[shots.len().saturating_sub(params.hero_tiles)..];
        let output = out_dir.join(format!(
            "{}.{}",
            hero_spec.name,
            params.format.extension()
        ));
        match hero_from_paths(newest, &output, hero_spec.size(), params) {
            Ok(()) => {
                info!(
                    "{}: {} tiles -> {:?}",
                    hero_spec.name,
                    newest.len().min(params.max_tiles),
                    output
                );
                report.generated += 1;
            }
            Err(e) => {
                warn!("Error composing {}: {}", hero_spec.name, e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}

/// Render the simulated capture plan into `out_dir` with capture-style
/// timestamped filenames. Returns the written paths in plan order.
pub fn simulate_capture_plan(out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(SCENE_PLAN.len());
    for (index, scene) in SCENE_PLAN.iter().enumerate() {
        let frame = render_placeholder(index, FRAME_WIDTH, FRAME_HEIGHT)?;
        let path = out_dir.join(format!("{}.png", timestamped_stem(scene.name)));
        // Simulated frames stand in for real captures, which are always PNG
        save_image(&frame, &path, OutputFormat::PNG)?;
        info!("Simulated capture: {} ({})", scene.name, scene.caption);
        written.push(path);
    }
    Ok(written)
}
