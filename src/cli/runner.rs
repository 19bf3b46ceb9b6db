use std::fs;

use tracing::{info, warn};

use capshot::api::{generate_assets_from_dir, simulate_capture_plan};
use capshot::core::catalog::AssetCatalog;
use capshot::core::params::GenerationParams;
use capshot::Error;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.hero_tiles == 0 {
        return Err(AppError::ZeroTiles { arg: "--hero-tiles" }.into());
    }
    if args.max_tiles == 0 {
        return Err(AppError::ZeroTiles { arg: "--max-tiles" }.into());
    }

    let catalog = match &args.catalog {
        Some(path) => AssetCatalog::from_json_file(path)?,
        None => AssetCatalog::default(),
    };
    let params = GenerationParams {
        format: args.format,
        fit: args.fit,
        hero_tiles: args.hero_tiles,
        max_tiles: args.max_tiles,
        ..Default::default()
    };

    fs::create_dir_all(&args.screenshots_dir)?;
    fs::create_dir_all(&args.output_dir)?;

    if args.simulate {
        info!(
            "Rendering simulated capture plan into {:?}",
            args.screenshots_dir
        );
        let frames = simulate_capture_plan(&args.screenshots_dir)?;
        info!("Simulated {} frames", frames.len());
    }

    info!("Generating assets from {:?}", args.screenshots_dir);
    let report = match generate_assets_from_dir(
        &args.screenshots_dir,
        &args.output_dir,
        &catalog,
        &params,
    ) {
        Err(Error::EmptyInput) => {
            return Err(AppError::NoScreenshots {
                dir: args.screenshots_dir.display().to_string(),
            }
            .into());
        }
        other => other?,
    };

    info!("Asset generation complete!");
    info!("Generated: {}", report.generated);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    if report.errors > 0 {
        warn!("Completed with {} per-asset errors", report.errors);
    }

    Ok(())
}
