use clap::Parser;
use std::path::PathBuf;

use capshot::types::{FitPolicy, OutputFormat};

#[derive(Parser)]
#[command(name = "capshot", version, about = "CAPSHOT storefront asset generator")]
pub struct CliArgs {
    /// Directory of captured screenshots (PNG)
    #[arg(short, long, default_value = "screenshots")]
    pub screenshots_dir: PathBuf,

    /// Output directory for generated assets
    #[arg(short, long, default_value = "steam_assets")]
    pub output_dir: PathBuf,

    /// Render the simulated capture plan into the screenshots directory
    /// before generating (no live UI required)
    #[arg(long, default_value_t = false)]
    pub simulate: bool,

    /// Fit policy for capsule assets (cover or contain)
    #[arg(long, value_enum, default_value_t = FitPolicy::Cover)]
    pub fit: FitPolicy,

    /// Output format (png or jpeg)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::PNG)]
    pub format: OutputFormat,

    /// Newest screenshots tiled into the library hero
    #[arg(long, default_value_t = 6)]
    pub hero_tiles: usize,

    /// Maximum tiles the hero grid will hold
    #[arg(long, default_value_t = 12)]
    pub max_tiles: usize,

    /// JSON file overriding the built-in asset size catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
