#![doc = r#"
CAPSHOT — a storefront screenshot asset pipeline.

This crate turns gameplay screenshots (captured or simulated) into the full
set of storefront marketing assets: store capsules, the screenshot size, and
the grid-composed library hero. It powers the CAPSHOT CLI and can be embedded
in your own Rust applications.

The heart of the crate is a deterministic image transform engine:

- **Fit transform** — maps any source aspect ratio onto an exact target size
  under a `Cover` (scale-to-fill, center-crop) or `Contain` (scale-to-fit,
  letterbox) policy, resampling with Lanczos3.
- **Grid composer** — tiles the newest screenshots into a fixed 16:9 cell
  grid on the library-hero canvas, with a reserved title-bar block.

Quick start: generate the full asset set
----------------------------------------
```rust,no_run
use std::path::Path;
use capshot::{AssetCatalog, GenerationParams, generate_assets_from_dir};

fn main() -> capshot::Result<()> {
    let report = generate_assets_from_dir(
        Path::new("screenshots"),
        Path::new("steam_assets"),
        &AssetCatalog::default(),
        &GenerationParams::default(),
    )?;
    println!(
        "generated={} skipped={} errors={}",
        report.generated, report.skipped, report.errors
    );
    Ok(())
}
```

Fit a single frame in memory
----------------------------
```rust
use image::RgbImage;
use capshot::{FitPolicy, TargetSize, fit_image};

fn main() -> capshot::Result<()> {
    let frame = RgbImage::from_pixel(1920, 1080, image::Rgb([30, 30, 50]));
    let capsule = fit_image(
        &frame,
        TargetSize::new(462, 174),
        FitPolicy::Cover,
        [0, 0, 0],
    )?;
    assert_eq!(capsule.dimensions(), (462, 174));
    Ok(())
}
```

No live UI? Simulate the capture plan
-------------------------------------
```rust,no_run
use std::path::Path;
use capshot::simulate_capture_plan;

fn main() -> capshot::Result<()> {
    let frames = simulate_capture_plan(Path::new("screenshots"))?;
    println!("rendered {} placeholder frames", frames.len());
    Ok(())
}
```

Error handling
--------------
All public functions return `capshot::Result<T>`; match on `capshot::Error`
to handle specific cases, e.g. `InvalidDimension` or `EmptyInput`.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — the fit/grid transform engine and generation parameters.
- [`types`] — enums and core types (e.g. `FitPolicy`, `TargetSize`).
- [`io`] — screenshot scanning/decoding and PNG/JPEG writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::catalog::{AssetCatalog, AssetSpec};
pub use core::params::GenerationParams;
pub use error::{Error, Result};
pub use types::{Fill, FitPolicy, OutputFormat, TargetSize};

// Transform engine
pub use core::processing::fit::{FitGeometry, contain_geometry, cover_geometry, fit_image};
pub use core::processing::grid::{GridLayout, compose_grid};
pub use core::processing::placeholder::{SCENE_PLAN, Scene, render_placeholder};

// High-level API re-exports
pub use api::{
    BatchReport, compose_library_hero, generate_assets_from_dir, generate_store_assets,
    simulate_capture_plan,
};
