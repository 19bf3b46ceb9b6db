use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No screenshots found in {dir}; capture some or pass --simulate")]
    NoScreenshots { dir: String },

    #[error("Tile count must be greater than 0: {arg}")]
    ZeroTiles { arg: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Asset pipeline error: {0}")]
    Pipeline(#[from] capshot::Error),
}
