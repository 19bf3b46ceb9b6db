//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and image-codec errors, and provides semantic variants
//! for argument validation and processing failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("Dimension must be greater than 0: {dim}={value}")]
    InvalidDimension { dim: &'static str, value: u32 },

    #[error("No source images available")]
    EmptyInput,

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
