//! Core processing building blocks: the fit transform engine, the hero grid
//! composer, resampling, placeholder rendering, and save helpers. These are
//! internal primitives consumed by the high-level `api` module.
pub mod catalog;
pub mod params;
pub mod processing;
