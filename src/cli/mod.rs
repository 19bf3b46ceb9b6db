//! Command Line Interface (CLI) layer for CAPSHOT.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the simulate-and-generate
//! flow. It wires user-provided options to the underlying library
//! functionality exposed via `capshot::api`.
//!
//! If you are embedding CAPSHOT into another application, prefer using
//! the high-level `capshot::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
