//! Command Line Interface (CLI) layer for IMGBOX.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the crop and fit flows. It
//! wires user-provided options to the underlying library functionality
//! exposed via `imgbox::api`.
//!
//! If you are embedding IMGBOX into another application, prefer using
//! the high-level `imgbox::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
