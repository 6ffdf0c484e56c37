//! Command Line Interface (CLI) layer for envihdr.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): logging setup, parameter
//! resolution, and the batch run itself via `envihdr::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
