//! envihdr CLI entrypoint.
//!
//! Parses arguments and hands off to the `cli` module. Batch-fatal errors
//! (no rasters, missing directories) exit non-zero; per-raster failures are
//! only logged.
//! For programmatic use, prefer the library API (`envihdr::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
