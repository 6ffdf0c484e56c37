use clap::Parser;
use std::path::PathBuf;

use envihdr::BatchParams;

#[derive(Parser)]
#[command(
    name = "envihdr",
    version,
    about = "Generate ENVI .hdr files for DigitalGlobe GeoTIFF rasters"
)]
pub struct CliArgs {
    /// Directory searched recursively for .tif/.TIF rasters
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving sidecar copies and .hdr files (mirrors input layout)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Explicit sensor id (e.g. WV02_Multi); skips IMD parsing for every raster
    #[arg(short, long)]
    pub sensor_id: Option<String>,

    /// JSON parameter file; explicit flags take precedence over its values
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Write a JSON batch report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Do not write envi_hdr.log into the output directory
    #[arg(long, default_value_t = false)]
    pub no_log_file: bool,

    /// Debug-level console logging (RUST_LOG overrides)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parameters given on the command line; unset fields stay `None`.
    pub fn batch_params(&self) -> BatchParams {
        BatchParams {
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            sensor_id: self
                .sensor_id
                .clone()
                .filter(|s| !s.trim().is_empty()),
            log_file: if self.no_log_file { Some(false) } else { None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_batch_params() {
        let args = CliArgs::try_parse_from([
            "envihdr",
            "-i",
            "/data/in",
            "--output-dir",
            "/data/out",
            "--sensor-id",
            "WV02_Multi",
            "--no-log-file",
        ])
        .unwrap();
        let params = args.batch_params();
        assert_eq!(params.input_dir, Some(PathBuf::from("/data/in")));
        assert_eq!(params.output_dir, Some(PathBuf::from("/data/out")));
        assert_eq!(params.sensor_id.as_deref(), Some("WV02_Multi"));
        assert_eq!(params.log_file, Some(false));
    }

    #[test]
    fn blank_sensor_id_is_ignored() {
        let args = CliArgs::try_parse_from(["envihdr", "--sensor-id", "  "]).unwrap();
        let params = args.batch_params();
        assert_eq!(params.sensor_id, None);
        assert_eq!(params.log_file, None);
    }
}
