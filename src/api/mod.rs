//! High-level library API: generate the ENVI header for one raster, or run a
//! whole input directory as a batch. Prefer these entrypoints over the
//! lower-level `core` and `io` modules when integrating envihdr.
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, error, info};

use crate::core::header::HeaderComposer;
use crate::core::sensors::SensorTable;
use crate::error::{Error, Result};
use crate::io::discovery::{find_rasters, find_sidecars, metadata_source, mirrored_dir};
use crate::io::imd::{parse_imd_file, parse_xml_file};
use crate::io::writers::envi::{header_path, write_header};
use crate::types::{RasterMetadata, SidecarKind};

/// A raster that did not get a header, and why.
#[derive(Debug, Clone, Serialize)]
pub struct RasterFailure {
    pub raster: PathBuf,
    pub error: String,
}

/// Outcome of a batch run. Per-raster failures do not fail the batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub found: usize,
    pub processed: usize,
    pub failed: usize,
    pub failures: Vec<RasterFailure>,
    pub started_at: String,
}

impl BatchReport {
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Wrote batch report: {:?}", path);
        Ok(())
    }
}

/// Copy every sidecar into `dest_dir`, unmodified.
fn copy_sidecars(sidecars: &[PathBuf], dest_dir: &Path) -> Result<()> {
    for src in sidecars {
        let Some(name) = src.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);
        // Output directory may be the input directory under another spelling;
        // copying a file onto itself truncates it
        if dest.exists() && fs::canonicalize(src)? == fs::canonicalize(&dest)? {
            debug!("{:?} is already in place", src);
            continue;
        }
        fs::copy(src, &dest)?;
        debug!("{:?} -> {:?}", src, dest);
    }
    Ok(())
}

/// Decide where the raster's metadata comes from: the override, else the
/// preferred sidecar.
fn resolve_metadata(sidecars: &[PathBuf], sensor_override: Option<&str>) -> Result<RasterMetadata> {
    if let Some(sensor_id) = sensor_override {
        debug!("Using sensor id override: {}", sensor_id);
        return Ok(RasterMetadata::from_sensor_id(sensor_id));
    }

    let source = metadata_source(sidecars);
    if let Some((kind, path)) = source {
        debug!("{} sidecar: {:?}", kind, path);
    }
    match source {
        Some((SidecarKind::Imd, path)) => parse_imd_file(path),
        Some((SidecarKind::Xml, path)) => parse_xml_file(path),
        _ => Err(Error::metadata(
            "Proper metadata was not provided. The image must have an IMD or XML file of the \
             same name with the satellite id, or the sensor id must be given explicitly \
             (--sensor-id).",
        )),
    }
}

/// Generate the header for one raster.
///
/// The raster's sidecars (the raster file included) are copied into the
/// mirrored output directory and `<stem>.hdr` is written beside them.
/// Returns the header path.
pub fn create_header(
    raster: &Path,
    input_dir: &Path,
    output_dir: &Path,
    sensor_override: Option<&str>,
    table: &SensorTable,
) -> Result<PathBuf> {
    let dest_dir = mirrored_dir(raster, input_dir, output_dir);
    debug!("Output path: {:?}", dest_dir);
    fs::create_dir_all(&dest_dir)?;

    let sidecars = find_sidecars(raster)?;
    copy_sidecars(&sidecars, &dest_dir)?;

    let meta = resolve_metadata(&sidecars, sensor_override)?;
    let doc = HeaderComposer::new(table).compose_metadata(&meta)?;

    let hdr = header_path(raster, &dest_dir);
    write_header(&hdr, &doc)?;
    debug!("New hdr file: {:?}", hdr);
    Ok(hdr)
}

/// Generate headers for every raster under `input_dir`.
///
/// Fails only when no rasters are found (or the output directory cannot be
/// created); individual raster failures are logged and recorded in the
/// report.
pub fn run(
    input_dir: &Path,
    output_dir: &Path,
    sensor_override: Option<&str>,
    table: &SensorTable,
) -> Result<BatchReport> {
    fs::create_dir_all(output_dir)?;

    let mut report = BatchReport {
        started_at: chrono::Utc::now().to_rfc3339(),
        ..Default::default()
    };

    let rasters = find_rasters(input_dir).inspect_err(|e| error!("{}", e))?;
    report.found = rasters.len();
    info!("{} Images found", report.found);

    for raster in &rasters {
        debug!("Input Image: {:?}", raster);
        match create_header(raster, input_dir, output_dir, sensor_override, table) {
            Ok(_) => report.processed += 1,
            Err(e) => {
                error!("Error processing {:?}: {}", raster, e);
                report.failed += 1;
                report.failures.push(RasterFailure {
                    raster: raster.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        "Header generation complete: {} processed, {} failed",
        report.processed, report.failed
    );
    Ok(report)
}
