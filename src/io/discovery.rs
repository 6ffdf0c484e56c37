//! Raster and sidecar discovery.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::types::SidecarKind;

/// Raster extensions, matched exactly (lowercase or uppercase convention).
pub const RASTER_EXTENSIONS: [&str; 2] = ["tif", "TIF"];

pub fn is_raster(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| RASTER_EXTENSIONS.contains(&ext))
}

/// All rasters under `input_dir`, recursively, sorted by path.
///
/// Unreadable entries (dangling links, link loops, permission errors) are
/// logged and skipped.
pub fn find_rasters(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut rasters = Vec::new();
    for entry in WalkDir::new(input_dir).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_raster(entry.path()) {
            rasters.push(entry.into_path());
        }
    }
    rasters.sort();

    if rasters.is_empty() {
        return Err(Error::NoInput {
            dir: input_dir.to_path_buf(),
        });
    }
    Ok(rasters)
}

/// Files next to `raster` named `<stem>.<anything>`, the raster included.
pub fn find_sidecars(raster: &Path) -> Result<Vec<PathBuf>> {
    let Some(stem) = raster.file_stem().and_then(|s| s.to_str()) else {
        return Ok(Vec::new());
    };
    let prefix = format!("{stem}.");
    let dir = match raster.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut sidecars = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(&prefix));
        if matches && path.is_file() {
            sidecars.push(path);
        }
    }
    sidecars.sort();
    Ok(sidecars)
}

/// Pick the sidecar to read metadata from: IMD first, then XML.
pub fn metadata_source(sidecars: &[PathBuf]) -> Option<(SidecarKind, &Path)> {
    [SidecarKind::Imd, SidecarKind::Xml]
        .into_iter()
        .find_map(|kind| {
            sidecars
                .iter()
                .find(|p| SidecarKind::from_path(p) == kind)
                .map(|p| (kind, p.as_path()))
        })
}

/// Where a raster's outputs go: its directory relative to `input_dir`,
/// mirrored under `output_dir`.
pub fn mirrored_dir(raster: &Path, input_dir: &Path, output_dir: &Path) -> PathBuf {
    let relative = raster
        .parent()
        .and_then(|parent| parent.strip_prefix(input_dir).ok())
        .unwrap_or_else(|| Path::new(""));
    output_dir.join(relative)
}
