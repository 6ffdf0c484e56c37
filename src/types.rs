//! Shared types used across envihdr.
//! Includes `RasterMetadata` (what a sidecar tells us about a raster) and
//! `SidecarKind` (how a sidecar file is classified by extension).
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Sensor identity and raster dimensions for one input image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterMetadata {
    /// `<FAMILY>_<BANDCONFIG>`, e.g. `WV02_Multi`, in source casing
    pub sensor_id: String,
    pub rows: Option<u64>,
    pub cols: Option<u64>,
}

impl RasterMetadata {
    /// Metadata synthesized from an explicit sensor id; dimensions are unknown.
    pub fn from_sensor_id(sensor_id: &str) -> Self {
        Self {
            sensor_id: sensor_id.to_string(),
            rows: None,
            cols: None,
        }
    }

    /// Satellite family, the part of the sensor id before the first underscore.
    pub fn family(&self) -> &str {
        sensor_family(&self.sensor_id)
    }
}

/// Satellite family of a sensor id: `WV02` for `WV02_Multi`, the whole id if it has no `_`.
pub fn sensor_family(sensor_id: &str) -> &str {
    sensor_id.split_once('_').map_or(sensor_id, |(family, _)| family)
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum SidecarKind {
    Imd,
    Xml,
    Other,
}

impl SidecarKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "imd" => SidecarKind::Imd,
            "xml" => SidecarKind::Xml,
            _ => SidecarKind::Other,
        }
    }
}

impl std::fmt::Display for SidecarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SidecarKind::Imd => write!(f, "IMD"),
            SidecarKind::Xml => write!(f, "XML"),
            SidecarKind::Other => write!(f, "other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_is_prefix_before_first_underscore() {
        assert_eq!(sensor_family("WV02_Multi"), "WV02");
        assert_eq!(sensor_family("WV03_All_S"), "WV03");
        assert_eq!(sensor_family("WV01"), "WV01");
        assert_eq!(RasterMetadata::from_sensor_id("ge01_P").family(), "ge01");
    }

    #[test]
    fn sidecar_kind_ignores_extension_case() {
        assert_eq!(SidecarKind::from_path(Path::new("a/scene.IMD")), SidecarKind::Imd);
        assert_eq!(SidecarKind::from_path(Path::new("a/scene.xml")), SidecarKind::Xml);
        assert_eq!(SidecarKind::from_path(Path::new("a/scene.tif")), SidecarKind::Other);
    }
}
