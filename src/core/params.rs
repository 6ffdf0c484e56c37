use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name of the log file written into the output directory.
pub const LOG_FILE_NAME: &str = "envi_hdr.log";

/// Batch parameters suitable for JSON parameter files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchParams {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// Explicit sensor id (e.g. `WV02_Multi`); bypasses sidecar parsing
    pub sensor_id: Option<String>,
    /// Mirror log output into `envi_hdr.log` under the output directory
    pub log_file: Option<bool>,
}

impl BatchParams {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Fill unset fields from `other`; values already set here win.
    pub fn or(self, other: BatchParams) -> Self {
        Self {
            input_dir: self.input_dir.or(other.input_dir),
            output_dir: self.output_dir.or(other.output_dir),
            sensor_id: self.sensor_id.or(other.sensor_id),
            log_file: self.log_file.or(other.log_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_leaves_missing_fields_unset() {
        let params: BatchParams =
            serde_json::from_str(r#"{ "input_dir": "/data/in", "sensor_id": "WV03_SWIR" }"#)
                .unwrap();
        assert_eq!(params.input_dir, Some(PathBuf::from("/data/in")));
        assert_eq!(params.output_dir, None);
        assert_eq!(params.sensor_id.as_deref(), Some("WV03_SWIR"));
        assert_eq!(params.log_file, None);
    }

    #[test]
    fn explicit_values_override_file_values() {
        let from_cli = BatchParams {
            output_dir: Some(PathBuf::from("/cli/out")),
            ..Default::default()
        };
        let from_file = BatchParams {
            input_dir: Some(PathBuf::from("/file/in")),
            output_dir: Some(PathBuf::from("/file/out")),
            sensor_id: None,
            log_file: Some(false),
        };

        let merged = from_cli.or(from_file);
        assert_eq!(merged.input_dir, Some(PathBuf::from("/file/in")));
        assert_eq!(merged.output_dir, Some(PathBuf::from("/cli/out")));
        assert_eq!(merged.log_file, Some(false));
    }
}
