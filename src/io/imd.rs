//! IMD sidecar parsing.
//!
//! DigitalGlobe IMD files are loose `key = value;` text dumps with nested
//! `BEGIN_GROUP`/`END_GROUP` blocks. Only four keys matter here, so each line
//! is flattened (whitespace, `;` and `"` removed) and matched by prefix rather
//! than parsed against a grammar.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::RasterMetadata;

const SAT_ID: &str = "satId";
const BAND_ID: &str = "bandId";
const ROWS: &str = "numRows";
const COLS: &str = "numColumns";

#[derive(Debug, Default)]
struct ImdFields {
    sat_id: Option<String>,
    band_id: Option<String>,
    rows: Option<String>,
    cols: Option<String>,
    lines: usize,
}

impl ImdFields {
    fn scan_line(&mut self, line: &str) {
        self.lines += 1;
        let raw: String = line
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ';' && *c != '"')
            .collect();

        // Later occurrences overwrite earlier ones
        let slot = if raw.starts_with(SAT_ID) {
            &mut self.sat_id
        } else if raw.starts_with(BAND_ID) {
            &mut self.band_id
        } else if raw.starts_with(ROWS) {
            &mut self.rows
        } else if raw.starts_with(COLS) {
            &mut self.cols
        } else {
            return;
        };

        let value = raw
            .split_once('=')
            .map(|(_, v)| v.to_string())
            .filter(|v| !v.is_empty());
        debug!("{}: {:?}", raw.split('=').next().unwrap_or(""), value);
        *slot = value;
    }

    fn finish(self) -> Result<RasterMetadata> {
        let (Some(sat_id), Some(band_id), Some(rows), Some(cols)) =
            (self.sat_id, self.band_id, self.rows, self.cols)
        else {
            return Err(Error::metadata("Proper metadata not found in IMD file."));
        };

        Ok(RasterMetadata {
            sensor_id: format!("{}_{}", sat_id, band_id),
            rows: Some(parse_dimension(ROWS, &rows)?),
            cols: Some(parse_dimension(COLS, &cols)?),
        })
    }
}

fn parse_dimension(key: &str, value: &str) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::metadata(format!(
            "{key} must be a positive integer, got: {value}"
        ))),
    }
}

/// Extract sensor id and raster dimensions from IMD text.
pub fn parse_imd(text: &str) -> Result<RasterMetadata> {
    let mut fields = ImdFields::default();
    for line in text.lines() {
        fields.scan_line(line);
    }
    fields.finish()
}

/// Read and parse an IMD file.
pub fn parse_imd_file(path: &Path) -> Result<RasterMetadata> {
    let reader = BufReader::new(File::open(path)?);
    let mut fields = ImdFields::default();
    for line in reader.lines() {
        fields.scan_line(&line?);
    }
    debug!("Total lines in IMD: {}", fields.lines);
    fields.finish()
}

/// XML sidecars are not parsed; callers get `NotSupported`.
pub fn parse_xml_file(path: &Path) -> Result<RasterMetadata> {
    Err(Error::NotSupported(format!(
        "XML metadata parsing is not implemented: {}",
        path.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOISY: &str = "version = \"28.3\";\n\
        \tsatId = \"WV02\";\n\
        bandId   =\t\"Multi\" ;\n\
        numRows = 7100;\n\
        \t\tnumColumns = 8610;\n";

    #[test]
    fn parses_keys_through_whitespace_noise() {
        let meta = parse_imd(NOISY).unwrap();
        assert_eq!(meta.sensor_id, "WV02_Multi");
        assert_eq!(meta.rows, Some(7100));
        assert_eq!(meta.cols, Some(8610));
    }

    #[test]
    fn any_missing_key_is_a_metadata_error() {
        for skip in ["satId", "bandId", "numRows", "numColumns"] {
            let text: String = NOISY
                .lines()
                .filter(|l| !l.contains(skip))
                .map(|l| format!("{l}\n"))
                .collect();
            assert!(
                matches!(parse_imd(&text), Err(Error::Metadata(_))),
                "missing {skip} should fail"
            );
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let text = NOISY.replace("\"Multi\"", "\"\"");
        assert!(matches!(parse_imd(&text), Err(Error::Metadata(_))));
    }

    #[test]
    fn bad_dimension_is_a_metadata_error() {
        let text = NOISY.replace("7100", "lots");
        assert!(matches!(parse_imd(&text), Err(Error::Metadata(_))));
        let text = NOISY.replace("8610", "0");
        assert!(matches!(parse_imd(&text), Err(Error::Metadata(_))));
    }

    #[test]
    fn casing_is_preserved_and_last_value_wins() {
        let text = format!("{NOISY}satId = \"wv03\";\n");
        let meta = parse_imd(&text).unwrap();
        assert_eq!(meta.sensor_id, "wv03_Multi");
        assert_eq!(meta.family(), "wv03");
    }

    #[test]
    fn xml_is_not_supported() {
        let err = parse_xml_file(Path::new("scene.XML")).unwrap_err();
        assert!(matches!(err, Error::NotSupported(_)));
    }
}
