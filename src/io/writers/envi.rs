use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::header::HeaderDocument;
use crate::error::Result;

/// First line of every ENVI header.
pub const ENVI_MAGIC: &str = "ENVI";

/// Render a header document as ENVI `.hdr` text.
pub fn serialize(doc: &HeaderDocument) -> String {
    let mut out = String::new();
    out.push_str(ENVI_MAGIC);
    out.push('\n');
    for (name, value) in doc.fields() {
        out.push_str(name);
        out.push_str(" = ");
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// `<stem>.hdr` for `raster`, placed in `output_dir`.
pub fn header_path(raster: &Path, output_dir: &Path) -> PathBuf {
    let mut name = raster.file_stem().unwrap_or(raster.as_os_str()).to_os_string();
    name.push(".hdr");
    output_dir.join(name)
}

/// Write the header next to the raster copy.
pub fn write_header(path: &Path, doc: &HeaderDocument) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(serialize(doc).as_bytes())?;
    file.flush()?;
    Ok(())
}
