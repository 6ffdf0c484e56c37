//! I/O layer: raster and sidecar discovery, IMD sidecar parsing, and the
//! ENVI header writer.
pub mod discovery;
pub use discovery::{find_rasters, find_sidecars, metadata_source};

pub mod imd;
pub use imd::{parse_imd, parse_imd_file, parse_xml_file};

pub mod writers;
