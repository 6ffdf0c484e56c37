#![doc = r#"
envihdr — ENVI header generation for DigitalGlobe GeoTIFF rasters.

Given a directory of `.tif` rasters with IMD metadata sidecars, envihdr reads each
sidecar's sensor id and dimensions, looks the sensor up in a static band table, and
writes an ENVI `.hdr` file (band count, dimensions, sensor type, band names and
wavelength centers) next to a copy of the raster and its sidecars. It powers the
`envihdr` CLI and can be embedded in other pipelines.

Quick start: a whole directory
------------------------------
```rust,no_run
use std::path::Path;
use envihdr::{run, SensorTable};

fn main() -> envihdr::Result<()> {
    let table = SensorTable::builtin();
    let report = run(Path::new("/data/images"), Path::new("/out"), None, &table)?;
    println!("found={} processed={} failed={}", report.found, report.processed, report.failed);
    Ok(())
}
```

Compose and serialize in memory
-------------------------------
```rust
use envihdr::{HeaderComposer, SensorTable, parse_imd, serialize};

let meta = parse_imd("satId = \"WV02\";\nbandId = \"Multi\";\nnumRows = 7100;\nnumColumns = 8610;\n")?;
let table = SensorTable::builtin();
let doc = HeaderComposer::new(&table).compose_metadata(&meta)?;
let text = serialize(&doc);
assert!(text.starts_with("ENVI\n"));
assert!(text.contains("lines = 7100\n"));
# Ok::<(), envihdr::Error>(())
```

Error handling
--------------
All public functions return `envihdr::Result<T>`. `Error::NoInput` is the only
batch-fatal error; `Metadata`, `UnknownSensor`, `NotSupported` and I/O errors for a
single raster are logged by [`run`] and recorded in the [`BatchReport`].

Useful modules
--------------
- [`api`] — batch driver and single-raster entry point.
- [`core`] — sensor band table and header composer.
- [`io`] — discovery, IMD parsing, and the `.hdr` writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::header::{HeaderComposer, HeaderDocument};
pub use crate::core::params::BatchParams;
pub use crate::core::sensors::{SensorProfile, SensorTable};
pub use error::{Error, Result};
pub use types::{RasterMetadata, SidecarKind};

pub use io::imd::{parse_imd, parse_imd_file, parse_xml_file};
pub use io::writers::envi::{serialize, write_header};

pub use api::{BatchReport, RasterFailure, create_header, run};
