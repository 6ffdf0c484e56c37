//! Static band tables for the DigitalGlobe sensor family.
//!
//! A sensor id is `<FAMILY>_<BANDCONFIG>` (e.g. `WV02_MULTI`). The family
//! maps to the ENVI `sensor type` token; the full id maps to the ordered
//! band names and weighted band centers. Lookups are case-insensitive.
//!
//! The table is a plain value: build it once with [`SensorTable::builtin`]
//! and hand it to whatever needs it. Tests fabricate their own with
//! [`SensorTable::new`] plus the `with_*` builders.
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::sensor_family;

/// Unit string written to `wavelength units`.
pub const WAVELENGTH_UNITS: &str = "Micrometers";

/// Band names written for any 3-band product, in this order.
pub const RGB_BANDS: [&str; 3] = ["Red", "Green", "Blue"];

const FAMILIES: &[(&str, &str)] = &[
    ("QB02", "QuickBird"),
    ("WV01", "WorldView-1"),
    ("WV02", "WorldView-2"),
    ("WV03", "WorldView-3"),
    ("GE01", "GeoEye-1"),
    ("IK01", "IKONOS"),
];

// Weighted band centers in micrometers, (name, center) in band order.
const WV02_MULTI: &[(&str, f64)] = &[
    ("Coastal", 0.4273),
    ("Blue", 0.4779),
    ("Green", 0.5462),
    ("Yellow", 0.6080),
    ("Red", 0.6587),
    ("Red Edge", 0.7237),
    ("NIR1", 0.8313),
    ("NIR2", 0.9080),
];

const WV03_MULTI: &[(&str, f64)] = &[
    ("Coastal", 0.4274),
    ("Blue", 0.4819),
    ("Green", 0.5471),
    ("Yellow", 0.6043),
    ("Red", 0.6601),
    ("Red Edge", 0.7227),
    ("NIR1", 0.8240),
    ("NIR2", 0.9136),
];

const WV03_SWIR: &[(&str, f64)] = &[
    ("SWIR1", 1.2098),
    ("SWIR2", 1.5706),
    ("SWIR3", 1.6604),
    ("SWIR4", 1.7299),
    ("SWIR5", 2.1637),
    ("SWIR6", 2.2010),
    ("SWIR7", 2.2563),
    ("SWIR8", 2.2947),
];

const SENSORS: &[(&str, &[(&str, f64)])] = &[
    // QuickBird
    ("QB02_P", &[("Pan", 0.5745)]),
    (
        "QB02_MULTI",
        &[("Blue", 0.4877), ("Green", 0.5430), ("Red", 0.6505), ("NIR", 0.8165)],
    ),
    ("QB02_RGB", &[("Blue", 0.4877), ("Green", 0.5430), ("Red", 0.6505)]),
    // WorldView-1 is panchromatic only
    ("WV01_P", &[("Pan", 0.6496)]),
    // WorldView-2
    ("WV02_P", &[("Pan", 0.6274)]),
    ("WV02_MULTI", WV02_MULTI),
    (
        "WV02_MS1",
        &[("Blue", 0.4779), ("Green", 0.5462), ("Red", 0.6587), ("NIR1", 0.8313)],
    ),
    ("WV02_RGB", &[("Blue", 0.4779), ("Green", 0.5462), ("Red", 0.6587)]),
    // WorldView-3
    ("WV03_P", &[("Pan", 0.6492)]),
    ("WV03_MULTI", WV03_MULTI),
    (
        "WV03_MS1",
        &[("Blue", 0.4819), ("Green", 0.5471), ("Red", 0.6601), ("NIR1", 0.8240)],
    ),
    ("WV03_RGB", &[("Blue", 0.4819), ("Green", 0.5471), ("Red", 0.6601)]),
    ("WV03_SWIR", WV03_SWIR),
    // GeoEye-1
    ("GE01_P", &[("Pan", 0.6176)]),
    (
        "GE01_MULTI",
        &[("Blue", 0.4784), ("Green", 0.5439), ("Red", 0.6770), ("NIR", 0.8030)],
    ),
    ("GE01_RGB", &[("Blue", 0.4784), ("Green", 0.5439), ("Red", 0.6770)]),
    // IKONOS
    ("IK01_P", &[("Pan", 0.6789)]),
    (
        "IK01_MULTI",
        &[("Blue", 0.4804), ("Green", 0.5505), ("Red", 0.6645), ("NIR", 0.8050)],
    ),
    ("IK01_RGB", &[("Blue", 0.4804), ("Green", 0.5505), ("Red", 0.6645)]),
];

/// Ordered band names and centers for one sensor configuration.
///
/// The ENVI sensor type is shared by every configuration of a satellite, so
/// it is kept per family and resolved with [`SensorTable::sensor_type`];
/// the display unit is always [`WAVELENGTH_UNITS`].
#[derive(Debug, Clone, PartialEq)]
pub struct SensorProfile {
    band_names: Vec<String>,
    band_centers: Vec<f64>,
}

impl SensorProfile {
    /// Build a profile from parallel name/center lists.
    pub fn new(id: &str, band_names: Vec<String>, band_centers: Vec<f64>) -> Result<Self> {
        if band_names.len() != band_centers.len() {
            return Err(Error::InvalidProfile {
                id: id.to_string(),
                names: band_names.len(),
                centers: band_centers.len(),
            });
        }
        Ok(Self {
            band_names,
            band_centers,
        })
    }

    fn from_bands(bands: &[(&str, f64)]) -> Self {
        Self {
            band_names: bands.iter().map(|(name, _)| name.to_string()).collect(),
            band_centers: bands.iter().map(|(_, center)| *center).collect(),
        }
    }

    pub fn band_names(&self) -> &[String] {
        &self.band_names
    }

    pub fn band_centers(&self) -> &[f64] {
        &self.band_centers
    }

    pub fn band_count(&self) -> usize {
        self.band_names.len()
    }
}

/// Immutable lookup from sensor ids and families to band data.
#[derive(Debug, Clone, Default)]
pub struct SensorTable {
    families: HashMap<String, String>,
    profiles: HashMap<String, SensorProfile>,
}

impl SensorTable {
    /// An empty table; populate it with the `with_*` builders.
    pub fn new() -> Self {
        Self::default()
    }

    /// The known DigitalGlobe sensor configurations.
    pub fn builtin() -> Self {
        let families = FAMILIES
            .iter()
            .map(|(family, envi)| (family.to_string(), envi.to_string()))
            .collect();
        let profiles = SENSORS
            .iter()
            .map(|(id, bands)| (id.to_string(), SensorProfile::from_bands(bands)))
            .collect();
        Self { families, profiles }
    }

    pub fn with_family(mut self, family: &str, envi_sensor_type: &str) -> Self {
        self.families
            .insert(family.to_ascii_uppercase(), envi_sensor_type.to_string());
        self
    }

    pub fn with_profile(mut self, sensor_id: &str, profile: SensorProfile) -> Self {
        self.profiles.insert(sensor_id.to_ascii_uppercase(), profile);
        self
    }

    /// ENVI `sensor type` token for a satellite family such as `WV02`.
    pub fn lookup(&self, family: &str) -> Result<&str> {
        self.families
            .get(&family.to_ascii_uppercase())
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownSensor(format!("no ENVI sensor type for family {family}")))
    }

    /// ENVI `sensor type` token for a full sensor id, via its family prefix.
    pub fn sensor_type(&self, sensor_id: &str) -> Result<&str> {
        self.lookup(sensor_family(sensor_id))
    }

    /// Band profile for a full sensor id such as `WV02_Multi`.
    pub fn profile(&self, sensor_id: &str) -> Result<&SensorProfile> {
        self.profiles
            .get(&sensor_id.to_ascii_uppercase())
            .ok_or_else(|| Error::UnknownSensor(format!("no band table for sensor {sensor_id}")))
    }
}
