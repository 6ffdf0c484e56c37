use tracing::debug;

use crate::core::sensors::{RGB_BANDS, SensorTable, WAVELENGTH_UNITS};
use crate::error::Result;
use crate::types::RasterMetadata;

pub const DESCRIPTION: &str = "{Creating ENVI hdr file from image data}";

/// Contents of one ENVI `.hdr` file, in write order.
///
/// List-valued fields (`band_names`, `wavelength`) are already rendered in
/// ENVI brace syntax, so every field is an opaque string to the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDocument {
    pub description: String,
    pub sensor_type: String,
    pub lines: Option<String>,
    pub samples: Option<String>,
    pub bands: String,
    pub band_names: String,
    pub wavelength: String,
    pub wavelength_units: String,
}

impl HeaderDocument {
    /// `(field name, value)` pairs in the fixed ENVI write order, skipping
    /// absent dimensions.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("description", self.description.as_str()),
            ("sensor type", self.sensor_type.as_str()),
        ];
        if let Some(lines) = &self.lines {
            fields.push(("lines", lines.as_str()));
        }
        if let Some(samples) = &self.samples {
            fields.push(("samples", samples.as_str()));
        }
        fields.push(("bands", self.bands.as_str()));
        fields.push(("band names", self.band_names.as_str()));
        fields.push(("wavelength", self.wavelength.as_str()));
        fields.push(("wavelength units", self.wavelength_units.as_str()));
        fields
    }
}

/// Render a list as `{a, b, c}`.
pub fn envi_list<T: ToString>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", joined)
}

/// Builds header documents against an injected sensor table.
#[derive(Debug, Clone, Copy)]
pub struct HeaderComposer<'a> {
    table: &'a SensorTable,
}

impl<'a> HeaderComposer<'a> {
    pub fn new(table: &'a SensorTable) -> Self {
        Self { table }
    }

    pub fn compose_metadata(&self, meta: &RasterMetadata) -> Result<HeaderDocument> {
        self.compose(&meta.sensor_id, meta.rows, meta.cols)
    }

    pub fn compose(
        &self,
        sensor_id: &str,
        rows: Option<u64>,
        cols: Option<u64>,
    ) -> Result<HeaderDocument> {
        let profile = self.table.profile(sensor_id)?;
        let sensor_type = self.table.sensor_type(sensor_id)?;

        debug!("Band Names: {:?}", profile.band_names());
        debug!("Band centers: {:?}", profile.band_centers());

        let (lines, samples) = match (rows, cols) {
            (Some(rows), Some(cols)) => (Some(rows.to_string()), Some(cols.to_string())),
            _ => (None, None),
        };

        // Any 3-band product is treated as a true-color composite. Centers are
        // picked in RGB order; a profile lacking one of the RGB names yields
        // fewer wavelengths than band names.
        let (band_names, wavelength) = if profile.band_count() == 3 {
            let centers: Vec<f64> = RGB_BANDS
                .iter()
                .filter_map(|rgb| profile.band_names().iter().position(|name| name == rgb))
                .map(|index| profile.band_centers()[index])
                .collect();
            (envi_list(&RGB_BANDS), envi_list(&centers))
        } else {
            (
                envi_list(profile.band_names()),
                envi_list(profile.band_centers()),
            )
        };

        Ok(HeaderDocument {
            description: DESCRIPTION.to_string(),
            sensor_type: sensor_type.to_string(),
            lines,
            samples,
            bands: profile.band_count().to_string(),
            band_names,
            wavelength,
            wavelength_units: WAVELENGTH_UNITS.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sensors::SensorProfile;
    use crate::error::Error;

    fn profile(id: &str, bands: &[(&str, f64)]) -> SensorProfile {
        SensorProfile::new(
            id,
            bands.iter().map(|(n, _)| n.to_string()).collect(),
            bands.iter().map(|(_, c)| *c).collect(),
        )
        .unwrap()
    }

    fn fabricated_table() -> SensorTable {
        SensorTable::new()
            .with_family("TS01", "TestSat")
            .with_profile(
                "TS01_RGB",
                profile("TS01_RGB", &[("Blue", 0.48), ("Green", 0.55), ("Red", 0.66)]),
            )
            .with_profile(
                "TS01_NRG",
                profile("TS01_NRG", &[("NIR", 0.83), ("Red", 0.66), ("Green", 0.55)]),
            )
            .with_profile(
                "TS01_QUAD",
                profile(
                    "TS01_QUAD",
                    &[("Blue", 0.48), ("Green", 0.55), ("Red", 0.66), ("NIR", 0.83)],
                ),
            )
    }

    #[test]
    fn eight_band_profile_keeps_native_order() {
        let table = SensorTable::builtin();
        let doc = HeaderComposer::new(&table)
            .compose("WV02_Multi", Some(7100), Some(8610))
            .unwrap();

        assert_eq!(doc.sensor_type, "WorldView-2");
        assert_eq!(doc.lines.as_deref(), Some("7100"));
        assert_eq!(doc.samples.as_deref(), Some("8610"));
        assert_eq!(doc.bands, "8");
        assert_eq!(
            doc.band_names,
            "{Coastal, Blue, Green, Yellow, Red, Red Edge, NIR1, NIR2}"
        );
        assert_eq!(
            doc.wavelength,
            "{0.4273, 0.4779, 0.5462, 0.608, 0.6587, 0.7237, 0.8313, 0.908}"
        );
        assert_eq!(doc.wavelength_units, "Micrometers");
    }

    #[test]
    fn three_band_profile_is_reindexed_to_rgb_order() {
        let table = fabricated_table();
        let doc = HeaderComposer::new(&table)
            .compose("TS01_RGB", None, None)
            .unwrap();

        assert_eq!(doc.bands, "3");
        assert_eq!(doc.band_names, "{Red, Green, Blue}");
        assert_eq!(doc.wavelength, "{0.66, 0.55, 0.48}");
    }

    #[test]
    fn three_band_profile_without_blue_emits_short_wavelength_list() {
        let table = fabricated_table();
        let doc = HeaderComposer::new(&table)
            .compose("TS01_NRG", None, None)
            .unwrap();

        assert_eq!(doc.band_names, "{Red, Green, Blue}");
        assert_eq!(doc.wavelength, "{0.66, 0.55}");
    }

    #[test]
    fn dimensions_require_both_rows_and_cols() {
        let table = fabricated_table();
        let composer = HeaderComposer::new(&table);

        let doc = composer.compose("TS01_QUAD", Some(10), None).unwrap();
        assert!(doc.lines.is_none());
        assert!(doc.samples.is_none());
        let names: Vec<_> = doc.fields().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            [
                "description",
                "sensor type",
                "bands",
                "band names",
                "wavelength",
                "wavelength units"
            ]
        );
    }

    #[test]
    fn unknown_sensor_propagates() {
        let table = fabricated_table();
        let composer = HeaderComposer::new(&table);
        assert!(matches!(
            composer.compose("TS01_PAN", None, None),
            Err(Error::UnknownSensor(_))
        ));

        let orphan = SensorTable::new().with_profile("ZZ01_P", profile("ZZ01_P", &[("Pan", 0.6)]));
        assert!(matches!(
            HeaderComposer::new(&orphan).compose("ZZ01_P", None, None),
            Err(Error::UnknownSensor(_))
        ));
    }

    #[test]
    fn envi_list_uses_braces_and_comma_space() {
        assert_eq!(envi_list(&["a", "b"]), "{a, b}");
        assert_eq!(envi_list::<f64>(&[]), "{}");
    }
}
