//! Calibration entries and the builtin satellite catalog.

use crate::error::{CatalogError, CatalogResult};
use crate::lut::Lut;
use crate::tables::{
    MET7_IR_RADIANCES, MET7_WV_RADIANCES, MTSAT_IR1_TEMPERATURES, MTSAT_IR3_TEMPERATURES,
    MTSAT_IR4_TEMPERATURES,
};
use once_cell::sync::Lazy;
use sat_common::SatelliteFamily;
use tracing::debug;

// ============================================================================
// Calibration constants
// ============================================================================

/// Full-range count of the 10-bit GOES imager.
const GOES_MAX_COUNT: f64 = 1023.0;

/// Temperature range (K) spanned by GOES infrared counts.
const GOES_IR_MIN_K: f64 = 170.0;
const GOES_IR_MAX_K: f64 = 340.0;

/// Meteosat-7 calibration coefficients. These are time dependent in reality;
/// the values are representative.
const MET7_IR_CALIBRATION: f64 = 0.104;
const MET7_WV_CALIBRATION: f64 = 0.011;
/// Space count offset, varies between 5 and 6.
const MET7_SPACE_COUNT: f64 = 5.0;

/// First temperature (K) of the Meteosat-7 radiance tables, one entry per kelvin.
const MET7_FIRST_TEMPERATURE_K: u32 = 170;

/// MTSAT-2 fill value for every channel.
const MTSAT_NODATA: f64 = 255.0;

const MSG_WAVELENGTHS: [u32; 12] = [
    600, 800, 1600, 3900, 6200, 7300, 8700, 9700, 10800, 12000, 13400, 700,
];
const MSG_SCALE: [f64; 12] = [
    100.0, 100.0, 100.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 100.0,
];

// ============================================================================
// Types
// ============================================================================

/// How the stored values of a satellite's channels become physical units.
#[derive(Debug, Clone, PartialEq)]
pub enum Calibration {
    /// `physical = scale * raw + offset`, one pair per channel
    Linear { scale: Vec<f64>, offset: Vec<f64> },
    /// One lookup table per channel
    Lut(Vec<Lut>),
    /// No transform known; bands are passed through untouched
    Uncalibrated,
}

/// Transform applying to a single channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelTransform<'a> {
    Linear { scale: f64, offset: f64 },
    Lut(&'a Lut),
    None,
}

/// Catalog record for one satellite.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationEntry {
    /// Satellite identifier as it appears in dataset descriptions
    pub name: String,
    /// Channel center wavelengths in nm, in band order
    pub wavelengths: Vec<u32>,
    pub calibration: Calibration,
    /// Per-channel no-data sentinel
    pub nodata: Option<Vec<f64>>,
}

impl CalibrationEntry {
    pub fn linear(name: &str, wavelengths: Vec<u32>, scale: Vec<f64>, offset: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            wavelengths,
            calibration: Calibration::Linear { scale, offset },
            nodata: None,
        }
    }

    pub fn with_luts(name: &str, wavelengths: Vec<u32>, luts: Vec<Lut>) -> Self {
        Self {
            name: name.to_string(),
            wavelengths,
            calibration: Calibration::Lut(luts),
            nodata: None,
        }
    }

    pub fn uncalibrated(name: &str, wavelengths: Vec<u32>) -> Self {
        Self {
            name: name.to_string(),
            wavelengths,
            calibration: Calibration::Uncalibrated,
            nodata: None,
        }
    }

    pub fn with_nodata(mut self, nodata: Vec<f64>) -> Self {
        self.nodata = Some(nodata);
        self
    }

    pub fn family(&self) -> SatelliteFamily {
        SatelliteFamily::from_name(&self.name)
    }

    pub fn channel_count(&self) -> usize {
        self.wavelengths.len()
    }

    /// Transform for the channel at `index` (0-based).
    pub fn channel_transform(&self, index: usize) -> ChannelTransform<'_> {
        match &self.calibration {
            Calibration::Linear { scale, offset } => match (scale.get(index), offset.get(index)) {
                (Some(&scale), Some(&offset)) => ChannelTransform::Linear { scale, offset },
                _ => ChannelTransform::None,
            },
            Calibration::Lut(luts) => luts
                .get(index)
                .map(ChannelTransform::Lut)
                .unwrap_or(ChannelTransform::None),
            Calibration::Uncalibrated => ChannelTransform::None,
        }
    }

    /// No-data value for the channel at `index` (0-based).
    pub fn nodata(&self, index: usize) -> Option<f64> {
        self.nodata.as_ref().and_then(|n| n.get(index).copied())
    }

    /// Check that every per-channel array has one value per wavelength.
    pub fn validate(&self) -> CatalogResult<()> {
        let expected = self.wavelengths.len();
        let check = |field: &'static str, actual: usize| {
            if actual == expected {
                Ok(())
            } else {
                Err(CatalogError::LengthMismatch {
                    satellite: self.name.clone(),
                    field,
                    expected,
                    actual,
                })
            }
        };

        match &self.calibration {
            Calibration::Linear { scale, offset } => {
                check("scale", scale.len())?;
                check("offset", offset.len())?;
            }
            Calibration::Lut(luts) => check("lut", luts.len())?,
            Calibration::Uncalibrated => {}
        }
        if let Some(nodata) = &self.nodata {
            check("nodata", nodata.len())?;
        }
        Ok(())
    }
}

/// Ordered collection of calibration entries.
#[derive(Debug, Clone, Default)]
pub struct SatelliteCatalog {
    entries: Vec<CalibrationEntry>,
}

static BUILTIN: Lazy<SatelliteCatalog> = Lazy::new(SatelliteCatalog::builtin);

/// Process-wide builtin catalog, built on first use.
pub fn builtin_catalog() -> &'static SatelliteCatalog {
    &BUILTIN
}

impl SatelliteCatalog {
    pub fn new(entries: Vec<CalibrationEntry>) -> Self {
        Self { entries }
    }

    /// Catalog of every Eumetcast satellite the MSG driver can deliver.
    pub fn builtin() -> Self {
        let goes_scale = {
            let ir = (GOES_IR_MAX_K - GOES_IR_MIN_K) / GOES_MAX_COUNT;
            vec![100.0 / GOES_MAX_COUNT, ir, ir, ir]
        };
        let goes_offset = vec![0.0, GOES_IR_MIN_K, GOES_IR_MIN_K, GOES_IR_MIN_K];
        let goes_wavelengths = vec![700, 10700, 3900, 6600];

        // Visible channels of the count-delivering imagers stretch 0..255 to 0..100 %.
        let visible = Lut::linear(0.0, 0.0, 255.0, 100.0);

        let met7_temperatures: Vec<f64> = (0..MET7_IR_RADIANCES.len() as u32)
            .map(|i| f64::from(MET7_FIRST_TEMPERATURE_K + i))
            .collect();

        let msg = |name: &str| {
            CalibrationEntry::linear(
                name,
                MSG_WAVELENGTHS.to_vec(),
                MSG_SCALE.to_vec(),
                vec![0.0; MSG_WAVELENGTHS.len()],
            )
        };

        let entries = vec![
            CalibrationEntry::linear(
                "GOES13",
                goes_wavelengths.clone(),
                goes_scale.clone(),
                goes_offset.clone(),
            ),
            CalibrationEntry::linear("GOES15", goes_wavelengths, goes_scale, goes_offset),
            // The 12 µm channel is not delivered by the driver
            CalibrationEntry::with_luts(
                "MTSAT2",
                vec![700, 3800, 6800, 10800],
                vec![
                    visible.clone(),
                    Lut::from_counts(&MTSAT_IR4_TEMPERATURES),
                    Lut::from_counts(&MTSAT_IR3_TEMPERATURES),
                    Lut::from_counts(&MTSAT_IR1_TEMPERATURES),
                ],
            )
            .with_nodata(vec![MTSAT_NODATA; 4]),
            CalibrationEntry::with_luts(
                "MET7",
                vec![795, 6400, 11500],
                vec![
                    visible,
                    Lut::from_radiances(
                        &MET7_WV_RADIANCES,
                        MET7_WV_CALIBRATION,
                        MET7_SPACE_COUNT,
                        &met7_temperatures,
                    ),
                    Lut::from_radiances(
                        &MET7_IR_RADIANCES,
                        MET7_IR_CALIBRATION,
                        MET7_SPACE_COUNT,
                        &met7_temperatures,
                    ),
                ],
            ),
            msg("MSG1"),
            msg("MSG2"),
            msg("MSG3"),
        ];

        debug!(satellites = entries.len(), "Built calibration catalog");
        Self { entries }
    }

    /// Find the entry for a satellite identifier.
    pub fn lookup(&self, name: &str) -> Option<&CalibrationEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn entries(&self) -> &[CalibrationEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace entries with matching names and append the rest.
    pub fn with_overrides(mut self, overrides: Vec<CalibrationEntry>) -> Self {
        for entry in overrides {
            match self.entries.iter_mut().find(|e| e.name == entry.name) {
                Some(existing) => {
                    debug!(satellite = %entry.name, "Overriding catalog entry");
                    *existing = entry;
                }
                None => {
                    debug!(satellite = %entry.name, "Adding catalog entry");
                    self.entries.push(entry);
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_and_unknown() {
        let catalog = SatelliteCatalog::builtin();
        assert!(catalog.lookup("MSG2").is_some());
        assert!(catalog.lookup("GOES13").is_some());
        assert!(catalog.lookup("FOO").is_none());
        assert!(catalog.lookup("msg2").is_none());
    }

    #[test]
    fn test_goes_linear_transform() {
        let catalog = SatelliteCatalog::builtin();
        let goes = catalog.lookup("GOES13").unwrap();
        match goes.channel_transform(1) {
            ChannelTransform::Linear { scale, offset } => {
                assert_eq!(scale, 170.0 / 1023.0);
                assert_eq!(offset, 170.0);
            }
            other => panic!("Expected linear transform, got {:?}", other),
        }
        assert_eq!(goes.nodata(0), None);
    }

    #[test]
    fn test_mtsat_nodata_and_luts() {
        let catalog = SatelliteCatalog::builtin();
        let mtsat = catalog.lookup("MTSAT2").unwrap();
        assert_eq!(mtsat.nodata(3), Some(255.0));
        match mtsat.channel_transform(0) {
            ChannelTransform::Lut(lut) => assert_eq!(lut.to_string(), "0:0,255:100"),
            other => panic!("Expected LUT, got {:?}", other),
        }
        match mtsat.channel_transform(3) {
            ChannelTransform::Lut(lut) => {
                assert_eq!(lut.len(), 256);
                assert_eq!(lut.pairs()[0], (0.0, 330.0));
                assert_eq!(lut.pairs()[255], (255.0, 142.597));
            }
            other => panic!("Expected LUT, got {:?}", other),
        }
    }

    #[test]
    fn test_met7_luts_are_clamped() {
        let catalog = SatelliteCatalog::builtin();
        let met7 = catalog.lookup("MET7").unwrap();
        for index in 1..3 {
            let ChannelTransform::Lut(lut) = met7.channel_transform(index) else {
                panic!("Expected LUT for channel {}", index + 1);
            };
            assert!(!lut.is_empty());
            assert!(lut.len() < MET7_IR_RADIANCES.len());
            assert!(lut.pairs().iter().all(|(raw, _)| (0.0..=256.0).contains(raw)));
        }
    }

    #[test]
    fn test_transform_out_of_range_index() {
        let catalog = SatelliteCatalog::builtin();
        let msg = catalog.lookup("MSG1").unwrap();
        assert_eq!(msg.channel_transform(12), ChannelTransform::None);
    }

    #[test]
    fn test_validate_length_mismatch() {
        let entry = CalibrationEntry::linear("BAD", vec![700, 800], vec![1.0], vec![0.0, 0.0]);
        let err = entry.validate().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::LengthMismatch { field: "scale", expected: 2, actual: 1, .. }
        ));
    }

    #[test]
    fn test_with_overrides() {
        let catalog = SatelliteCatalog::builtin().with_overrides(vec![
            CalibrationEntry::uncalibrated("MET7", vec![795]),
            CalibrationEntry::uncalibrated("HIMAWARI8", vec![640, 10400]),
        ]);
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.lookup("MET7").unwrap().wavelengths, vec![795]);
        assert!(catalog.lookup("HIMAWARI8").is_some());
    }
}
