//! Satellite identity and the source modes requested from the MSG driver.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Family a satellite identifier belongs to.
///
/// The family decides how bands are requested from the raster driver and
/// whether the product bundles channels of different spatial resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SatelliteFamily {
    /// Meteosat Second Generation (MSG1, MSG2, MSG3)
    Msg,
    /// Meteosat-7 (first generation)
    Meteosat7,
    /// GOES East/West (GOES13, GOES15)
    Goes,
    /// MTSAT-2
    Mtsat,
    /// Anything else, e.g. satellites added through catalog overrides
    Other,
}

impl SatelliteFamily {
    /// Classify a satellite identifier as it appears in the dataset description.
    pub fn from_name(name: &str) -> Self {
        if name.starts_with("MSG") {
            SatelliteFamily::Msg
        } else if name == "MET7" {
            SatelliteFamily::Meteosat7
        } else if name.starts_with("GOES") {
            SatelliteFamily::Goes
        } else if name.starts_with("MTSAT") {
            SatelliteFamily::Mtsat
        } else {
            SatelliteFamily::Other
        }
    }

    /// Resolution flag and data type requested from the driver.
    ///
    /// MSG products are read at high resolution and already calibrated by the
    /// driver. Everything else is read as raw counts and calibrated through
    /// the catalog.
    pub fn source_mode(&self) -> (Resolution, DataType) {
        match self {
            SatelliteFamily::Msg => (Resolution::High, DataType::Physical),
            _ => (Resolution::Low, DataType::Counts),
        }
    }
}

/// Spatial resolution flag of a virtual source path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    High,
    Low,
}

impl Resolution {
    pub fn as_char(&self) -> char {
        match self {
            Resolution::High => 'H',
            Resolution::Low => 'L',
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Pixel data type requested from the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Brightness temperatures and reflectances (`T`)
    Physical,
    /// Raw counts for calibration downstream (`N`)
    Counts,
}

impl DataType {
    pub fn as_char(&self) -> char {
        match self {
            DataType::Physical => 'T',
            DataType::Counts => 'N',
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
