//! Physical quantity carried by a band, named by its well-known variable (wkv).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wavelength (nm) above which a channel is thermal infrared.
pub const THERMAL_THRESHOLD_NM: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalQuantity {
    BrightnessTemperature,
    Albedo,
}

impl PhysicalQuantity {
    /// Classify a channel by its center wavelength in nanometers.
    pub fn from_wavelength(wavelength_nm: u32) -> Self {
        if wavelength_nm > THERMAL_THRESHOLD_NM {
            PhysicalQuantity::BrightnessTemperature
        } else {
            PhysicalQuantity::Albedo
        }
    }

    /// Standard name written to band metadata.
    pub fn wkv(&self) -> &'static str {
        match self {
            PhysicalQuantity::BrightnessTemperature => "brightness_temperature",
            PhysicalQuantity::Albedo => "albedo",
        }
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wkv())
    }
}
