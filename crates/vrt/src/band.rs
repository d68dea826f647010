//! Per-band descriptors consumed when creating VRT bands.
//!
//! All values are kept in the string form the driver's virtual path grammar
//! expects; typed values are converted by the caller.

/// Where a band's pixels come from and how they are transformed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BandSource {
    /// Virtual source path opened through the driver
    pub filename: String,
    /// Band index inside the source, 1-based
    pub band: u32,
    /// LUT wire string, `raw:physical` pairs
    pub lut: Option<String>,
    pub nodata: Option<String>,
    pub scale_ratio: Option<String>,
    pub scale_offset: Option<String>,
}

/// Metadata describing what the band represents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BandDestination {
    /// Well-known variable name, e.g. `albedo`
    pub wkv: String,
    /// Center wavelength in nm
    pub wavelength: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BandDescriptor {
    pub source: BandSource,
    pub destination: BandDestination,
}

impl BandDescriptor {
    pub fn new(source: BandSource, destination: BandDestination) -> Self {
        Self {
            source,
            destination,
        }
    }
}
