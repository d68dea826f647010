//! Error types for the mapper.

use thiserror::Error;

/// Result type for mapper operations.
pub type MapperResult<T> = Result<T, MapperError>;

/// Errors that abort mapper construction.
///
/// Band sources the driver cannot open are not errors; those bands are
/// skipped with a warning.
#[derive(Error, Debug)]
pub enum MapperError {
    /// Satellite not present in the calibration catalog
    #[error("Unsupported geostationary satellite: {0}")]
    UnsupportedSatellite(String),

    /// Description lacks the expected comma-separated fields
    #[error("Malformed dataset description '{description}': {reason}")]
    MalformedDescription { description: String, reason: String },

    #[error(transparent)]
    InvalidTimestamp(#[from] sat_common::TimeParseError),

    #[error("Virtual raster error: {0}")]
    Vrt(#[from] vrt::VrtError),
}

impl MapperError {
    /// Whether another mapper may still handle the dataset.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, MapperError::UnsupportedSatellite(_))
    }
}
