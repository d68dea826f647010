//! Error types for the calibration catalog.

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A per-channel array does not match the number of wavelengths
    #[error("Satellite {satellite}: {field} has {actual} values, expected {expected}")]
    LengthMismatch {
        satellite: String,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Entry defines both a linear calibration and lookup tables
    #[error("Satellite {0}: both scale/offset and LUT are configured")]
    AmbiguousCalibration(String),

    /// Only one of scale/offset was given
    #[error("Satellite {0}: scale and offset must be given together")]
    IncompleteLinear(String),

    /// LUT string could not be parsed
    #[error("Invalid LUT entry '{entry}': {message}")]
    InvalidLut { entry: String, message: String },

    #[error("Failed to read catalog config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid catalog config: {0}")]
    InvalidConfig(String),
}
