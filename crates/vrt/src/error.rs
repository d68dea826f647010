//! Error types for virtual raster operations.

use crate::driver::DriverError;
use thiserror::Error;

/// Result type for VRT operations.
pub type VrtResult<T> = Result<T, VrtError>;

#[derive(Error, Debug)]
pub enum VrtError {
    /// Malformed XML or failure while writing it
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Required attribute absent from an element
    #[error("<{element}> is missing attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// Numeric attribute or element could not be parsed
    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: &'static str, value: String },

    /// Element appeared outside the element that must contain it
    #[error("Unexpected <{0}> outside of a raster band")]
    Misplaced(String),

    /// Band source could not be opened when materializing bands
    #[error("Band source unavailable: {0}")]
    SourceUnavailable(#[from] DriverError),

    #[error("Band {0} not found")]
    BandNotFound(usize),
}
