//! Acquisition time handling for Eumetcast products.

use chrono::NaiveDateTime;

/// Format of the timestamp field in dataset descriptions.
pub const ACQUISITION_TIME_FORMAT: &str = "%Y%m%d%H%M";

/// Format used when writing the acquisition time into dataset metadata.
pub const METADATA_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, thiserror::Error)]
pub enum TimeParseError {
    #[error("Invalid acquisition time '{value}': {source}")]
    InvalidFormat {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parse a `YYYYMMDDHHMM` timestamp.
pub fn parse_acquisition_time(s: &str) -> Result<NaiveDateTime, TimeParseError> {
    NaiveDateTime::parse_from_str(s, ACQUISITION_TIME_FORMAT).map_err(|source| {
        TimeParseError::InvalidFormat {
            value: s.to_string(),
            source,
        }
    })
}

/// Render an acquisition time the way it is stored in dataset metadata.
pub fn format_acquisition_time(time: &NaiveDateTime) -> String {
    time.format(METADATA_TIME_FORMAT).to_string()
}
