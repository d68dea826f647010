//! Parsing of MSG driver dataset descriptions.
//!
//! The driver describes an opened dataset as
//! `MSG(<path>,<resolution>,<satellite>,<YYYYMMDDHHMM>,<band>,Y,<type>,1,1)`.
//! Only the first four fields are used; their positions are fixed.

use crate::error::{MapperError, MapperResult};
use chrono::NaiveDateTime;
use sat_common::parse_acquisition_time;

const PATH_FIELD: usize = 0;
const RESOLUTION_FIELD: usize = 1;
const SATELLITE_FIELD: usize = 2;
const TIMESTAMP_FIELD: usize = 3;

/// Identity of an opened Eumetcast dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetDescription {
    /// Product directory or file the driver reads from
    pub path: String,
    /// Resolution flag the dataset was opened with (informational)
    pub resolution_hint: String,
    pub satellite: String,
    /// Timestamp exactly as given, `YYYYMMDDHHMM`
    pub timestamp: String,
}

impl DatasetDescription {
    pub fn parse(description: &str) -> MapperResult<Self> {
        let malformed = |reason: &str| MapperError::MalformedDescription {
            description: description.to_string(),
            reason: reason.to_string(),
        };

        let fields: Vec<&str> = description.split(',').collect();
        if fields.len() <= TIMESTAMP_FIELD {
            return Err(malformed(&format!(
                "expected at least {} comma-separated fields, found {}",
                TIMESTAMP_FIELD + 1,
                fields.len()
            )));
        }

        let path = fields[PATH_FIELD]
            .split('(')
            .nth(1)
            .ok_or_else(|| malformed("path is not preceded by '('"))?;

        let satellite = fields[SATELLITE_FIELD];
        if satellite.is_empty() {
            return Err(malformed("satellite field is empty"));
        }

        Ok(Self {
            path: path.to_string(),
            resolution_hint: fields[RESOLUTION_FIELD].to_string(),
            satellite: satellite.to_string(),
            timestamp: fields[TIMESTAMP_FIELD].to_string(),
        })
    }

    /// Acquisition time parsed from the timestamp field.
    pub fn acquisition_time(&self) -> MapperResult<NaiveDateTime> {
        Ok(parse_acquisition_time(&self.timestamp)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_msg_description() {
        let d = DatasetDescription::parse("(/data/x,H,MSG1,201501010000,...)").unwrap();
        assert_eq!(d.satellite, "MSG1");
        assert_eq!(d.path, "/data/x");
        assert_eq!(d.resolution_hint, "H");
        assert_eq!(d.timestamp, "201501010000");
        assert_eq!(
            d.acquisition_time().unwrap(),
            NaiveDate::from_ymd_opt(2015, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_driver_prefix() {
        let d = DatasetDescription::parse("MSG(/eumetcast/met7,L,MET7,201101011130,1,Y,N,1,1)").unwrap();
        assert_eq!(d.path, "/eumetcast/met7");
        assert_eq!(d.satellite, "MET7");
    }

    #[test]
    fn test_too_few_fields() {
        let err = DatasetDescription::parse("MSG(/data/x,H,MSG1").unwrap_err();
        assert!(matches!(err, MapperError::MalformedDescription { .. }));
    }

    #[test]
    fn test_missing_parenthesis() {
        let err = DatasetDescription::parse("/data/x,H,MSG1,201501010000").unwrap_err();
        assert!(matches!(err, MapperError::MalformedDescription { .. }));
    }

    #[test]
    fn test_bad_timestamp() {
        let d = DatasetDescription::parse("MSG(/data/x,H,MSG1,20150101,1)").unwrap();
        let err = d.acquisition_time().unwrap_err();
        assert!(matches!(err, MapperError::InvalidTimestamp(_)));
    }
}
