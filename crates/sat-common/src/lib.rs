//! Common types shared across the geostationary mapper workspace.

pub mod quantity;
pub mod satellite;
pub mod time;

pub use quantity::PhysicalQuantity;
pub use satellite::{DataType, Resolution, SatelliteFamily};
pub use time::{format_acquisition_time, parse_acquisition_time, TimeParseError, ACQUISITION_TIME_FORMAT};
