//! Satellite calibration catalog.
//!
//! Maps a satellite identifier to its channel wavelengths and the transform
//! that turns stored values into physical units. Satellites calibrated by the
//! driver (GOES, MSG) carry a linear scale/offset per channel; MTSAT-2 and
//! Meteosat-7 carry a lookup table per channel.
//!
//! The builtin catalog is built once and never mutated. Additional or
//! replacement entries can be loaded from YAML, see [`config`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod lut;
pub mod tables;

pub use catalog::{builtin_catalog, Calibration, CalibrationEntry, ChannelTransform, SatelliteCatalog};
pub use config::{expand_env_vars, load_catalog_config, CatalogConfig, SatelliteEntryConfig};
pub use error::{CatalogError, CatalogResult};
pub use lut::{Lut, LUT_RAW_MAX, LUT_RAW_MIN};
