//! Geostationary satellite mapper.
//!
//! Turns a dataset opened by the MSG driver (MSG, Meteosat-7, GOES, MTSAT-2
//! in Eumetcast format) into a virtual raster whose bands carry calibrated
//! physical units and per-band lookup tables.
//!
//! # Flow
//!
//! 1. Parse satellite, path and acquisition time from the dataset description
//! 2. Look the satellite up in the calibration catalog
//! 3. Build one virtual source per channel the driver can open
//! 4. Create the VRT bands and reconcile mixed-resolution source rectangles
//! 5. Stamp `satID` and acquisition time metadata

pub mod description;
pub mod error;
pub mod mapper;
pub mod reconcile;
pub mod source;

pub use description::DatasetDescription;
pub use error::{MapperError, MapperResult};
pub use mapper::{Mapper, SATELLITE_METADATA_KEY};
pub use reconcile::{Reconciliation, ReconciliationProfile};
pub use source::VirtualSource;
