//! Virtual raster (VRT) datasets.
//!
//! This crate models the contract of the raster framework the mapper plugs
//! into: an opened source dataset, a driver that opens virtual band paths,
//! and a virtual dataset whose bands reference those paths through complex
//! sources. The dataset serializes to and from the GDAL VRT XML layout so the
//! band tree can be inspected and patched as XML.
//!
//! Pixel access and georeferencing are left to the framework.

pub mod band;
pub mod dataset;
pub mod driver;
pub mod error;
pub mod raster;
pub mod xml;

pub use band::{BandDescriptor, BandDestination, BandSource};
pub use dataset::{OpenedDataset, SourceDataset};
pub use driver::{DriverError, RasterDriver, RasterInfo, StaticDriver};
pub use error::{VrtError, VrtResult};
pub use raster::{ComplexSource, Rect, VrtBand, VrtDataset};
pub use xml::patch_src_rect;
