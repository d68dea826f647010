//! Raster driver interface used to open virtual band paths.

use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Size of a raster opened through the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterInfo {
    pub x_size: usize,
    pub y_size: usize,
}

impl RasterInfo {
    pub fn new(x_size: usize, y_size: usize) -> Self {
        Self { x_size, y_size }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("Cannot open '{path}': {reason}")]
    OpenFailed { path: String, reason: String },
}

/// Opens raster sources by path.
pub trait RasterDriver {
    fn open(&self, path: &str) -> Result<RasterInfo, DriverError>;
}

/// Driver answering from a fixed table of sources.
///
/// Registered paths open with their recorded size. Any other path opens with
/// the fallback size if one is set. Denied paths never open.
#[derive(Debug, Clone, Default)]
pub struct StaticDriver {
    sources: HashMap<String, RasterInfo>,
    fallback: Option<RasterInfo>,
    denied: HashSet<String>,
}

impl StaticDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver that opens every path with the given size.
    pub fn with_fallback(info: RasterInfo) -> Self {
        Self {
            fallback: Some(info),
            ..Default::default()
        }
    }

    pub fn with_source(mut self, path: impl Into<String>, info: RasterInfo) -> Self {
        self.sources.insert(path.into(), info);
        self
    }

    pub fn deny(mut self, path: impl Into<String>) -> Self {
        self.denied.insert(path.into());
        self
    }
}

impl RasterDriver for StaticDriver {
    fn open(&self, path: &str) -> Result<RasterInfo, DriverError> {
        if self.denied.contains(path) {
            return Err(DriverError::OpenFailed {
                path: path.to_string(),
                reason: "source unavailable".to_string(),
            });
        }
        self.sources
            .get(path)
            .copied()
            .or(self.fallback)
            .ok_or_else(|| DriverError::OpenFailed {
                path: path.to_string(),
                reason: "no such source".to_string(),
            })
    }
}
