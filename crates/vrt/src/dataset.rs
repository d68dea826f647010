//! Source datasets handed to the mapper by the raster framework.

use std::collections::BTreeMap;

/// An already-opened raster dataset.
///
/// The framework owns the dataset; mappers only borrow it.
pub trait SourceDataset {
    /// Driver-specific description, e.g.
    /// `MSG(/data/x,H,MSG1,201501010000,1,Y,T,1,1)`.
    fn description(&self) -> &str;

    /// Width in pixels.
    fn raster_x_size(&self) -> usize;

    /// Height in pixels.
    fn raster_y_size(&self) -> usize;

    /// Dataset-level metadata items.
    fn metadata(&self) -> &BTreeMap<String, String>;
}

/// Plain [`SourceDataset`] holding its description and size.
#[derive(Debug, Clone, Default)]
pub struct OpenedDataset {
    description: String,
    x_size: usize,
    y_size: usize,
    metadata: BTreeMap<String, String>,
}

impl OpenedDataset {
    pub fn new(description: impl Into<String>, x_size: usize, y_size: usize) -> Self {
        Self {
            description: description.into(),
            x_size,
            y_size,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl SourceDataset for OpenedDataset {
    fn description(&self) -> &str {
        &self.description
    }

    fn raster_x_size(&self) -> usize {
        self.x_size
    }

    fn raster_y_size(&self) -> usize {
        self.y_size
    }

    fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }
}
