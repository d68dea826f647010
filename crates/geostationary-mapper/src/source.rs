//! Virtual source paths understood by the MSG raster driver.

use sat_common::{DataType, Resolution};
use std::fmt;

/// One channel of an Eumetcast product, addressed through the driver.
///
/// Renders as `MSG(<path>,<H|L>,<satellite>,<timestamp>,<band>,Y,<T|N>,1,1)`.
/// The opened dataset always has a single band, so the channel is selected
/// here and the VRT source band stays 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualSource<'a> {
    pub path: &'a str,
    pub resolution: Resolution,
    pub satellite: &'a str,
    pub timestamp: &'a str,
    /// Channel number, 1-based
    pub channel: usize,
    pub data_type: DataType,
}

impl fmt::Display for VirtualSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MSG({},{},{},{},{},Y,{},1,1)",
            self.path, self.resolution, self.satellite, self.timestamp, self.channel, self.data_type
        )
    }
}
