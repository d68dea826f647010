//! Common test fixtures for mapper tests.
//!
//! Descriptions follow the MSG driver's dataset naming:
//! `MSG(<path>,<resolution>,<satellite>,<YYYYMMDDHHMM>,<band>,Y,<type>,1,1)`.

/// Dataset description strings as produced by the MSG driver.
pub mod descriptions {
    pub const MSG1: &str = "MSG(/data/x,H,MSG1,201501010000,1,Y,T,1,1)";
    pub const MSG2_LOW: &str = "MSG(/data/eumetcast,L,MSG2,201206251200,1,Y,T,1,1)";
    pub const MET7: &str = "MSG(/data/met7,L,MET7,201101011130,1,Y,N,1,1)";
    pub const GOES13: &str = "MSG(/data/goes,L,GOES13,201303150600,1,Y,N,1,1)";
    pub const MTSAT2: &str = "MSG(/data/mtsat,L,MTSAT2,201407200300,1,Y,N,1,1)";
    pub const UNSUPPORTED: &str = "MSG(/data/foo,L,FOO,201501010000,1,Y,N,1,1)";

    /// Too few comma-separated fields
    pub const TRUNCATED: &str = "MSG(/data/x,H,MSG1";
    /// No opening parenthesis before the path
    pub const NO_PAREN: &str = "/data/x,H,MSG1,201501010000,1,Y,T,1,1";
    pub const BAD_TIMESTAMP: &str = "MSG(/data/x,H,MSG1,2015-01-01,1,Y,T,1,1)";

    /// Build a description for an arbitrary satellite and timestamp.
    pub fn build(path: &str, resolution: char, satellite: &str, timestamp: &str) -> String {
        format!("MSG({},{},{},{},1,Y,T,1,1)", path, resolution, satellite, timestamp)
    }
}

/// Full-disc raster widths (pixels) reported by the driver.
pub mod widths {
    /// Meteosat-7 visible channel
    pub const MET7_HIGH: usize = 5032;
    /// Meteosat-7 infrared / water vapour channels
    pub const MET7_LOW: usize = 2532;
    /// MSG HRV channel
    pub const MSG_HIGH: usize = 11136;
    /// MSG non-HRV channels
    pub const MSG_LOW: usize = 3712;
    /// Width no known product uses
    pub const UNKNOWN: usize = 1000;
}

/// Full-disc raster heights (pixels) matching [`widths`].
pub mod heights {
    pub const MET7_HIGH: usize = 5000;
    pub const MET7_LOW: usize = 2500;
    pub const MSG_HIGH: usize = 11136;
    pub const MSG_LOW: usize = 3712;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_description() {
        assert_eq!(
            descriptions::build("/data/x", 'H', "MSG1", "201501010000"),
            descriptions::MSG1
        );
    }

    #[test]
    fn test_descriptions_have_satellite_in_third_field() {
        for (desc, sat) in [
            (descriptions::MSG1, "MSG1"),
            (descriptions::MET7, "MET7"),
            (descriptions::GOES13, "GOES13"),
            (descriptions::MTSAT2, "MTSAT2"),
        ] {
            assert_eq!(desc.split(',').nth(2), Some(sat));
        }
    }
}
