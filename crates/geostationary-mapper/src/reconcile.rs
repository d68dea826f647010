//! Source rectangle reconciliation for mixed-resolution products.
//!
//! Meteosat-7 and MSG package one high-resolution channel (Meteosat-7
//! visible, MSG HRV) with several lower-resolution channels. The VRT takes the
//! grid of whichever channel was opened:
//!
//! - opened at high resolution: the low-resolution channels read their full
//!   low-resolution extent and are stretched onto the high-resolution grid
//! - opened at low resolution: the high-resolution channel reads its full
//!   extent and is reduced onto the low-resolution grid
//!
//! Any other opened width leaves every source rectangle untouched.

/// Channel roles and full-disc sizes of a mixed-resolution product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationProfile {
    /// Channel number (1-based) of the high-resolution channel
    pub high_res_channel: usize,
    /// Raster width when the high-resolution channel is opened
    pub high_res_width: usize,
    /// Raster width when a low-resolution channel is opened
    pub low_res_width: usize,
    /// Full extent (x, y) of the high-resolution channel
    pub high_res_extent: (usize, usize),
    /// Full extent (x, y) of the low-resolution channels
    pub low_res_extent: (usize, usize),
    /// Channels resized to `low_res_extent` when the high-resolution channel is opened
    pub low_res_channels: &'static [usize],
}

/// Meteosat-7: channel 1 (visible) at 5032 pixels, WV and IR at 2532.
pub const MET7_PROFILE: ReconciliationProfile = ReconciliationProfile {
    high_res_channel: 1,
    high_res_width: 5032,
    low_res_width: 2532,
    high_res_extent: (5032, 5000),
    low_res_extent: (2532, 2500),
    low_res_channels: &[2, 3],
};

/// MSG: channel 12 (HRV) at 11136 pixels, the SEVIRI channels at 3712.
///
/// Only channels 1 to 10 follow the HRV grid; channel 11 (13.4 µm) keeps its
/// own source rectangle.
pub const MSG_PROFILE: ReconciliationProfile = ReconciliationProfile {
    high_res_channel: 12,
    high_res_width: 11136,
    low_res_width: 3712,
    high_res_extent: (11136, 11136),
    low_res_extent: (3712, 3712),
    low_res_channels: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
};

/// Source rectangle rewrite to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Channel numbers (1-based) whose source rectangle changes
    pub channels: Vec<usize>,
    pub src_x_size: usize,
    pub src_y_size: usize,
}

impl ReconciliationProfile {
    /// Profile for a satellite, if its product mixes resolutions.
    pub fn for_satellite(satellite: &str) -> Option<&'static ReconciliationProfile> {
        if satellite == "MET7" {
            Some(&MET7_PROFILE)
        } else if satellite.starts_with("MSG") {
            Some(&MSG_PROFILE)
        } else {
            None
        }
    }

    /// Rewrite needed for a dataset opened at `opened_width` pixels.
    ///
    /// Returns `None` when the width matches neither known resolution.
    pub fn plan(&self, opened_width: usize) -> Option<Reconciliation> {
        if opened_width == self.high_res_width {
            Some(Reconciliation {
                channels: self.low_res_channels.to_vec(),
                src_x_size: self.low_res_extent.0,
                src_y_size: self.low_res_extent.1,
            })
        } else if opened_width == self.low_res_width {
            Some(Reconciliation {
                channels: vec![self.high_res_channel],
                src_x_size: self.high_res_extent.0,
                src_y_size: self.high_res_extent.1,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_selection() {
        assert_eq!(ReconciliationProfile::for_satellite("MET7"), Some(&MET7_PROFILE));
        assert_eq!(ReconciliationProfile::for_satellite("MSG2"), Some(&MSG_PROFILE));
        assert_eq!(ReconciliationProfile::for_satellite("GOES13"), None);
        assert_eq!(ReconciliationProfile::for_satellite("MTSAT2"), None);
    }

    #[test]
    fn test_met7_plans() {
        let high = MET7_PROFILE.plan(5032).unwrap();
        assert_eq!(high.channels, vec![2, 3]);
        assert_eq!((high.src_x_size, high.src_y_size), (2532, 2500));

        let low = MET7_PROFILE.plan(2532).unwrap();
        assert_eq!(low.channels, vec![1]);
        assert_eq!((low.src_x_size, low.src_y_size), (5032, 5000));
    }

    #[test]
    fn test_msg_plans() {
        let high = MSG_PROFILE.plan(11136).unwrap();
        assert_eq!(high.channels, (1..=10).collect::<Vec<_>>());
        assert!(!high.channels.contains(&11));
        assert_eq!((high.src_x_size, high.src_y_size), (3712, 3712));

        let low = MSG_PROFILE.plan(3712).unwrap();
        assert_eq!(low.channels, vec![12]);
        assert_eq!((low.src_x_size, low.src_y_size), (11136, 11136));
    }

    #[test]
    fn test_unknown_width_has_no_plan() {
        assert_eq!(MET7_PROFILE.plan(1000), None);
        assert_eq!(MSG_PROFILE.plan(5032), None);
    }
}
