//! End-to-end tests for the geostationary mapper.
//!
//! Datasets and driver are in-memory; every virtual source path opens with
//! the size of the dataset unless a test registers or denies it.

use calibration::{CalibrationEntry, SatelliteCatalog};
use geostationary_mapper::{Mapper, MapperError, SATELLITE_METADATA_KEY};
use std::collections::BTreeMap;
use test_utils::{descriptions, heights, widths};
use vrt::{OpenedDataset, RasterInfo, Rect, StaticDriver, VrtDataset};

fn map(description: &str, width: usize, height: usize) -> Result<Mapper, MapperError> {
    let dataset = OpenedDataset::new(description, width, height);
    let driver = StaticDriver::with_fallback(RasterInfo::new(width, height));
    Mapper::new("eumetcast", &dataset, &BTreeMap::new(), &driver)
}

fn src_rect(vrt: &VrtDataset, band: usize) -> Rect {
    vrt.band(band).unwrap().source.src_rect
}

// ============================================================================
// Identification
// ============================================================================

#[test]
fn test_msg1_description_resolves() {
    let mapper = map(descriptions::MSG1, widths::MSG_LOW, heights::MSG_LOW).unwrap();

    assert_eq!(mapper.satellite(), "MSG1");
    assert_eq!(mapper.description().path, "/data/x");
    assert_eq!(mapper.description().timestamp, "201501010000");

    let vrt = mapper.vrt();
    assert_eq!(vrt.band_count(), 12);
    assert_eq!(vrt.metadata_item(SATELLITE_METADATA_KEY), Some("MSG1"));
    assert_eq!(vrt.metadata_item("time"), Some("2015-01-01T00:00:00"));
}

#[test]
fn test_unsupported_satellite() {
    let err = map(descriptions::UNSUPPORTED, 100, 100).unwrap_err();
    assert!(err.is_unsupported());
    assert!(matches!(err, MapperError::UnsupportedSatellite(ref s) if s == "FOO"));
}

#[test]
fn test_malformed_descriptions() {
    for description in [descriptions::TRUNCATED, descriptions::NO_PAREN] {
        let err = map(description, 100, 100).unwrap_err();
        assert!(
            matches!(err, MapperError::MalformedDescription { .. }),
            "{description}: {err:?}"
        );
    }
}

#[test]
fn test_bad_timestamp() {
    let err = map(descriptions::BAD_TIMESTAMP, 100, 100).unwrap_err();
    assert!(matches!(err, MapperError::InvalidTimestamp(_)));
}

#[test]
fn test_unsupported_reported_before_timestamp() {
    let description = descriptions::build("/data/foo", 'L', "FOO", "not-a-time");
    let err = map(&description, 100, 100).unwrap_err();
    assert!(err.is_unsupported());
}

// ============================================================================
// Band creation and calibration
// ============================================================================

#[test]
fn test_goes_quantities_and_scaling() {
    let mapper = map(descriptions::GOES13, 2816, 2816).unwrap();
    let vrt = mapper.vrt();
    assert_eq!(vrt.band_count(), 4);

    let visible = vrt.band(1).unwrap();
    assert_eq!(visible.metadata_item("wkv"), Some("albedo"));
    assert_eq!(visible.metadata_item("wavelength"), Some("700"));
    assert_eq!(visible.source.scale_ratio.as_deref(), Some((100.0f64 / 1023.0).to_string().as_str()));
    assert_eq!(visible.source.scale_offset.as_deref(), Some("0"));
    assert_eq!(visible.source.lut, None);

    let infrared = vrt.band(2).unwrap();
    assert_eq!(infrared.metadata_item("wkv"), Some("brightness_temperature"));
    assert_eq!(infrared.metadata_item("wavelength"), Some("10700"));
    assert_eq!(infrared.source.scale_offset.as_deref(), Some("170"));
}

#[test]
fn test_goes_sources_use_counts() {
    let mapper = map(descriptions::GOES13, 2816, 2816).unwrap();
    let band = mapper.vrt().band(3).unwrap();
    assert_eq!(band.source.filename, "MSG(/data/goes,L,GOES13,201303150600,3,Y,N,1,1)");
    assert_eq!(band.source.source_band, 1);
    assert_eq!(band.data_type, "Float32");
}

#[test]
fn test_msg_sources_use_high_resolution_physical() {
    let mapper = map(descriptions::MSG1, widths::MSG_LOW, heights::MSG_LOW).unwrap();
    let vrt = mapper.vrt();

    assert_eq!(
        vrt.band(12).unwrap().source.filename,
        "MSG(/data/x,H,MSG1,201501010000,12,Y,T,1,1)"
    );
    assert_eq!(vrt.band(1).unwrap().source.scale_ratio.as_deref(), Some("100"));
    assert_eq!(vrt.band(4).unwrap().source.scale_ratio.as_deref(), Some("1"));
    assert_eq!(vrt.band(12).unwrap().metadata_item("wkv"), Some("albedo"));
    assert_eq!(vrt.band(9).unwrap().metadata_item("wkv"), Some("brightness_temperature"));
}

#[test]
fn test_mtsat_luts_and_nodata() {
    let mapper = map(descriptions::MTSAT2, 2752, 2750).unwrap();
    let vrt = mapper.vrt();
    assert_eq!(vrt.band_count(), 4);

    for band in vrt.bands() {
        assert_eq!(band.source.nodata.as_deref(), Some("255"));
        assert!(band.source.scale_ratio.is_none());
        assert!(band.source.lut.is_some());
    }
    assert_eq!(vrt.band(1).unwrap().source.lut.as_deref(), Some("0:0,255:100"));

    let infrared = vrt.band(4).unwrap().source.lut.as_deref().unwrap();
    assert_eq!(infrared.split(',').count(), 256);
    assert!(infrared.starts_with("0:"));
}

#[test]
fn test_met7_luts_stay_in_raw_range() {
    let mapper = map(descriptions::MET7, widths::MET7_LOW, heights::MET7_LOW).unwrap();
    for band in mapper.vrt().bands() {
        let lut = band.source.lut.as_deref().unwrap();
        for pair in lut.split(',') {
            let (raw, _) = pair.split_once(':').unwrap();
            let raw: f64 = raw.parse().unwrap();
            assert!((0.0..=256.0).contains(&raw), "raw {raw} out of range");
        }
    }
}

#[test]
fn test_missing_band_is_skipped_without_gap() {
    let dataset = OpenedDataset::new(descriptions::MET7, widths::MET7_HIGH, heights::MET7_HIGH);
    let driver = StaticDriver::with_fallback(RasterInfo::new(widths::MET7_HIGH, heights::MET7_HIGH))
        .deny("MSG(/data/met7,L,MET7,201101011130,2,Y,N,1,1)");
    let mapper = Mapper::new("met7", &dataset, &BTreeMap::new(), &driver).unwrap();
    let vrt = mapper.vrt();

    assert_eq!(vrt.band_count(), 2);
    assert_eq!(mapper.band_channels(), &[1, 3]);
    assert_eq!(vrt.band(2).unwrap().metadata_item("wavelength"), Some("11500"));

    // The infrared channel still follows the low-resolution grid
    assert_eq!(src_rect(vrt, 1), Rect::full(5032, 5000));
    assert_eq!(src_rect(vrt, 2), Rect::full(2532, 2500));
}

#[test]
fn test_all_bands_missing() {
    let dataset = OpenedDataset::new(descriptions::GOES13, 100, 100);
    let driver = StaticDriver::new();
    let mapper = Mapper::new("goes", &dataset, &BTreeMap::new(), &driver).unwrap();
    assert_eq!(mapper.vrt().band_count(), 0);
    assert_eq!(mapper.vrt().metadata_item(SATELLITE_METADATA_KEY), Some("GOES13"));
}

#[test]
fn test_custom_catalog() {
    let catalog = SatelliteCatalog::new(vec![CalibrationEntry::uncalibrated("FOO", vec![650, 11000])]);
    let dataset = OpenedDataset::new(descriptions::UNSUPPORTED, 100, 100);
    let driver = StaticDriver::with_fallback(RasterInfo::new(100, 100));
    let mapper = Mapper::with_catalog(&catalog, "foo", &dataset, &BTreeMap::new(), &driver).unwrap();

    let vrt = mapper.vrt();
    assert_eq!(vrt.band_count(), 2);
    assert!(vrt.band(1).unwrap().source.scale_ratio.is_none());
    assert!(vrt.band(1).unwrap().source.lut.is_none());
    assert_eq!(vrt.band(2).unwrap().metadata_item("wkv"), Some("brightness_temperature"));
}

// ============================================================================
// Resolution reconciliation
// ============================================================================

#[test]
fn test_met7_opened_high_res() {
    let mapper = map(descriptions::MET7, widths::MET7_HIGH, heights::MET7_HIGH).unwrap();
    let vrt = mapper.vrt();

    assert_eq!(src_rect(vrt, 1), Rect::full(5032, 5000));
    assert_eq!(src_rect(vrt, 2), Rect::full(2532, 2500));
    assert_eq!(src_rect(vrt, 3), Rect::full(2532, 2500));
    for band in vrt.bands() {
        assert_eq!(band.source.dst_rect, Rect::full(5032, 5000));
    }
}

#[test]
fn test_met7_opened_low_res() {
    let mapper = map(descriptions::MET7, widths::MET7_LOW, heights::MET7_LOW).unwrap();
    let vrt = mapper.vrt();

    assert_eq!(src_rect(vrt, 1), Rect::full(5032, 5000));
    assert_eq!(src_rect(vrt, 2), Rect::full(2532, 2500));
    assert_eq!(src_rect(vrt, 3), Rect::full(2532, 2500));
    assert_eq!(vrt.band(1).unwrap().source.dst_rect, Rect::full(2532, 2500));
}

#[test]
fn test_msg_opened_high_res() {
    let mapper = map(descriptions::MSG1, widths::MSG_HIGH, heights::MSG_HIGH).unwrap();
    let vrt = mapper.vrt();

    for band in 1..=10 {
        assert_eq!(src_rect(vrt, band), Rect::full(3712, 3712), "band {band}");
    }
    assert_eq!(src_rect(vrt, 11), Rect::full(11136, 11136));
    assert_eq!(src_rect(vrt, 12), Rect::full(11136, 11136));
}

#[test]
fn test_msg_opened_low_res() {
    let mapper = map(descriptions::MSG2_LOW, widths::MSG_LOW, heights::MSG_LOW).unwrap();
    let vrt = mapper.vrt();

    assert_eq!(src_rect(vrt, 12), Rect::full(11136, 11136));
    for band in 1..=11 {
        assert_eq!(src_rect(vrt, band), Rect::full(3712, 3712), "band {band}");
    }
}

#[test]
fn test_unknown_width_keeps_source_rectangles() {
    let mapper = map(descriptions::MET7, widths::UNKNOWN, widths::UNKNOWN).unwrap();
    for band in mapper.vrt().bands() {
        assert_eq!(band.source.src_rect, Rect::full(1000, 1000));
    }
}

#[test]
fn test_reconciliation_preserves_calibration() {
    let mapper = map(descriptions::MET7, widths::MET7_HIGH, heights::MET7_HIGH).unwrap();
    let band = mapper.vrt().band(3).unwrap();
    assert!(band.source.lut.is_some());
    assert_eq!(band.metadata_item("wkv"), Some("brightness_temperature"));
    assert_eq!(band.metadata_item("wavelength"), Some("11500"));
}

#[test]
fn test_vrt_xml_round_trip() {
    let mapper = map(descriptions::MET7, widths::MET7_HIGH, heights::MET7_HIGH).unwrap();
    let xml = mapper.vrt().to_xml().unwrap();
    assert!(xml.contains(r#"<SrcRect xOff="0" yOff="0" xSize="2532" ySize="2500"/>"#));

    let parsed = VrtDataset::from_xml(&xml).unwrap();
    assert_eq!(&parsed, mapper.vrt());
}
