//! The geostationary mapper.

use crate::description::DatasetDescription;
use crate::error::{MapperError, MapperResult};
use crate::reconcile::ReconciliationProfile;
use crate::source::VirtualSource;
use calibration::{builtin_catalog, CalibrationEntry, ChannelTransform, SatelliteCatalog};
use chrono::NaiveDateTime;
use sat_common::PhysicalQuantity;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use vrt::{
    patch_src_rect, BandDescriptor, BandDestination, BandSource, RasterDriver, SourceDataset,
    VrtDataset,
};

/// Dataset metadata key holding the satellite identifier.
pub const SATELLITE_METADATA_KEY: &str = "satID";

/// Virtual raster for one opened Eumetcast dataset.
#[derive(Debug, Clone)]
pub struct Mapper {
    vrt: VrtDataset,
    description: DatasetDescription,
    acquisition_time: NaiveDateTime,
    /// Channel number (1-based) of each output band, in band order
    band_channels: Vec<usize>,
}

impl Mapper {
    /// Map a dataset using the builtin calibration catalog.
    ///
    /// `file_name` is only used for logging and `metadata` is accepted for
    /// interface compatibility; everything is derived from the dataset
    /// description.
    pub fn new<D, R>(
        file_name: &str,
        dataset: &D,
        metadata: &BTreeMap<String, String>,
        driver: &R,
    ) -> MapperResult<Self>
    where
        D: SourceDataset + ?Sized,
        R: RasterDriver + ?Sized,
    {
        Self::with_catalog(builtin_catalog(), file_name, dataset, metadata, driver)
    }

    /// Map a dataset using a custom calibration catalog.
    pub fn with_catalog<D, R>(
        catalog: &SatelliteCatalog,
        file_name: &str,
        dataset: &D,
        _metadata: &BTreeMap<String, String>,
        driver: &R,
    ) -> MapperResult<Self>
    where
        D: SourceDataset + ?Sized,
        R: RasterDriver + ?Sized,
    {
        let description = DatasetDescription::parse(dataset.description())?;

        let entry = catalog
            .lookup(&description.satellite)
            .ok_or_else(|| MapperError::UnsupportedSatellite(description.satellite.clone()))?;
        info!(satellite = %entry.name, file = %file_name, "Identified geostationary satellite");
        log_calibration_gaps(entry);

        let acquisition_time = description.acquisition_time()?;

        let (descriptors, band_channels) = build_band_descriptors(entry, &description, driver);

        let mut vrt = VrtDataset::from_dataset(dataset);
        vrt.create_bands(&descriptors, driver)?;

        if let Some(profile) = ReconciliationProfile::for_satellite(&description.satellite) {
            reconcile_resolution(&mut vrt, profile, &band_channels, dataset.raster_x_size())?;
        }

        vrt.set_metadata_item(SATELLITE_METADATA_KEY, description.satellite.as_str());
        vrt.set_time(&acquisition_time);

        info!(
            satellite = %description.satellite,
            bands = vrt.band_count(),
            channels = entry.channel_count(),
            "Created geostationary VRT"
        );

        Ok(Self {
            vrt,
            description,
            acquisition_time,
            band_channels,
        })
    }

    pub fn vrt(&self) -> &VrtDataset {
        &self.vrt
    }

    pub fn into_vrt(self) -> VrtDataset {
        self.vrt
    }

    pub fn satellite(&self) -> &str {
        &self.description.satellite
    }

    pub fn description(&self) -> &DatasetDescription {
        &self.description
    }

    pub fn acquisition_time(&self) -> NaiveDateTime {
        self.acquisition_time
    }

    /// Channel number (1-based) behind each output band.
    pub fn band_channels(&self) -> &[usize] {
        &self.band_channels
    }
}

fn log_calibration_gaps(entry: &CalibrationEntry) {
    if matches!(entry.channel_transform(0), ChannelTransform::None) {
        debug!(satellite = %entry.name, "No scale/offset or LUT found");
    }
    if entry.nodata.is_none() {
        debug!(satellite = %entry.name, "No NODATA values found");
    }
}

/// One descriptor per channel whose virtual source opens, in catalog order.
///
/// Returns the descriptors together with the channel number of each.
fn build_band_descriptors<R: RasterDriver + ?Sized>(
    entry: &CalibrationEntry,
    description: &DatasetDescription,
    driver: &R,
) -> (Vec<BandDescriptor>, Vec<usize>) {
    let (resolution, data_type) = entry.family().source_mode();
    let mut descriptors = Vec::with_capacity(entry.channel_count());
    let mut channels = Vec::with_capacity(entry.channel_count());

    for (index, &wavelength) in entry.wavelengths.iter().enumerate() {
        let channel = index + 1;
        let quantity = PhysicalQuantity::from_wavelength(wavelength);
        let filename = VirtualSource {
            path: &description.path,
            resolution,
            satellite: &description.satellite,
            timestamp: &description.timestamp,
            channel,
            data_type,
        }
        .to_string();

        if let Err(e) = driver.open(&filename) {
            warn!(wavelength_nm = wavelength, error = %e, "Band missing for wavelength, skipping");
            continue;
        }

        let mut source = BandSource {
            filename,
            band: 1,
            nodata: entry.nodata(index).map(|v| v.to_string()),
            ..Default::default()
        };
        match entry.channel_transform(index) {
            ChannelTransform::Linear { scale, offset } => {
                source.scale_ratio = Some(scale.to_string());
                source.scale_offset = Some(offset.to_string());
            }
            ChannelTransform::Lut(lut) => source.lut = Some(lut.to_wire_string()),
            ChannelTransform::None => {}
        }

        descriptors.push(BandDescriptor::new(
            source,
            BandDestination {
                wkv: quantity.wkv().to_string(),
                wavelength: wavelength.to_string(),
            },
        ));
        channels.push(channel);
    }

    (descriptors, channels)
}

/// Bring mixed-resolution channels onto the grid of the opened channel.
fn reconcile_resolution(
    vrt: &mut VrtDataset,
    profile: &ReconciliationProfile,
    band_channels: &[usize],
    opened_width: usize,
) -> MapperResult<()> {
    let Some(plan) = profile.plan(opened_width) else {
        debug!(width = opened_width, "Opened width matches no known resolution, keeping source rectangles");
        return Ok(());
    };

    let bands: Vec<usize> = band_channels
        .iter()
        .enumerate()
        .filter(|(_, channel)| plan.channels.contains(channel))
        .map(|(position, _)| position + 1)
        .collect();
    if bands.is_empty() {
        return Ok(());
    }

    let xml = vrt.read_xml()?;
    let patched = patch_src_rect(&xml, &bands, plan.src_x_size, plan.src_y_size)?;
    vrt.write_xml(&patched)?;

    debug!(
        ?bands,
        x_size = plan.src_x_size,
        y_size = plan.src_y_size,
        "Reconciled source rectangles"
    );
    Ok(())
}
