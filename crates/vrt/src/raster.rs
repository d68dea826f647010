//! In-memory virtual raster dataset and its XML form.

use crate::band::BandDescriptor;
use crate::dataset::SourceDataset;
use crate::driver::RasterDriver;
use crate::error::{VrtError, VrtResult};
use crate::xml::{attribute, element_name, parse_usize, required_usize};
use chrono::NaiveDateTime;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use sat_common::format_acquisition_time;
use std::collections::BTreeMap;
use tracing::debug;

/// Data type of bands produced from calibrated sources.
const BAND_DATA_TYPE: &str = "Float32";

/// Dataset metadata key holding the acquisition time.
pub const TIME_METADATA_KEY: &str = "time";

/// Pixel rectangle inside a source or destination raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x_off: usize,
    pub y_off: usize,
    pub x_size: usize,
    pub y_size: usize,
}

impl Rect {
    pub fn full(x_size: usize, y_size: usize) -> Self {
        Self {
            x_off: 0,
            y_off: 0,
            x_size,
            y_size,
        }
    }
}

/// Source of a VRT band with its pixel transform.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexSource {
    pub filename: String,
    pub source_band: u32,
    pub src_rect: Rect,
    pub dst_rect: Rect,
    pub scale_offset: Option<String>,
    pub scale_ratio: Option<String>,
    pub lut: Option<String>,
    pub nodata: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VrtBand {
    /// Band number, 1-based
    pub band: usize,
    pub data_type: String,
    pub metadata: BTreeMap<String, String>,
    pub source: ComplexSource,
}

impl VrtBand {
    pub fn metadata_item(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

/// Virtual raster dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VrtDataset {
    x_size: usize,
    y_size: usize,
    metadata: BTreeMap<String, String>,
    bands: Vec<VrtBand>,
}

impl VrtDataset {
    pub fn new(x_size: usize, y_size: usize) -> Self {
        Self {
            x_size,
            y_size,
            ..Default::default()
        }
    }

    /// Empty dataset with the size of an opened source.
    pub fn from_dataset<D: SourceDataset + ?Sized>(dataset: &D) -> Self {
        Self::new(dataset.raster_x_size(), dataset.raster_y_size())
    }

    pub fn raster_x_size(&self) -> usize {
        self.x_size
    }

    pub fn raster_y_size(&self) -> usize {
        self.y_size
    }

    pub fn bands(&self) -> &[VrtBand] {
        &self.bands
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// Band by 1-based number.
    pub fn band(&self, number: usize) -> VrtResult<&VrtBand> {
        self.bands
            .iter()
            .find(|b| b.band == number)
            .ok_or(VrtError::BandNotFound(number))
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn metadata_item(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn set_metadata_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn set_time(&mut self, time: &NaiveDateTime) {
        self.set_metadata_item(TIME_METADATA_KEY, format_acquisition_time(time));
    }

    /// Append one band per descriptor, in descriptor order.
    ///
    /// Each source is opened through `driver` to size its source rectangle.
    /// The destination rectangle always covers the whole dataset.
    pub fn create_bands<R: RasterDriver + ?Sized>(
        &mut self,
        descriptors: &[BandDescriptor],
        driver: &R,
    ) -> VrtResult<()> {
        for descriptor in descriptors {
            let src = &descriptor.source;
            let info = driver.open(&src.filename)?;

            let mut metadata = BTreeMap::new();
            metadata.insert("wkv".to_string(), descriptor.destination.wkv.clone());
            metadata.insert(
                "wavelength".to_string(),
                descriptor.destination.wavelength.clone(),
            );

            let band = VrtBand {
                band: self.bands.len() + 1,
                data_type: BAND_DATA_TYPE.to_string(),
                metadata,
                source: ComplexSource {
                    filename: src.filename.clone(),
                    source_band: src.band,
                    src_rect: Rect::full(info.x_size, info.y_size),
                    dst_rect: Rect::full(self.x_size, self.y_size),
                    scale_offset: src.scale_offset.clone(),
                    scale_ratio: src.scale_ratio.clone(),
                    lut: src.lut.clone().filter(|s| !s.is_empty()),
                    nodata: src.nodata.clone().filter(|s| !s.is_empty()),
                },
            };
            debug!(band = band.band, source = %src.filename, "Created VRT band");
            self.bands.push(band);
        }
        Ok(())
    }

    /// Current band tree as VRT XML.
    pub fn read_xml(&self) -> VrtResult<String> {
        self.to_xml()
    }

    /// Replace the dataset with the contents of a VRT XML document.
    pub fn write_xml(&mut self, xml: &str) -> VrtResult<()> {
        *self = Self::from_xml(xml)?;
        Ok(())
    }

    pub fn to_xml(&self) -> VrtResult<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        let x_size = self.x_size.to_string();
        let y_size = self.y_size.to_string();
        writer.write_event(Event::Start(
            BytesStart::new("VRTDataset")
                .with_attributes([("rasterXSize", x_size.as_str()), ("rasterYSize", y_size.as_str())]),
        ))?;
        write_metadata(&mut writer, &self.metadata)?;

        for band in &self.bands {
            let number = band.band.to_string();
            writer.write_event(Event::Start(
                BytesStart::new("VRTRasterBand")
                    .with_attributes([("dataType", band.data_type.as_str()), ("band", number.as_str())]),
            ))?;
            write_metadata(&mut writer, &band.metadata)?;

            let source = &band.source;
            writer.write_event(Event::Start(BytesStart::new("ComplexSource")))?;
            write_text_element(
                &mut writer,
                BytesStart::new("SourceFilename").with_attributes([("relativeToVRT", "0")]),
                &source.filename,
            )?;
            write_text_element(
                &mut writer,
                BytesStart::new("SourceBand"),
                &source.source_band.to_string(),
            )?;
            write_rect(&mut writer, "SrcRect", &source.src_rect)?;
            write_rect(&mut writer, "DstRect", &source.dst_rect)?;
            let optional = [
                ("ScaleOffset", &source.scale_offset),
                ("ScaleRatio", &source.scale_ratio),
                ("LUT", &source.lut),
                ("NODATA", &source.nodata),
            ];
            for (name, value) in optional {
                if let Some(value) = value {
                    write_text_element(&mut writer, BytesStart::new(name), value)?;
                }
            }
            writer.write_event(Event::End(BytesEnd::new("ComplexSource")))?;
            writer.write_event(Event::End(BytesEnd::new("VRTRasterBand")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("VRTDataset")))?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    pub fn from_xml(xml: &str) -> VrtResult<Self> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut dataset = VrtDataset::default();
        let mut stack: Vec<String> = Vec::new();
        let mut mdi_key: Option<String> = None;
        // Only the first complex source of a band is modelled
        let mut sources_seen = 0usize;

        loop {
            let event = reader.read_event()?;
            let (start, is_empty) = match &event {
                Event::Start(e) => (Some(e), false),
                Event::Empty(e) => (Some(e), true),
                _ => (None, false),
            };

            if let Some(e) = start {
                let name = element_name(e)?;
                let in_first_source = sources_seen == 1
                    && stack.last().map(String::as_str) == Some("ComplexSource");
                match name.as_str() {
                    "VRTDataset" => {
                        dataset.x_size = required_usize(e, "VRTDataset", "rasterXSize")?;
                        dataset.y_size = required_usize(e, "VRTDataset", "rasterYSize")?;
                    }
                    "VRTRasterBand" => {
                        let band = match attribute(e, "band")? {
                            Some(v) => parse_usize("band", &v)?,
                            None => dataset.bands.len() + 1,
                        };
                        let data_type = attribute(e, "dataType")?
                            .unwrap_or_else(|| BAND_DATA_TYPE.to_string());
                        dataset.bands.push(VrtBand {
                            band,
                            data_type,
                            ..Default::default()
                        });
                        sources_seen = 0;
                    }
                    "ComplexSource" => sources_seen += 1,
                    "MDI" => mdi_key = attribute(e, "key")?,
                    "SrcRect" if in_first_source => {
                        let rect = read_rect(e, "SrcRect")?;
                        current_band(&mut dataset, &name)?.source.src_rect = rect;
                    }
                    "DstRect" if in_first_source => {
                        let rect = read_rect(e, "DstRect")?;
                        current_band(&mut dataset, &name)?.source.dst_rect = rect;
                    }
                    _ => {}
                }
                if !is_empty {
                    stack.push(name);
                }
                continue;
            }

            match event {
                Event::Text(t) => {
                    let text = t.unescape()?.into_owned();
                    let Some(element) = stack.last() else { continue };
                    let parent = stack.len().checked_sub(2).map(|i| stack[i].as_str());

                    if element == "MDI" {
                        if let Some(key) = mdi_key.take() {
                            let in_band = stack.iter().any(|s| s == "VRTRasterBand");
                            if in_band {
                                current_band(&mut dataset, "MDI")?.metadata.insert(key, text);
                            } else {
                                dataset.metadata.insert(key, text);
                            }
                        }
                        continue;
                    }

                    if parent != Some("ComplexSource") || sources_seen != 1 {
                        continue;
                    }
                    let element = element.clone();
                    let source = &mut current_band(&mut dataset, &element)?.source;
                    match element.as_str() {
                        "SourceFilename" => source.filename = text,
                        "SourceBand" => {
                            source.source_band = text.trim().parse::<u32>().map_err(|_| VrtError::InvalidValue {
                                field: "SourceBand",
                                value: text.clone(),
                            })?
                        }
                        "ScaleOffset" => source.scale_offset = Some(text),
                        "ScaleRatio" => source.scale_ratio = Some(text),
                        "LUT" => source.lut = Some(text),
                        "NODATA" => source.nodata = Some(text),
                        _ => {}
                    }
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(dataset)
    }
}

fn current_band<'a>(dataset: &'a mut VrtDataset, element: &str) -> VrtResult<&'a mut VrtBand> {
    dataset
        .bands
        .last_mut()
        .ok_or_else(|| VrtError::Misplaced(element.to_string()))
}

fn read_rect(e: &BytesStart<'_>, element: &'static str) -> VrtResult<Rect> {
    Ok(Rect {
        x_off: required_usize(e, element, "xOff")?,
        y_off: required_usize(e, element, "yOff")?,
        x_size: required_usize(e, element, "xSize")?,
        y_size: required_usize(e, element, "ySize")?,
    })
}

fn write_metadata(
    writer: &mut Writer<Vec<u8>>,
    metadata: &BTreeMap<String, String>,
) -> VrtResult<()> {
    if metadata.is_empty() {
        return Ok(());
    }
    writer.write_event(Event::Start(BytesStart::new("Metadata")))?;
    for (key, value) in metadata {
        write_text_element(
            writer,
            BytesStart::new("MDI").with_attributes([("key", key.as_str())]),
            value,
        )?;
    }
    writer.write_event(Event::End(BytesEnd::new("Metadata")))?;
    Ok(())
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    start: BytesStart<'_>,
    text: &str,
) -> VrtResult<()> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(end))?;
    Ok(())
}

fn write_rect(writer: &mut Writer<Vec<u8>>, name: &str, rect: &Rect) -> VrtResult<()> {
    let values = [
        rect.x_off.to_string(),
        rect.y_off.to_string(),
        rect.x_size.to_string(),
        rect.y_size.to_string(),
    ];
    writer.write_event(Event::Empty(BytesStart::new(name).with_attributes([
        ("xOff", values[0].as_str()),
        ("yOff", values[1].as_str()),
        ("xSize", values[2].as_str()),
        ("ySize", values[3].as_str()),
    ])))?;
    Ok(())
}
