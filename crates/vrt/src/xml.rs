//! XML helpers and in-place patching of the VRT band tree.

use crate::error::{VrtError, VrtResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

/// Rewrite the source rectangle size of selected bands.
///
/// For every `VRTRasterBand` whose `band` attribute is in `bands`, the
/// `xSize`/`ySize` attributes of the `SrcRect` in its first `ComplexSource`
/// are replaced. All other content, including whitespace, passes through
/// unchanged.
pub fn patch_src_rect(xml: &str, bands: &[usize], x_size: usize, y_size: usize) -> VrtResult<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());

    let x_size = x_size.to_string();
    let y_size = y_size.to_string();

    let mut target = false;
    let mut sources_seen = 0usize;
    let mut in_source = false;
    let mut patched = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"VRTRasterBand" => {
                let number = attribute(&e, "band")?
                    .map(|v| parse_usize("band", &v))
                    .transpose()?;
                target = number.is_some_and(|n| bands.contains(&n));
                sources_seen = 0;
                patched = false;
                writer.write_event(Event::Start(e))?;
            }
            Event::Start(e) if e.name().as_ref() == b"ComplexSource" => {
                sources_seen += 1;
                in_source = true;
                writer.write_event(Event::Start(e))?;
            }
            Event::End(e) if e.name().as_ref() == b"ComplexSource" => {
                in_source = false;
                writer.write_event(Event::End(e))?;
            }
            Event::Empty(e)
                if e.name().as_ref() == b"SrcRect"
                    && target
                    && in_source
                    && sources_seen == 1
                    && !patched =>
            {
                writer.write_event(Event::Empty(with_size(&e, &x_size, &y_size)?))?;
                patched = true;
            }
            Event::Start(e)
                if e.name().as_ref() == b"SrcRect"
                    && target
                    && in_source
                    && sources_seen == 1
                    && !patched =>
            {
                writer.write_event(Event::Start(with_size(&e, &x_size, &y_size)?))?;
                patched = true;
            }
            Event::End(e) if e.name().as_ref() == b"VRTRasterBand" => {
                target = false;
                writer.write_event(Event::End(e))?;
            }
            Event::Eof => break,
            event => writer.write_event(event)?,
        }
    }

    debug!(?bands, x_size = %x_size, y_size = %y_size, "Patched source rectangles");
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Copy of `e` with `xSize`/`ySize` replaced.
fn with_size(e: &BytesStart<'_>, x_size: &str, y_size: &str) -> VrtResult<BytesStart<'static>> {
    let mut patched = BytesStart::new(element_name(e)?);
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        match attr.key.as_ref() {
            b"xSize" => patched.push_attribute(("xSize", x_size)),
            b"ySize" => patched.push_attribute(("ySize", y_size)),
            _ => patched.push_attribute(attr),
        }
    }
    Ok(patched)
}

pub(crate) fn element_name(e: &BytesStart<'_>) -> VrtResult<String> {
    Ok(std::str::from_utf8(e.name().as_ref())?.to_string())
}

/// Unescaped value of an attribute, if present.
pub(crate) fn attribute(e: &BytesStart<'_>, key: &str) -> VrtResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == key.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

pub(crate) fn parse_usize(field: &'static str, value: &str) -> VrtResult<usize> {
    value.trim().parse().map_err(|_| VrtError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

pub(crate) fn required_usize(
    e: &BytesStart<'_>,
    element: &'static str,
    key: &'static str,
) -> VrtResult<usize> {
    let value = attribute(e, key)?.ok_or(VrtError::MissingAttribute {
        element,
        attribute: key,
    })?;
    parse_usize(key, &value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE: &str = r#"<VRTDataset rasterXSize="5032" rasterYSize="5000">
  <VRTRasterBand dataType="Float32" band="1">
    <ComplexSource>
      <SourceFilename relativeToVRT="0">a</SourceFilename>
      <SrcRect xOff="0" yOff="0" xSize="5032" ySize="5000"/>
      <DstRect xOff="0" yOff="0" xSize="5032" ySize="5000"/>
    </ComplexSource>
  </VRTRasterBand>
  <VRTRasterBand dataType="Float32" band="2">
    <ComplexSource>
      <SourceFilename relativeToVRT="0">b</SourceFilename>
      <SrcRect xOff="0" yOff="0" xSize="5032" ySize="5000"/>
      <DstRect xOff="0" yOff="0" xSize="5032" ySize="5000"/>
    </ComplexSource>
    <ComplexSource>
      <SourceFilename relativeToVRT="0">c</SourceFilename>
      <SrcRect xOff="0" yOff="0" xSize="5032" ySize="5000"/>
    </ComplexSource>
  </VRTRasterBand>
</VRTDataset>"#;

    #[test]
    fn test_patch_selected_band_only() {
        let patched = patch_src_rect(TREE, &[2], 2532, 2500).unwrap();
        assert_eq!(
            patched.matches(r#"<SrcRect xOff="0" yOff="0" xSize="2532" ySize="2500"/>"#).count(),
            1
        );
        // Band 1 and the second source of band 2 untouched, destinations untouched
        assert_eq!(
            patched.matches(r#"<SrcRect xOff="0" yOff="0" xSize="5032" ySize="5000"/>"#).count(),
            2
        );
        assert_eq!(patched.matches(r#"<DstRect xOff="0" yOff="0" xSize="5032" ySize="5000"/>"#).count(), 2);
    }

    #[test]
    fn test_patch_no_bands_is_identity() {
        let patched = patch_src_rect(TREE, &[], 1, 1).unwrap();
        assert_eq!(patched, TREE);
    }

    #[test]
    fn test_patch_unknown_band_is_identity() {
        let patched = patch_src_rect(TREE, &[7], 1, 1).unwrap();
        assert_eq!(patched, TREE);
    }

    #[test]
    fn test_attribute_helpers() {
        let e = BytesStart::new("SrcRect").with_attributes([("xSize", "12"), ("ySize", "x")]);
        assert_eq!(attribute(&e, "xSize").unwrap(), Some("12".to_string()));
        assert_eq!(attribute(&e, "xOff").unwrap(), None);
        assert_eq!(required_usize(&e, "SrcRect", "xSize").unwrap(), 12);
        assert!(matches!(
            required_usize(&e, "SrcRect", "ySize"),
            Err(VrtError::InvalidValue { .. })
        ));
        assert!(matches!(
            required_usize(&e, "SrcRect", "yOff"),
            Err(VrtError::MissingAttribute { .. })
        ));
    }
}
