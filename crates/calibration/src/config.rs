//! YAML catalog overrides.
//!
//! Entries use the same parallel-array layout as the builtin tables:
//!
//! ```yaml
//! satellites:
//!   - name: GOES16
//!     wavelengths: [640, 10300]
//!     scale: [0.0977, 0.1662]
//!     offset: [0, 170]
//!   - name: MTSAT1R
//!     wavelengths: [700]
//!     lut: ["0:0,255:100"]
//!     nodata: [255]
//! ```
//!
//! `${VAR}` and `${VAR:-default}` are expanded from the environment before parsing.

use crate::catalog::CalibrationEntry;
use crate::error::{CatalogError, CatalogResult};
use crate::lut::Lut;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub satellites: Vec<SatelliteEntryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SatelliteEntryConfig {
    pub name: String,
    pub wavelengths: Vec<u32>,
    #[serde(default)]
    pub scale: Option<Vec<f64>>,
    #[serde(default)]
    pub offset: Option<Vec<f64>>,
    #[serde(default)]
    pub lut: Option<Vec<String>>,
    #[serde(default)]
    pub nodata: Option<Vec<f64>>,
}

impl SatelliteEntryConfig {
    /// Convert into a validated catalog entry.
    pub fn into_entry(self) -> CatalogResult<CalibrationEntry> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidConfig(
                "satellite name cannot be empty".to_string(),
            ));
        }

        let mut entry = match (self.scale, self.offset, self.lut) {
            (Some(_), Some(_), Some(_)) => {
                return Err(CatalogError::AmbiguousCalibration(self.name));
            }
            (Some(scale), Some(offset), None) => {
                CalibrationEntry::linear(&self.name, self.wavelengths, scale, offset)
            }
            (Some(_), None, _) | (None, Some(_), _) => {
                return Err(CatalogError::IncompleteLinear(self.name));
            }
            (None, None, Some(luts)) => {
                let luts = luts
                    .iter()
                    .map(|s| s.parse::<Lut>())
                    .collect::<CatalogResult<Vec<_>>>()?;
                CalibrationEntry::with_luts(&self.name, self.wavelengths, luts)
            }
            (None, None, None) => CalibrationEntry::uncalibrated(&self.name, self.wavelengths),
        };

        if let Some(nodata) = self.nodata {
            entry = entry.with_nodata(nodata);
        }
        entry.validate()?;
        Ok(entry)
    }
}

impl CatalogConfig {
    pub fn from_yaml_str(content: &str) -> CatalogResult<Self> {
        let expanded = expand_env_vars(content)?;
        Ok(serde_yaml::from_str(&expanded)?)
    }

    /// Convert every configured satellite into a catalog entry.
    pub fn into_entries(self) -> CatalogResult<Vec<CalibrationEntry>> {
        self.satellites
            .into_iter()
            .map(SatelliteEntryConfig::into_entry)
            .collect()
    }
}

/// Load and validate a catalog override file.
pub fn load_catalog_config<P: AsRef<Path>>(path: P) -> CatalogResult<Vec<CalibrationEntry>> {
    let content = fs::read_to_string(path.as_ref())?;
    let entries = CatalogConfig::from_yaml_str(&content)?.into_entries()?;
    info!(
        path = %path.as_ref().display(),
        satellites = entries.len(),
        "Loaded catalog overrides"
    );
    Ok(entries)
}

/// Expand `${VAR}` and `${VAR:-default}` references.
pub fn expand_env_vars(content: &str) -> CatalogResult<String> {
    let mut result = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or_else(|| {
            CatalogError::InvalidConfig(format!("Unclosed variable substitution: ${{{}", after))
        })?;
        result.push_str(&resolve_var_expr(&after[..end])?);
        rest = &after[end + 1..];
    }
    result.push_str(rest);

    Ok(result)
}

fn resolve_var_expr(expr: &str) -> CatalogResult<String> {
    if let Some((name, default)) = expr.split_once(":-") {
        match std::env::var(name.trim()) {
            Ok(val) if !val.is_empty() => Ok(val),
            _ => Ok(default.to_string()),
        }
    } else {
        std::env::var(expr.trim())
            .map_err(|_| CatalogError::InvalidConfig(format!("Environment variable {} not set", expr)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Calibration, ChannelTransform};

    #[test]
    fn test_linear_entry() {
        let yaml = r#"
satellites:
  - name: GOES16
    wavelengths: [640, 10300]
    scale: [0.5, 0.25]
    offset: [0, 170]
"#;
        let entries = CatalogConfig::from_yaml_str(yaml).unwrap().into_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].channel_transform(1),
            ChannelTransform::Linear { scale: 0.25, offset: 170.0 }
        );
    }

    #[test]
    fn test_lut_entry_with_nodata() {
        let yaml = r#"
satellites:
  - name: MTSAT1R
    wavelengths: [700]
    lut: ["0:0, 255:100"]
    nodata: [255]
"#;
        let entries = CatalogConfig::from_yaml_str(yaml).unwrap().into_entries().unwrap();
        assert!(matches!(entries[0].calibration, Calibration::Lut(_)));
        assert_eq!(entries[0].nodata(0), Some(255.0));
    }

    #[test]
    fn test_uncalibrated_entry() {
        let yaml = "satellites:\n  - name: ELEKTRO\n    wavelengths: [640]\n";
        let entries = CatalogConfig::from_yaml_str(yaml).unwrap().into_entries().unwrap();
        assert_eq!(entries[0].calibration, Calibration::Uncalibrated);
    }

    #[test]
    fn test_rejects_ambiguous_calibration() {
        let yaml = r#"
satellites:
  - name: X
    wavelengths: [700]
    scale: [1]
    offset: [0]
    lut: ["0:0,255:100"]
"#;
        let err = CatalogConfig::from_yaml_str(yaml).unwrap().into_entries().unwrap_err();
        assert!(matches!(err, CatalogError::AmbiguousCalibration(_)));
    }

    #[test]
    fn test_rejects_scale_without_offset() {
        let yaml = "satellites:\n  - name: X\n    wavelengths: [700]\n    scale: [1]\n";
        let err = CatalogConfig::from_yaml_str(yaml).unwrap().into_entries().unwrap_err();
        assert!(matches!(err, CatalogError::IncompleteLinear(_)));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let yaml = "satellites:\n  - name: X\n    wavelengths: [700, 800]\n    nodata: [255]\n";
        let err = CatalogConfig::from_yaml_str(yaml).unwrap().into_entries().unwrap_err();
        assert!(matches!(err, CatalogError::LengthMismatch { field: "nodata", .. }));
    }

    #[test]
    fn test_expand_env_vars() {
        std::env::set_var("CATALOG_TEST_SAT", "MSG4");
        std::env::remove_var("CATALOG_TEST_UNSET");
        let result = expand_env_vars("name: ${CATALOG_TEST_SAT} ${CATALOG_TEST_UNSET:-x}").unwrap();
        assert_eq!(result, "name: MSG4 x");
    }

    #[test]
    fn test_expand_env_vars_missing_required() {
        std::env::remove_var("CATALOG_TEST_REQUIRED");
        assert!(expand_env_vars("${CATALOG_TEST_REQUIRED}").is_err());
        assert!(expand_env_vars("${UNCLOSED").is_err());
    }
}
