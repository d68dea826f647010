//! Lookup tables mapping stored values to physical quantities.
//!
//! Internally a LUT is an ordered list of `(raw, physical)` pairs. The wire
//! format understood by the raster driver is `raw:physical` pairs joined by
//! commas (`0:330,1:329.686,...`), produced only through [`fmt::Display`].
//!
//! Raw values must be encodable in the driver's byte range: anything outside
//! `[LUT_RAW_MIN, LUT_RAW_MAX]` is dropped when a table is derived.

use crate::error::CatalogError;
use std::fmt;
use std::str::FromStr;

/// Smallest encodable raw value (inclusive).
pub const LUT_RAW_MIN: f64 = 0.0;

/// Largest encodable raw value (inclusive).
pub const LUT_RAW_MAX: f64 = 256.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lut {
    pairs: Vec<(f64, f64)>,
}

impl Lut {
    /// Build a LUT from explicit pairs, kept in the given order.
    pub fn new(pairs: Vec<(f64, f64)>) -> Self {
        Self { pairs }
    }

    /// Pair `raw[i]` with `physical[i]`, keeping only encodable raw values.
    ///
    /// Pairs whose raw value falls outside `[0, 256]` are skipped silently.
    pub fn from_arrays(raw: &[f64], physical: &[f64]) -> Self {
        let pairs = raw
            .iter()
            .zip(physical)
            .filter(|(r, _)| is_encodable(**r))
            .map(|(r, p)| (*r, *p))
            .collect();
        Self { pairs }
    }

    /// LUT where the raw value is the index into `physical`.
    pub fn from_counts(physical: &[f64]) -> Self {
        let raw: Vec<f64> = (0..physical.len()).map(|i| i as f64).collect();
        Self::from_arrays(&raw, physical)
    }

    /// Derive a LUT from a radiance table.
    ///
    /// Each radiance is turned into a synthetic raw count with
    /// `radiance / calibration - offset` and paired with the target value at
    /// the same position.
    pub fn from_radiances(radiances: &[f64], calibration: f64, offset: f64, targets: &[f64]) -> Self {
        let raw: Vec<f64> = radiances.iter().map(|r| r / calibration - offset).collect();
        Self::from_arrays(&raw, targets)
    }

    /// Linear stretch between two raw/physical end points.
    pub fn linear(raw_min: f64, physical_min: f64, raw_max: f64, physical_max: f64) -> Self {
        Self::new(vec![(raw_min, physical_min), (raw_max, physical_max)])
    }

    pub fn pairs(&self) -> &[(f64, f64)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Wire-format string handed to the raster driver.
    pub fn to_wire_string(&self) -> String {
        self.to_string()
    }
}

#[inline]
fn is_encodable(raw: f64) -> bool {
    (LUT_RAW_MIN..=LUT_RAW_MAX).contains(&raw)
}

impl fmt::Display for Lut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (raw, physical)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", raw, physical)?;
        }
        Ok(())
    }
}

impl FromStr for Lut {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pairs = Vec::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (raw, physical) = entry.split_once(':').ok_or_else(|| CatalogError::InvalidLut {
                entry: entry.to_string(),
                message: "expected raw:physical".to_string(),
            })?;
            let parse = |v: &str| {
                v.trim().parse::<f64>().map_err(|e| CatalogError::InvalidLut {
                    entry: entry.to_string(),
                    message: e.to_string(),
                })
            };
            pairs.push((parse(raw)?, parse(physical)?));
        }
        Ok(Self { pairs })
    }
}
