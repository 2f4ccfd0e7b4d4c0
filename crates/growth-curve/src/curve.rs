//! Reference growth curves and their validated JSON representation
//!
//! A [`ReferenceCurve`] is validated once at construction (and therefore once
//! at deserialization time); requests then trust it and never re-validate.

use crate::band::PercentileBand;
use crate::interpolate::{interpolate, InterpolatedPoint};
use growth_core::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use tracing::debug;

/// Population reference curve for one anatomical region.
///
/// Holds an ascending age axis and one index-aligned value series per
/// percentile band. Immutable after construction; the constructor is the
/// only place the shape invariants are checked.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawCurve")]
pub struct ReferenceCurve {
    ages: Vec<f64>,
    p5: Vec<f64>,
    p25: Vec<f64>,
    p50: Vec<f64>,
    p75: Vec<f64>,
    p95: Vec<f64>,
}

impl ReferenceCurve {
    /// Build a curve, validating shape invariants up front:
    /// a non-empty, ascending, finite age axis and one finite value series
    /// of matching length per band.
    pub fn new(
        ages: Vec<f64>,
        p5: Vec<f64>,
        p25: Vec<f64>,
        p50: Vec<f64>,
        p75: Vec<f64>,
        p95: Vec<f64>,
    ) -> Result<Self> {
        if ages.is_empty() {
            return Err(Error::empty_input("reference curve"));
        }
        if ages.iter().any(|a| !a.is_finite()) {
            return Err(Error::non_finite("reference ages"));
        }
        if ages.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::unsorted_ages("reference curve"));
        }

        let curve = Self {
            ages,
            p5,
            p25,
            p50,
            p75,
            p95,
        };
        for band in PercentileBand::ALL {
            let series = curve.band(band);
            if series.len() != curve.ages.len() {
                return Err(Error::size_mismatch(
                    curve.ages.len(),
                    series.len(),
                    &format!("percentile band {band}"),
                ));
            }
            if series.iter().any(|v| !v.is_finite()) {
                return Err(Error::non_finite(&format!("percentile band {band}")));
            }
        }
        Ok(curve)
    }

    /// Number of age samples.
    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        // Construction rejects empty curves, kept for API symmetry.
        self.ages.is_empty()
    }

    /// The ascending age axis.
    pub fn ages(&self) -> &[f64] {
        &self.ages
    }

    /// Value series for one percentile band, index-aligned with [`ages`](Self::ages).
    pub fn band(&self, band: PercentileBand) -> &[f64] {
        match band {
            PercentileBand::P5 => &self.p5,
            PercentileBand::P25 => &self.p25,
            PercentileBand::P50 => &self.p50,
            PercentileBand::P75 => &self.p75,
            PercentileBand::P95 => &self.p95,
        }
    }

    /// Youngest and oldest sampled age.
    pub fn age_range(&self) -> (f64, f64) {
        (self.ages[0], self.ages[self.ages.len() - 1])
    }

    /// Interpolate every band at `query_age`.
    ///
    /// Ages outside the sampled range clamp to the boundary samples.
    pub fn sample_at(&self, query_age: f64) -> Result<InterpolatedPoint> {
        Ok(InterpolatedPoint::new(
            query_age,
            interpolate(query_age, &self.ages, &self.p5)?,
            interpolate(query_age, &self.ages, &self.p25)?,
            interpolate(query_age, &self.ages, &self.p50)?,
            interpolate(query_age, &self.ages, &self.p75)?,
            interpolate(query_age, &self.ages, &self.p95)?,
        ))
    }
}

/// Mirror of the on-disk JSON shape, converted (and validated) into
/// [`ReferenceCurve`] during deserialization.
#[derive(Debug, Deserialize)]
struct RawCurve {
    ages: Vec<f64>,
    percentiles: RawBands,
}

#[derive(Debug, Deserialize)]
struct RawBands {
    p5: Vec<f64>,
    p25: Vec<f64>,
    p50: Vec<f64>,
    p75: Vec<f64>,
    p95: Vec<f64>,
}

impl TryFrom<RawCurve> for ReferenceCurve {
    type Error = Error;

    fn try_from(raw: RawCurve) -> Result<Self> {
        let RawBands {
            p5,
            p25,
            p50,
            p75,
            p95,
        } = raw.percentiles;
        Self::new(raw.ages, p5, p25, p50, p75, p95)
    }
}

/// Read-only lookup from region name to its reference curve.
///
/// The engine takes the provider as a parameter rather than holding global
/// state, so callers decide where curves come from and how long they live.
pub trait CurveProvider {
    /// Curve for one region, if the reference data covers it.
    fn curve(&self, region: &str) -> Option<&ReferenceCurve>;

    /// All covered region names.
    fn regions(&self) -> Vec<&str>;
}

/// The full reference data set: region name to [`ReferenceCurve`].
///
/// Deserializes from the reference JSON (`{"<region>": {"ages": [...],
/// "percentiles": {...}}, ...}`); every curve is validated during the load,
/// never per request. Historically 47 regions, but cardinality is arbitrary.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CurveSet {
    curves: BTreeMap<String, ReferenceCurve>,
}

impl CurveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a whole reference data set from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let set: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidInput(format!("reference JSON: {e}")))?;
        debug!("loaded {} reference curves", set.len());
        Ok(set)
    }

    /// Parse and validate a whole reference data set from a reader.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let set: Self = serde_json::from_reader(reader)
            .map_err(|e| Error::InvalidInput(format!("reference JSON: {e}")))?;
        debug!("loaded {} reference curves", set.len());
        Ok(set)
    }

    pub fn insert(&mut self, region: impl Into<String>, curve: ReferenceCurve) {
        self.curves.insert(region.into(), curve);
    }

    /// Curve for one region; `None` answers the caller's "region not found".
    pub fn get(&self, region: &str) -> Option<&ReferenceCurve> {
        self.curves.get(region)
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferenceCurve)> {
        self.curves.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl CurveProvider for CurveSet {
    fn curve(&self, region: &str) -> Option<&ReferenceCurve> {
        self.get(region)
    }

    fn regions(&self) -> Vec<&str> {
        self.curves.keys().map(String::as_str).collect()
    }
}
