//! Multi-region percentile engine
//!
//! Entry point for the surrounding service layer: interpolate every region's
//! reference curve at the subject's age and estimate the percentile rank of
//! each measured volume. Regions are independent given their inputs, so the
//! fan-out needs no coordination; the `parallel` feature runs it on rayon.

use crate::fit::GaussianFit;
use growth_core::{Error, Result};
use growth_curve::{CurveProvider, InterpolatedPoint};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

/// Per-region output: the reference bands at the query age plus the subject's
/// measurement and its estimated percentile rank.
///
/// The bands are always present even when no measurement exists for the
/// region, so downstream consumers can render the reference curve regardless
/// of estimation success. Serialized field names keep the wire shape existing
/// consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionEstimate {
    pub p5: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
    /// The subject's measured volume, when one was supplied and finite.
    #[serde(rename = "inputrawv")]
    pub input_raw_value: Option<f64>,
    /// Estimated percentile rank of the measurement. Nominally 0-100 but
    /// unclamped, and exactly 50 when the reference spread is degenerate.
    #[serde(rename = "inputPercentile")]
    pub input_percentile: Option<f64>,
    /// Age the curve was sampled at.
    #[serde(rename = "curPMA")]
    pub query_age: f64,
}

impl RegionEstimate {
    /// Attach a measurement (or its absence) to an interpolated curve sample.
    pub fn from_point(point: &InterpolatedPoint, measurement: Option<f64>) -> Self {
        let fit = GaussianFit::fit(point);
        Self {
            p5: point.p5,
            p25: point.p25,
            p50: point.p50,
            p75: point.p75,
            p95: point.p95,
            input_raw_value: measurement,
            input_percentile: measurement.map(|v| fit.percentile_of(v)),
            query_age: point.query_age,
        }
    }
}

/// Estimate percentile ranks for every region the provider covers.
///
/// Iterates the provider's regions, not the measurement keys: regions
/// without a usable measurement still get their interpolated bands, with the
/// measurement fields left empty. Non-finite measurements count as absent.
/// Measurements for unknown regions are ignored.
pub fn estimate_regions<P: CurveProvider + Sync>(
    query_age: f64,
    measurements: &HashMap<String, f64>,
    curves: &P,
) -> Result<BTreeMap<String, RegionEstimate>> {
    let regions = curves.regions();
    debug!(
        "estimating {} regions at age {query_age} ({} measurements supplied)",
        regions.len(),
        measurements.len()
    );

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        regions
            .par_iter()
            .map(|region| estimate_region(query_age, region, measurements, curves))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        regions
            .iter()
            .map(|region| estimate_region(query_age, region, measurements, curves))
            .collect()
    }
}

fn estimate_region<P: CurveProvider>(
    query_age: f64,
    region: &str,
    measurements: &HashMap<String, f64>,
    curves: &P,
) -> Result<(String, RegionEstimate)> {
    let curve = curves
        .curve(region)
        .ok_or_else(|| Error::InvalidInput(format!("no reference curve for region {region}")))?;
    let point = curve.sample_at(query_age)?;
    let measurement = measurements.get(region).copied().filter(|v| v.is_finite());
    let estimate = RegionEstimate::from_point(&point, measurement);
    trace!(
        "region {region}: p50={:.3} percentile={:?}",
        estimate.p50,
        estimate.input_percentile
    );
    Ok((region.to_string(), estimate))
}
