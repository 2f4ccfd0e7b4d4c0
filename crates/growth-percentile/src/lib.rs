//! Percentile estimation against reference growth curves
//!
//! Second stage of the percentile engine: given the five reference band
//! values interpolated at a subject's age, fit a Gaussian model
//! ([`GaussianFit`]) and invert the observed measurement into a percentile
//! rank. [`estimate_regions`] composes both stages across every region a
//! [`CurveProvider`](growth_curve::CurveProvider) covers.
//!
//! # Examples
//!
//! ```
//! use growth_percentile::estimate_percentile;
//!
//! // Observation equal to the median band is the 50th percentile.
//! let pct = estimate_percentile(130.0, 104.0, 117.0, 130.0, 143.0, 156.0);
//! assert_eq!(pct, 50.0);
//! ```
//!
//! Both stages are pure and share no state; per-region work may be fanned
//! out freely (enable the `parallel` feature to do so with rayon).

pub mod engine;
pub mod fit;

// Re-exports
pub use engine::{estimate_regions, RegionEstimate};
pub use fit::{estimate_percentile, GaussianFit};
