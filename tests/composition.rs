//! Checks that the two stages compose the same way through the facade crate
//! as through the member crates directly.

use approx::assert_abs_diff_eq;
use growth_stats::{estimate_percentile, CurveSet, GaussianFit};

const REFERENCE_JSON: &str = r#"{
    "hippocampus": {
        "ages": [28, 30, 32],
        "percentiles": {
            "p5":  [80, 96, 112],
            "p25": [90, 108, 126],
            "p50": [100, 120, 140],
            "p75": [110, 132, 154],
            "p95": [120, 144, 168]
        }
    }
}"#;

#[test]
fn interpolate_then_estimate_matches_direct_fit() {
    let curves = CurveSet::from_json_str(REFERENCE_JSON).unwrap();
    let point = curves
        .get("hippocampus")
        .unwrap()
        .sample_at(31.0)
        .unwrap();

    let via_wrapper =
        estimate_percentile(148.0, point.p5, point.p25, point.p50, point.p75, point.p95);
    let via_fit = GaussianFit::fit(&point).percentile_of(148.0);

    assert_eq!(via_wrapper, via_fit);
    assert!(via_fit > 50.0 && via_fit < 100.0);
}

#[test]
fn degenerate_curve_falls_back_to_midpoint_rank() {
    assert_abs_diff_eq!(estimate_percentile(123.0, 5.0, 5.0, 5.0, 5.0, 5.0), 50.0);
}
