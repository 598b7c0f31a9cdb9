//! End-to-end scoring pipeline tests
//!
//! Exercises the full chain (catalog -> normalization -> aggregation ->
//! recommendations) through the library API, including the documented
//! boundary scenarios and degradation behavior.

use std::collections::BTreeMap;

use qualimeter::catalog::Catalog;
use qualimeter::config::{Assessment, Measurements};
use qualimeter::models::{Status, Tier};
use qualimeter::scoring::{analyze, classify, normalize, overall_score, score_dimension};

fn assessment(
    dimensions: &[&str],
    weights: &[(&str, u32)],
    values: &[(&str, &str, f64)],
) -> Assessment {
    let mut measurements = Measurements::default();
    for (dim, metric, value) in values {
        measurements.insert(dim, metric, *value);
    }
    Assessment {
        dimensions: dimensions.iter().map(|s| s.to_string()).collect(),
        weights: weights
            .iter()
            .map(|(id, w)| (id.to_string(), *w))
            .collect::<BTreeMap<_, _>>(),
        measurements,
    }
}

#[test]
fn response_time_at_target_scores_100_excellent() {
    let catalog = Catalog::standard();
    let metric = catalog.dimension("perf").unwrap().metric("avg_resp").unwrap();

    assert_eq!(normalize(200.0, metric), 100.0);
    assert_eq!(classify(200.0, metric), Status::Excellent);
}

#[test]
fn response_time_at_max_scores_0_needs_improvement() {
    let catalog = Catalog::standard();
    let metric = catalog.dimension("perf").unwrap().metric("avg_resp").unwrap();

    assert_eq!(normalize(10_000.0, metric), 0.0);
    assert_eq!(classify(10_000.0, metric), Status::NeedsImprovement);
}

#[test]
fn uptime_anchors() {
    let catalog = Catalog::standard();
    let metric = catalog.dimension("rel").unwrap().metric("uptime").unwrap();

    assert_eq!(normalize(99.9, metric), 100.0);
    assert_eq!(normalize(0.0, metric), 0.0);
}

#[test]
fn dimension_mean_of_two_extremes_is_50() {
    let catalog = Catalog::standard();
    let mut measurements = Measurements::default();
    measurements.insert("perf", "avg_resp", 200.0); // -> 100
    measurements.insert("perf", "peak_resp", 10_000.0); // -> 0

    let result = score_dimension(
        catalog.dimension("perf").unwrap(),
        &measurements,
        50,
    );
    assert_eq!(result.score, 50);
}

#[test]
fn overall_weighted_mean_scenario() {
    let a = assessment(
        &["perf", "sec"],
        &[("perf", 60), ("sec", 40)],
        &[
            ("perf", "avg_resp", 200.0), // perf -> 100
            ("sec", "corruption", 0.0),  // sec -> 100
        ],
    );
    let report = analyze(&a, &Catalog::standard());
    assert_eq!(report.overall_score, 100);

    // Hand-built indicators: 80/60 and 40/40 -> round(64) = 64
    use qualimeter::models::DimensionResult;
    let dims = [
        DimensionResult {
            id: "a".into(),
            title: "A".into(),
            score: 80,
            weight: 60,
            metrics: vec![],
        },
        DimensionResult {
            id: "b".into(),
            title: "B".into(),
            score: 40,
            weight: 40,
            metrics: vec![],
        },
    ];
    assert_eq!(overall_score(&dims), 64);
}

#[test]
fn unmeasured_dimension_scores_zero_not_undefined() {
    let a = assessment(&["port"], &[("port", 100)], &[]);
    let report = analyze(&a, &Catalog::standard());
    assert_eq!(report.dimensions[0].score, 0);
    assert_eq!(report.overall_score, 0);
}

#[test]
fn zero_total_weight_yields_zero_overall() {
    let a = assessment(
        &["perf"],
        &[],
        &[("perf", "avg_resp", 200.0)],
    );
    let report = analyze(&a, &Catalog::standard());
    assert_eq!(report.dimensions[0].score, 100);
    assert_eq!(report.overall_score, 0);
}

#[test]
fn missing_metrics_are_excluded_not_zeroed() {
    // One perfect metric among seven unmeasured ones: the mean covers only
    // the measured metric, so the dimension scores 100, not 12.
    let a = assessment(
        &["perf"],
        &[("perf", 100)],
        &[("perf", "avg_resp", 100.0)],
    );
    let report = analyze(&a, &Catalog::standard());
    assert_eq!(report.dimensions[0].score, 100);
    assert_eq!(report.dimensions[0].metrics.len(), 1);
}

#[test]
fn recommendation_tiers_by_score() {
    // sec scores 45 (critical band) via a mid-range corruption value:
    // corruption 5555 on 0..10000 with target 0 -> 100 - 55.55 = 44.45 -> 44
    let a = assessment(
        &["sec", "rel", "comp"],
        &[("sec", 40), ("rel", 30), ("comp", 30)],
        &[
            ("sec", "corruption", 5555.0),   // 44 -> Critical
            ("rel", "uptime", 99.9),         // 100 -> Excellent
            ("comp", "exchange_rate", 75.0), // 76 -> silent band
        ],
    );
    let report = analyze(&a, &Catalog::standard());

    let tiers: Vec<(Option<&str>, Tier)> = report
        .recommendations
        .iter()
        .map(|r| (r.dimension.as_deref(), r.tier))
        .collect();
    assert_eq!(
        tiers,
        [(Some("sec"), Tier::Critical), (Some("rel"), Tier::Excellent)]
    );
}

#[test]
fn stable_fallback_when_everything_in_band() {
    let a = assessment(
        &["comp"],
        &[("comp", 100)],
        &[("comp", "exchange_rate", 75.0)], // 75/99 -> 76
    );
    let report = analyze(&a, &Catalog::standard());
    assert_eq!(report.dimensions[0].score, 76);
    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(report.recommendations[0].tier, Tier::Stable);
    assert!(report.recommendations[0].dimension.is_none());
}

#[test]
fn pipeline_is_idempotent() {
    let a = assessment(
        &["perf", "rel", "sec", "usab"],
        &[("perf", 25), ("rel", 25), ("sec", 25), ("usab", 25)],
        &[
            ("perf", "avg_resp", 312.5),
            ("perf", "cpu", 81.25),
            ("rel", "uptime", 99.87),
            ("sec", "auth_fail", 2.5),
            ("usab", "satisfaction", 4.5),
        ],
    );
    let catalog = Catalog::standard();

    let first = serde_json::to_vec(&analyze(&a, &catalog)).unwrap();
    let second = serde_json::to_vec(&analyze(&a, &catalog)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn extreme_inputs_stay_in_range() {
    let a = assessment(
        &["perf", "rel"],
        &[("perf", 50), ("rel", 50)],
        &[
            ("perf", "avg_resp", 1e12),
            ("perf", "throughput", -1e12),
            ("rel", "uptime", 1e12),
        ],
    );
    let report = analyze(&a, &Catalog::standard());
    for dim in &report.dimensions {
        assert!((0..=100).contains(&dim.score), "{} out of range", dim.id);
        for m in &dim.metrics {
            assert!(
                (0.0..=100.0).contains(&m.derived_measure),
                "{} derived {} out of range",
                m.id,
                m.derived_measure
            );
        }
    }
    assert!((0..=100).contains(&report.overall_score));
}

#[test]
fn report_summary_counts() {
    let a = assessment(
        &["perf", "rel", "port"],
        &[("perf", 40), ("rel", 40), ("port", 20)],
        &[
            ("perf", "avg_resp", 200.0), // 100
            ("rel", "uptime", 50.0),     // 50
        ],
    );
    let report = analyze(&a, &Catalog::standard());

    assert_eq!(report.dimensions_analyzed, 3);
    assert_eq!(report.above_target, 1);
    assert_eq!(report.total_weight, 100);
    // (100*40 + 50*40 + 0*20) / 100 = 60
    assert_eq!(report.overall_score, 60);
    assert_eq!(report.rating, "Acceptable");
}
