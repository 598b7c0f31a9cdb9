//! Base measure -> derived measure normalization and status classification
//!
//! Both functions are total over all finite inputs: out-of-range values are
//! absorbed by the formulas' own boundary conditions rather than rejected.

use crate::catalog::MetricDef;
use crate::models::Status;

/// Normalize a raw metric value to a 0-100 derived measure.
///
/// Likert-scale metrics (`unit == "1-5"`) use a plain linear rescale over
/// [min,max] and are intentionally not clamped, matching the published
/// scoring algorithm; every other metric is clamped to [0,100] by the
/// piecewise formula itself.
pub fn normalize(value: f64, metric: &MetricDef) -> f64 {
    if metric.is_likert() {
        return (value - metric.min) / (metric.max - metric.min) * 100.0;
    }

    if metric.lower_better {
        if value <= metric.target {
            100.0
        } else if value >= metric.max {
            0.0
        } else {
            (100.0 - (value - metric.target) / (metric.max - metric.target) * 100.0).max(0.0)
        }
    } else {
        if value >= metric.target {
            100.0
        } else if value <= metric.min {
            0.0
        } else {
            ((value - metric.min) / (metric.target - metric.min) * 100.0).max(0.0)
        }
    }
}

/// Classify a raw value against its metric's target.
///
/// The Good band spans 20% past the target (lower-is-better) or 20% short of
/// it (higher-is-better). A target of 0 on a lower-is-better metric collapses
/// the band: only an exact 0 is Excellent and any positive value is
/// Needs Improvement, which is the intended reading of "zero tolerance"
/// targets like data corruption.
pub fn classify(value: f64, metric: &MetricDef) -> Status {
    let threshold = metric.target * if metric.lower_better { 1.2 } else { 0.8 };

    if metric.lower_better {
        if value <= metric.target {
            Status::Excellent
        } else if value <= threshold {
            Status::Good
        } else {
            Status::NeedsImprovement
        }
    } else {
        if value >= metric.target {
            Status::Excellent
        } else if value >= threshold {
            Status::Good
        } else {
            Status::NeedsImprovement
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn metric(dim: &str, id: &str) -> MetricDef {
        Catalog::standard()
            .dimension(dim)
            .unwrap()
            .metric(id)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_lower_better_anchors() {
        // avg_resp: target 200, max 10000
        let m = metric("perf", "avg_resp");
        assert_eq!(normalize(200.0, &m), 100.0);
        assert_eq!(normalize(0.0, &m), 100.0);
        assert_eq!(normalize(10_000.0, &m), 0.0);
        assert_eq!(normalize(50_000.0, &m), 0.0);
    }

    #[test]
    fn test_higher_better_anchors() {
        // uptime: target 99.9, min 0
        let m = metric("rel", "uptime");
        assert_eq!(normalize(99.9, &m), 100.0);
        assert_eq!(normalize(100.0, &m), 100.0);
        assert_eq!(normalize(0.0, &m), 0.0);
        assert_eq!(normalize(-5.0, &m), 0.0);
    }

    #[test]
    fn test_lower_better_monotone_between_target_and_max() {
        let m = metric("perf", "avg_resp");
        let mut prev = normalize(200.0, &m);
        for step in 1..=50 {
            let v = 200.0 + (10_000.0 - 200.0) * step as f64 / 50.0;
            let s = normalize(v, &m);
            assert!(s <= prev, "score increased at v={v}");
            assert!((0.0..=100.0).contains(&s));
            prev = s;
        }
    }

    #[test]
    fn test_higher_better_monotone_between_min_and_target() {
        let m = metric("rel", "uptime");
        let mut prev = normalize(0.0, &m);
        for step in 1..=50 {
            let v = 99.9 * step as f64 / 50.0;
            let s = normalize(v, &m);
            assert!(s >= prev, "score decreased at v={v}");
            assert!((0.0..=100.0).contains(&s));
            prev = s;
        }
    }

    #[test]
    fn test_non_likert_clamped_for_any_magnitude() {
        let lower = metric("perf", "avg_resp");
        let higher = metric("rel", "uptime");
        for v in [-1e9, -1.0, 0.0, 1.0, 1e3, 1e6, 1e12] {
            for m in [&lower, &higher] {
                let s = normalize(v, m);
                assert!((0.0..=100.0).contains(&s), "{} out of range for {v}", s);
            }
        }
    }

    #[test]
    fn test_likert_rescale_uncapped() {
        // satisfaction: 1-5 scale, so 3 -> 50, 5 -> 100
        let m = metric("usab", "satisfaction");
        assert_eq!(normalize(1.0, &m), 0.0);
        assert_eq!(normalize(3.0, &m), 50.0);
        assert_eq!(normalize(5.0, &m), 100.0);
        // Out-of-range Likert input passes through the linear formula
        assert_eq!(normalize(6.0, &m), 125.0);
        assert_eq!(normalize(0.0, &m), -25.0);
    }

    #[test]
    fn test_classify_lower_better_bands() {
        let m = metric("perf", "avg_resp"); // target 200, threshold 240
        assert_eq!(classify(150.0, &m), Status::Excellent);
        assert_eq!(classify(200.0, &m), Status::Excellent);
        assert_eq!(classify(240.0, &m), Status::Good);
        assert_eq!(classify(241.0, &m), Status::NeedsImprovement);
        assert_eq!(classify(10_000.0, &m), Status::NeedsImprovement);
    }

    #[test]
    fn test_classify_higher_better_bands() {
        let m = metric("usab", "discoverability"); // target 80, threshold 64
        assert_eq!(classify(95.0, &m), Status::Excellent);
        assert_eq!(classify(80.0, &m), Status::Excellent);
        assert_eq!(classify(64.0, &m), Status::Good);
        assert_eq!(classify(63.9, &m), Status::NeedsImprovement);
    }

    #[test]
    fn test_classify_zero_target_collapses_good_band() {
        // corruption: lower-is-better with target 0, so threshold is also 0
        let m = metric("sec", "corruption");
        assert_eq!(classify(0.0, &m), Status::Excellent);
        assert_eq!(classify(0.1, &m), Status::NeedsImprovement);
        assert_eq!(classify(1.0, &m), Status::NeedsImprovement);
    }
}
