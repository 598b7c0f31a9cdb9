//! Dimension and overall indicator aggregation

use tracing::debug;

use crate::catalog::DimensionDef;
use crate::config::Measurements;
use crate::models::{DimensionResult, MetricDetail};

use super::normalize::{classify, normalize};

/// Score one dimension from its measured metrics.
///
/// Metrics are visited in catalog order; metrics without a measurement are
/// excluded from the mean, never counted as zero. A dimension with no
/// measured metrics at all scores 0.
pub fn score_dimension(
    dim: &DimensionDef,
    measurements: &Measurements,
    weight: u32,
) -> DimensionResult {
    let mut details = Vec::new();

    for metric in &dim.metrics {
        let Some(base) = measurements.get(&dim.id, &metric.id) else {
            continue;
        };

        let derived = normalize(base, metric);
        details.push(MetricDetail {
            id: metric.id.clone(),
            name: metric.name.clone(),
            unit: metric.unit.clone(),
            base_measure: base,
            derived_measure: derived,
            target: metric.target,
            status: classify(base, metric),
        });
    }

    let score = if details.is_empty() {
        0
    } else {
        let sum: f64 = details.iter().map(|d| d.derived_measure).sum();
        (sum / details.len() as f64).round() as i64
    };

    debug!(
        "Dimension {}: {} of {} metrics measured, indicator {}",
        dim.id,
        details.len(),
        dim.metrics.len(),
        score
    );

    DimensionResult {
        id: dim.id.clone(),
        title: dim.title.clone(),
        score,
        weight,
        metrics: details,
    }
}

/// Combine dimension indicators into the overall quality indicator.
///
/// Normalizes by the actual total weight rather than assuming 100, and
/// returns 0 when no weight is assigned at all.
pub fn overall_score(dimensions: &[DimensionResult]) -> i64 {
    let total_weight: f64 = dimensions.iter().map(|d| d.weight as f64).sum();
    if total_weight <= 0.0 {
        return 0;
    }

    let weighted: f64 = dimensions
        .iter()
        .map(|d| d.score as f64 * d.weight as f64)
        .sum();

    (weighted / total_weight).round() as i64
}
