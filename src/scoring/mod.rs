//! Quality scoring engine
//!
//! Implements the ISO/IEC 15939 measurement chain: raw base measures are
//! normalized into 0-100 derived measures, averaged into per-dimension
//! indicators, and combined into a single weighted overall indicator, from
//! which recommendations are generated.
//!
//! Every function here is a pure, deterministic computation over its inputs;
//! running the same assessment twice produces identical reports.

mod aggregate;
mod normalize;
mod recommend;

pub use aggregate::{overall_score, score_dimension};
pub use normalize::{classify, normalize};
pub use recommend::recommend;

use tracing::info;

use crate::catalog::Catalog;
use crate::config::Assessment;
use crate::models::QualityReport;

/// Run the full assessment pipeline and produce a quality report.
///
/// Dimensions unknown to the catalog are skipped (the input loader already
/// warns about them). Dimensions with no assigned weight participate with
/// weight 0.
pub fn analyze(assessment: &Assessment, catalog: &Catalog) -> QualityReport {
    let dimensions: Vec<_> = assessment
        .dimensions
        .iter()
        .filter_map(|id| catalog.dimension(id))
        .map(|dim| {
            let weight = assessment.weights.get(&dim.id).copied().unwrap_or(0);
            score_dimension(dim, &assessment.measurements, weight)
        })
        .collect();

    let overall = overall_score(&dimensions);
    let recommendations = recommend(&dimensions);

    let total_weight: u64 = dimensions.iter().map(|d| d.weight as u64).sum();
    let above_target = dimensions.iter().filter(|d| d.score >= 70).count();

    info!(
        "Assessment complete: overall {} across {} dimensions ({} above target)",
        overall,
        dimensions.len(),
        above_target
    );

    QualityReport {
        overall_score: overall,
        rating: QualityReport::rating_from_score(overall),
        dimensions_analyzed: dimensions.len(),
        above_target,
        total_weight,
        dimensions,
        recommendations,
    }
}
