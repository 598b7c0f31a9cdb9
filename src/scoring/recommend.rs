//! Rule-based recommendation generation
//!
//! Each dimension is tiered independently from its indicator. The bands are
//! evaluated in order, so a score of exactly 50 lands in Optimize and exactly
//! 90 in Excellent. Dimensions in [70,90) emit nothing; if every dimension
//! falls there, a single stable-performance message is emitted instead.

use crate::models::{DimensionResult, Recommendation, Tier};

pub fn recommend(dimensions: &[DimensionResult]) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    for dim in dimensions {
        if dim.score < 50 {
            recs.push(Recommendation {
                dimension: Some(dim.id.clone()),
                tier: Tier::Critical,
                title: format!("CRITICAL - {}", dim.title),
                message: format!(
                    "Score: {}%. Immediate action required. This dimension is significantly \
                     below acceptable threshold and poses risks to system quality.",
                    dim.score
                ),
            });
        } else if dim.score < 70 {
            recs.push(Recommendation {
                dimension: Some(dim.id.clone()),
                tier: Tier::Optimize,
                title: format!("OPTIMIZE - {}", dim.title),
                message: format!(
                    "Score: {}%. Improvement opportunity identified. Focus on key metrics \
                     to reach target performance level.",
                    dim.score
                ),
            });
        } else if dim.score >= 90 {
            recs.push(Recommendation {
                dimension: Some(dim.id.clone()),
                tier: Tier::Excellent,
                title: format!("EXCELLENT - {}", dim.title),
                message: format!(
                    "Score: {}%. Outstanding performance. Continue current practices and \
                     use as benchmark for other dimensions.",
                    dim.score
                ),
            });
        }
    }

    if recs.is_empty() {
        recs.push(Recommendation {
            dimension: None,
            tier: Tier::Stable,
            title: "Stable Performance".to_string(),
            message: "All dimensions are performing within acceptable ranges (70-89%). \
                      Continue monitoring and incremental improvements."
                .to_string(),
        });
    }

    recs
}
