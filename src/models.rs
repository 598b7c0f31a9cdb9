//! Core data models for Qualimeter
//!
//! These models carry the results of an assessment pass: per-metric
//! derived measures, per-dimension indicators, recommendations, and the
//! overall quality report consumed by the reporters.

use serde::{Deserialize, Serialize};

/// Qualitative status of a single measured metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Excellent,
    Good,
    NeedsImprovement,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Excellent => write!(f, "Excellent"),
            Status::Good => write!(f, "Good"),
            Status::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

impl Status {
    /// CSS class suffix used by the HTML reporter
    pub fn css_class(&self) -> &'static str {
        match self {
            Status::Excellent => "excellent",
            Status::Good => "good",
            Status::NeedsImprovement => "needs",
        }
    }
}

/// One measured metric: base measure, derived measure, and status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricDetail {
    pub id: String,
    pub name: String,
    pub unit: String,
    /// Raw input value as supplied in the assessment
    pub base_measure: f64,
    /// Normalized 0-100 score (uncapped for Likert-scale metrics)
    pub derived_measure: f64,
    pub target: f64,
    pub status: Status,
}

/// Indicator for one quality dimension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionResult {
    pub id: String,
    pub title: String,
    /// Rounded mean of the measured metrics' derived measures; 0 if none
    pub score: i64,
    /// Assigned weight (0-100)
    pub weight: u32,
    /// Per-metric details in catalog order, measured metrics only
    pub metrics: Vec<MetricDetail>,
}

impl DimensionResult {
    /// Points this dimension contributes to the overall score
    pub fn contribution(&self) -> i64 {
        (self.score as f64 * self.weight as f64 / 100.0).round() as i64
    }
}

/// Recommendation tier for a dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Critical,
    Optimize,
    Excellent,
    /// Fallback when every dimension lands in the 70-89 band
    Stable,
}

/// A generated recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// None for the stable-performance fallback
    pub dimension: Option<String>,
    pub tier: Tier,
    pub title: String,
    pub message: String,
}

/// Complete result of an assessment pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Weighted overall quality indicator (0-100)
    pub overall_score: i64,
    /// Qualitative label for the overall score
    pub rating: String,
    pub dimensions_analyzed: usize,
    /// Dimensions scoring at or above 70
    pub above_target: usize,
    /// Sum of assigned weights (not required to be 100)
    pub total_weight: u64,
    pub dimensions: Vec<DimensionResult>,
    pub recommendations: Vec<Recommendation>,
}

impl QualityReport {
    /// Qualitative label for a score
    pub fn rating_from_score(score: i64) -> String {
        match score {
            s if s >= 90 => "Excellent".to_string(),
            s if s >= 70 => "Good".to_string(),
            s if s >= 50 => "Acceptable".to_string(),
            _ => "Needs Improvement".to_string(),
        }
    }
}
