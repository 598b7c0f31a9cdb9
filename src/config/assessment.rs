//! Assessment input loading
//!
//! An assessment file supplies the three inputs of a scoring pass: the
//! selected dimensions, a weight per dimension, and raw measurement values.
//! TOML and JSON are supported, chosen by file extension:
//!
//! ```toml
//! # assessment.toml
//! dimensions = ["perf", "rel", "sec"]
//!
//! [weights]
//! perf = 30
//! rel = 30
//! sec = 40
//!
//! [measurements.perf]
//! avg_resp = 250
//! cpu = "65"        # numeric strings are accepted
//!
//! [measurements.rel]
//! uptime = 99.95
//! ```
//!
//! Measurement values are parsed to numbers exactly once, here. Absent,
//! empty-string, or unparseable entries are logged and treated as "not
//! measured" -- they never reach the engine as NaN or zero.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::Catalog;

/// Errors raised while loading an assessment file
#[derive(Error, Debug)]
pub enum AssessmentError {
    #[error("Failed to read assessment file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported assessment format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Structured measurement store: dimension id -> metric id -> value
///
/// BTreeMaps keep iteration deterministic so identical inputs always produce
/// identical reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    values: BTreeMap<String, BTreeMap<String, f64>>,
}

impl Measurements {
    pub fn get(&self, dimension: &str, metric: &str) -> Option<f64> {
        self.values.get(dimension)?.get(metric).copied()
    }

    pub fn insert(&mut self, dimension: &str, metric: &str, value: f64) {
        self.values
            .entry(dimension.to_string())
            .or_default()
            .insert(metric.to_string(), value);
    }

    pub fn len(&self) -> usize {
        self.values.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|m| m.is_empty())
    }
}

/// A fully loaded, validated assessment
#[derive(Debug, Clone)]
pub struct Assessment {
    /// Selected dimension ids, input order preserved
    pub dimensions: Vec<String>,
    /// Assigned weight (0-100) per dimension
    pub weights: BTreeMap<String, u32>,
    pub measurements: Measurements,
}

/// Raw measurement value as it appears in the file: number or string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Parse to a finite number; anything else means "not measured"
    fn parse(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) if n.is_finite() => Some(*n),
            RawValue::Number(_) => None,
            RawValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }
}

/// On-disk shape of an assessment file
#[derive(Debug, Clone, Deserialize)]
struct AssessmentFile {
    #[serde(default)]
    dimensions: Vec<String>,
    #[serde(default)]
    weights: BTreeMap<String, u32>,
    #[serde(default)]
    measurements: BTreeMap<String, BTreeMap<String, RawValue>>,
}

/// Load and validate an assessment file.
///
/// Validation is advisory: problems are logged as warnings and the input is
/// degraded gracefully (unknown dimensions dropped, bad values excluded).
pub fn load_assessment(path: &Path, catalog: &Catalog) -> Result<Assessment, AssessmentError> {
    let content = std::fs::read_to_string(path).map_err(|source| AssessmentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let file: AssessmentFile = match ext.as_str() {
        "toml" | "" => toml::from_str(&content).map_err(|source| AssessmentError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
        "json" => serde_json::from_str(&content).map_err(|source| AssessmentError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        other => return Err(AssessmentError::UnsupportedFormat(other.to_string())),
    };

    Ok(validate(file, catalog))
}

fn validate(file: AssessmentFile, catalog: &Catalog) -> Assessment {
    let mut dimensions = Vec::new();
    for id in file.dimensions {
        if !catalog.contains(&id) {
            warn!("Unknown dimension '{}' selected; skipping", id);
            continue;
        }
        if dimensions.contains(&id) {
            warn!("Dimension '{}' selected twice; keeping first occurrence", id);
            continue;
        }
        dimensions.push(id);
    }

    for (id, weight) in &file.weights {
        if !dimensions.contains(id) {
            warn!("Weight assigned to unselected dimension '{}'", id);
        }
        if *weight > 100 {
            warn!("Weight {} for '{}' exceeds 100", weight, id);
        }
    }

    let assigned: u32 = dimensions
        .iter()
        .filter_map(|id| file.weights.get(id))
        .sum();
    if assigned != 100 {
        warn!(
            "Assigned weights sum to {} (expected 100); scores will be normalized by the actual total",
            assigned
        );
    }

    let mut measurements = Measurements::default();
    for (dim_id, metrics) in &file.measurements {
        for (metric_id, raw) in metrics {
            match raw.parse() {
                Some(value) => measurements.insert(dim_id, metric_id, value),
                None => warn!(
                    "Measurement {}.{} is empty or not numeric; treating as not measured",
                    dim_id, metric_id
                ),
            }
        }
    }

    debug!(
        "Loaded assessment: {} dimensions, {} measurements",
        dimensions.len(),
        measurements.len()
    );

    Assessment {
        dimensions,
        weights: file.weights,
        measurements,
    }
}
