//! The standard metric catalog
//!
//! Read-only reference data: six ISO/IEC 25010 quality dimensions, each
//! owning a set of metric definitions with unit, valid range, target value,
//! and directionality. The catalog is passed into the scoring engine as a
//! value so tests can substitute a reduced or custom one.

use serde::{Deserialize, Serialize};

/// Unit string that marks a Likert-scale (1-5) metric
pub const LIKERT_UNIT: &str = "1-5";

/// Definition of one measurable metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricDef {
    /// Short stable identifier, unique within a dimension
    pub id: String,
    pub name: String,
    pub unit: String,
    /// Valid range, inclusive. `max` anchors the worst case for
    /// lower-is-better metrics, `min` for higher-is-better.
    pub min: f64,
    pub max: f64,
    /// Value at which the metric is fully satisfied
    pub target: f64,
    pub lower_better: bool,
    /// ISO 25010 subcharacteristic this metric measures
    pub subcharacteristic: String,
}

impl MetricDef {
    /// Likert-scale metrics get a distinct, uncapped normalization
    pub fn is_likert(&self) -> bool {
        self.unit == LIKERT_UNIT
    }
}

/// One quality dimension and its metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionDef {
    /// Short stable code (`perf`, `rel`, ...)
    pub id: String,
    pub title: String,
    pub metrics: Vec<MetricDef>,
}

impl DimensionDef {
    pub fn metric(&self, id: &str) -> Option<&MetricDef> {
        self.metrics.iter().find(|m| m.id == id)
    }
}

/// The full metric catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    dimensions: Vec<DimensionDef>,
}

impl Catalog {
    pub fn new(dimensions: Vec<DimensionDef>) -> Self {
        Self { dimensions }
    }

    pub fn dimensions(&self) -> &[DimensionDef] {
        &self.dimensions
    }

    pub fn dimension(&self, id: &str) -> Option<&DimensionDef> {
        self.dimensions.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.dimension(id).is_some()
    }

    /// The standard ISO/IEC 25010 catalog
    pub fn standard() -> Self {
        Self::new(vec![
            DimensionDef {
                id: "perf".into(),
                title: "Performance Efficiency".into(),
                metrics: vec![
                    metric("avg_resp", "Average Response Time", "ms", 0.0, 10_000.0, 200.0, true, "Time Behaviour"),
                    metric("peak_resp", "Peak Response Time", "ms", 0.0, 10_000.0, 500.0, true, "Time Behaviour"),
                    metric("latency", "Latency", "ms", 0.0, 10_000.0, 100.0, true, "Time Behaviour"),
                    metric("cpu", "CPU Usage", "%", 0.0, 100.0, 70.0, true, "Resource Utilization"),
                    metric("mem", "Memory Usage", "MB", 0.0, 100_000.0, 5000.0, true, "Resource Utilization"),
                    metric("net", "Network Bandwidth", "Mbps", 0.0, 10_000.0, 1000.0, true, "Resource Utilization"),
                    metric("max_users", "Max Concurrent Users", "count", 0.0, 1_000_000.0, 10_000.0, false, "Capacity"),
                    metric("throughput", "Throughput", "req/sec", 0.0, 100_000.0, 1000.0, false, "Capacity"),
                ],
            },
            DimensionDef {
                id: "rel".into(),
                title: "Reliability".into(),
                metrics: vec![
                    metric("defect_density", "Defect Density", "defects/KLOC", 0.0, 100.0, 5.0, true, "Maturity"),
                    metric("uptime", "System Uptime", "%", 0.0, 100.0, 99.9, false, "Availability"),
                    metric("downtime", "Mean Downtime", "hours", 0.0, 744.0, 1.0, true, "Availability"),
                    metric("failover", "Failover Time", "ms", 0.0, 60_000.0, 5000.0, true, "Fault Tolerance"),
                    metric("recovery_rate", "Recovery Success Rate", "%", 0.0, 100.0, 95.0, false, "Fault Tolerance"),
                    metric("mttr", "MTTR", "minutes", 0.0, 10_000.0, 60.0, true, "Recoverability"),
                ],
            },
            DimensionDef {
                id: "comp".into(),
                title: "Compatibility".into(),
                metrics: vec![
                    metric("conflicts", "Resource Conflicts", "count/month", 0.0, 10_000.0, 10.0, true, "Co-existence"),
                    metric("exchange_rate", "Data Exchange Success", "%", 0.0, 100.0, 99.0, false, "Interoperability"),
                    metric("api_error", "API Error Rate", "%", 0.0, 100.0, 1.0, true, "Interoperability"),
                ],
            },
            DimensionDef {
                id: "sec".into(),
                title: "Security".into(),
                metrics: vec![
                    metric("blocked_access", "Blocked Access Attempts", "%", 0.0, 100.0, 99.0, false, "Confidentiality"),
                    metric("corruption", "Data Corruption", "count/month", 0.0, 10_000.0, 0.0, true, "Integrity"),
                    metric("logged_tx", "Transaction Logging", "%", 0.0, 100.0, 100.0, false, "Non-repudiation"),
                    metric("audit_cov", "Audit Coverage", "%", 0.0, 100.0, 95.0, false, "Accountability"),
                    metric("auth_success", "Auth Success Rate", "%", 0.0, 100.0, 99.0, false, "Authenticity"),
                    metric("auth_fail", "Auth Failure Rate", "%", 0.0, 100.0, 1.0, true, "Authenticity"),
                ],
            },
            DimensionDef {
                id: "usab".into(),
                title: "Usability".into(),
                metrics: vec![
                    metric("discoverability", "Task Discoverability", "%", 0.0, 100.0, 80.0, false, "Appropriateness Recognizability"),
                    metric("learn_time", "Learning Time", "minutes", 0.0, 1000.0, 30.0, true, "Learnability"),
                    metric("completion_rate", "Task Completion", "%", 0.0, 100.0, 95.0, false, "Operability"),
                    metric("error_freq", "User Error Frequency", "errors/hour", 0.0, 1000.0, 5.0, true, "User Error Protection"),
                    metric("satisfaction", "UI Satisfaction", LIKERT_UNIT, 1.0, 5.0, 4.0, false, "UI Aesthetics"),
                    metric("wcag", "WCAG Compliance", "%", 0.0, 100.0, 90.0, false, "Accessibility"),
                ],
            },
            // Portability has no standard metrics; it still participates in
            // weighting and scores 0 until measurements exist for it.
            DimensionDef {
                id: "port".into(),
                title: "Portability".into(),
                metrics: vec![],
            },
        ])
    }
}

fn metric(
    id: &str,
    name: &str,
    unit: &str,
    min: f64,
    max: f64,
    target: f64,
    lower_better: bool,
    subcharacteristic: &str,
) -> MetricDef {
    MetricDef {
        id: id.into(),
        name: name.into(),
        unit: unit.into(),
        min,
        max,
        target,
        lower_better,
        subcharacteristic: subcharacteristic.into(),
    }
}
