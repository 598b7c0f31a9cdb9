//! Output reporters for Qualimeter assessment results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `html` - Standalone styled HTML report, print-to-PDF friendly
//! - `markdown` - GitHub-flavored Markdown

mod html;
mod json;
mod markdown;
mod text;

use crate::models::QualityReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, html, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render a quality report in the specified format
pub fn report(report: &QualityReport, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(report, fmt)
}

/// Render a quality report using an OutputFormat enum
pub fn report_with_format(report: &QualityReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Html => html::render(report),
        OutputFormat::Markdown => markdown::render(report),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Html => "html",
        OutputFormat::Markdown => "md",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Create a small QualityReport for reporter tests
    pub(crate) fn test_report() -> QualityReport {
        use crate::models::{
            DimensionResult, MetricDetail, Recommendation, Status, Tier,
        };

        let perf = DimensionResult {
            id: "perf".into(),
            title: "Performance Efficiency".into(),
            score: 82,
            weight: 60,
            metrics: vec![MetricDetail {
                id: "avg_resp".into(),
                name: "Average Response Time".into(),
                unit: "ms".into(),
                base_measure: 250.0,
                derived_measure: 99.5,
                target: 200.0,
                status: Status::Good,
            }],
        };

        let sec = DimensionResult {
            id: "sec".into(),
            title: "Security".into(),
            score: 45,
            weight: 40,
            metrics: vec![MetricDetail {
                id: "corruption".into(),
                name: "Data Corruption".into(),
                unit: "count/month".into(),
                base_measure: 12.0,
                derived_measure: 45.0,
                target: 0.0,
                status: Status::NeedsImprovement,
            }],
        };

        QualityReport {
            overall_score: 67,
            rating: "Acceptable".into(),
            dimensions_analyzed: 2,
            above_target: 1,
            total_weight: 100,
            dimensions: vec![perf, sec],
            recommendations: vec![Recommendation {
                dimension: Some("sec".into()),
                tier: Tier::Critical,
                title: "CRITICAL - Security".into(),
                message: "Score: 45%. Immediate action required.".into(),
            }],
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("html").unwrap(), OutputFormat::Html);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_every_format_renders() {
        let report = test_report();
        for fmt in [
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::Html,
            OutputFormat::Markdown,
        ] {
            let out = report_with_format(&report, fmt).unwrap();
            assert!(!out.is_empty(), "{fmt} produced empty output");
        }
    }

    #[test]
    fn test_file_extensions() {
        assert_eq!(file_extension(OutputFormat::Html), "html");
        assert_eq!(file_extension(OutputFormat::Markdown), "md");
    }
}
