//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - README files
//! - Pull request comments
//! - Documentation

use crate::models::QualityReport;
use anyhow::Result;
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &QualityReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');

    md.push_str(&render_summary(report));
    md.push('\n');

    md.push_str(&render_dimensions(report));
    md.push('\n');

    md.push_str(&render_recommendations(report));
    md.push('\n');

    md.push_str(&render_methodology());

    Ok(md)
}

fn render_header(report: &QualityReport) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"# Software Quality Report

**Overall Score: {}/100** | **Rating: {}**

Generated: {}
Standard: ISO/IEC 15939 Software Measurement Process
Quality Model: ISO/IEC 25010 System and Software Quality Models
"#,
        report.overall_score, report.rating, timestamp
    )
}

fn render_summary(report: &QualityReport) -> String {
    format!(
        r#"## Summary

| Metric | Value |
|--------|-------|
| **Overall Score** | {}/100 |
| **Rating** | {} |
| **Dimensions Analyzed** | {} |
| **Above Target (>= 70)** | {} |
| **Total Assigned Weight** | {}% |
"#,
        report.overall_score,
        report.rating,
        report.dimensions_analyzed,
        report.above_target,
        report.total_weight
    )
}

fn render_dimensions(report: &QualityReport) -> String {
    let mut md = String::from("## Dimension Analysis\n\n");

    for dim in &report.dimensions {
        md.push_str(&format!(
            "### {} — {}%\n\nWeight: {}% | Contribution: {} points\n\n",
            dim.title,
            dim.score,
            dim.weight,
            dim.contribution()
        ));

        if dim.metrics.is_empty() {
            md.push_str("_No metrics data available._\n\n");
            continue;
        }

        md.push_str("| Metric | Base Measure | Target | Score | Status |\n");
        md.push_str("|--------|--------------|--------|-------|--------|\n");
        for m in &dim.metrics {
            md.push_str(&format!(
                "| {} | {} {} | {} {} | {}% | {} |\n",
                m.name,
                m.base_measure,
                m.unit,
                m.target,
                m.unit,
                m.derived_measure.round(),
                m.status
            ));
        }
        md.push('\n');
    }

    md
}

fn render_recommendations(report: &QualityReport) -> String {
    let mut md = String::from("## Recommendations\n\n");

    for rec in &report.recommendations {
        md.push_str(&format!("- **{}** — {}\n", rec.title, rec.message));
    }

    md
}

fn render_methodology() -> String {
    r#"## Measurement Methodology

ISO/IEC 15939 measurement process:

- **Base Measures**: raw metric values collected from the system (e.g., response time in ms, CPU usage in %)
- **Derived Measures**: normalized scores (0-100) calculated using target-based transformation
- **Indicators**: dimension-level quality scores (arithmetic mean of derived measures)
- **Information Product**: overall quality score (weighted average of indicators)

Scoring algorithm: for "lower is better" metrics (e.g., response time), values at or below
target receive 100%. For "higher is better" metrics (e.g., uptime), values at or above
target receive 100%. Intermediate values are scored linearly.
"#
    .to_string()
}
