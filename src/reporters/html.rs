//! HTML reporter with embedded styles
//!
//! Generates a standalone HTML report that can be viewed in any browser and
//! converted to PDF via the browser's print dialog. Includes:
//! - Overall quality score with qualitative rating
//! - Summary counts (dimensions analyzed, above target, total weight)
//! - One card per dimension with its metric table
//! - Recommendations and the measurement methodology

use crate::models::{QualityReport, Tier};
use anyhow::Result;
use chrono::Local;

/// Render report as standalone HTML
pub fn render(report: &QualityReport) -> Result<String> {
    let mut html = String::new();

    html.push_str(&render_head(report));

    html.push_str("<body>\n");

    html.push_str(&render_header());

    html.push_str(&render_overall(report));

    html.push_str(&render_dimensions(report));

    html.push_str(&render_recommendations(report));

    html.push_str(&render_methodology());

    html.push_str(&render_footer());

    html.push_str("</body>\n</html>");

    Ok(html)
}

fn render_head(report: &QualityReport) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Software Quality Report - {}</title>
    <style>
{CSS}
    </style>
</head>
"#,
        report.rating
    )
}

fn render_header() -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<div class="header">
    <h1>Software Quality Report</h1>
    <div class="subtitle">
        Generated: {}<br>
        Standard: ISO/IEC 15939:2017 - Software Measurement Process<br>
        Quality Model: ISO/IEC 25010 - System and Software Quality Models
    </div>
</div>
"#,
        timestamp
    )
}

fn render_overall(report: &QualityReport) -> String {
    format!(
        r#"<div class="section">
    <div class="overall-score">
        <div class="score">{}</div>
        <div class="label">Overall Quality Score / 100</div>
        <div class="rating">{}</div>
    </div>

    <div class="info-grid">
        <div class="info-box">
            <div class="value">{}</div>
            <div class="label">Dimensions Analyzed</div>
        </div>
        <div class="info-box">
            <div class="value">{}</div>
            <div class="label">Above Target (&ge;70)</div>
        </div>
        <div class="info-box">
            <div class="value">{}%</div>
            <div class="label">Total Weight</div>
        </div>
    </div>
</div>
"#,
        report.overall_score,
        html_escape(&report.rating).to_uppercase(),
        report.dimensions_analyzed,
        report.above_target,
        report.total_weight
    )
}

fn render_dimensions(report: &QualityReport) -> String {
    let mut html = String::from(
        "<div class=\"section\">\n    <div class=\"section-title\">Dimension Analysis</div>\n",
    );

    for dim in &report.dimensions {
        html.push_str(&format!(
            r#"    <div class="dimension-card">
        <div class="dimension-header">
            <div class="dimension-name">{}</div>
            <div class="dimension-score">{}%</div>
        </div>
        <div class="dimension-meta">Weight: {}% | Contribution: {} points</div>
"#,
            html_escape(&dim.title),
            dim.score,
            dim.weight,
            dim.contribution()
        ));

        if dim.metrics.is_empty() {
            html.push_str("        <p class=\"no-data\">No metrics data available</p>\n");
        } else {
            html.push_str(
                r#"        <table class="metric-table">
            <thead>
                <tr>
                    <th>Metric</th>
                    <th>Base Measure</th>
                    <th>Target</th>
                    <th>Score</th>
                    <th>Status</th>
                </tr>
            </thead>
            <tbody>
"#,
            );
            for m in &dim.metrics {
                html.push_str(&format!(
                    r#"                <tr>
                    <td>{}</td>
                    <td>{} {}</td>
                    <td>{} {}</td>
                    <td>{}%</td>
                    <td class="status-{}">{}</td>
                </tr>
"#,
                    html_escape(&m.name),
                    m.base_measure,
                    html_escape(&m.unit),
                    m.target,
                    html_escape(&m.unit),
                    m.derived_measure.round(),
                    m.status.css_class(),
                    m.status
                ));
            }
            html.push_str("            </tbody>\n        </table>\n");
        }

        html.push_str("    </div>\n");
    }

    html.push_str("</div>\n");
    html
}

fn render_recommendations(report: &QualityReport) -> String {
    let mut html = String::from(
        "<div class=\"section\">\n    <div class=\"section-title\">Recommendations</div>\n",
    );

    for rec in &report.recommendations {
        let tier_class = match rec.tier {
            Tier::Critical => "critical",
            Tier::Optimize => "warning",
            Tier::Excellent => "success",
            Tier::Stable => "stable",
        };
        html.push_str(&format!(
            r#"    <div class="recommendation {}">
        <div class="recommendation-title">{}</div>
        <div class="recommendation-text">{}</div>
    </div>
"#,
            tier_class,
            html_escape(&rec.title),
            html_escape(&rec.message)
        ));
    }

    html.push_str("</div>\n");
    html
}

fn render_methodology() -> String {
    r#"<div class="section">
    <div class="section-title">Measurement Methodology</div>
    <div class="methodology">
        <p><strong>ISO/IEC 15939 Measurement Process:</strong></p>
        <ul>
            <li><strong>Base Measures:</strong> Raw metric values collected from the system (e.g., response time in ms, CPU usage in %)</li>
            <li><strong>Derived Measures:</strong> Normalized scores (0-100) calculated using target-based transformation</li>
            <li><strong>Indicators:</strong> Dimension-level quality scores (arithmetic mean of derived measures)</li>
            <li><strong>Information Product:</strong> Overall quality score (weighted average of indicators)</li>
        </ul>
        <p><strong>Scoring Algorithm:</strong> For "lower is better" metrics (e.g., response time), values at or below target receive 100%. For "higher is better" metrics (e.g., uptime), values at or above target receive 100%. Intermediate values are scored linearly.</p>
    </div>
</div>
"#
    .to_string()
}

fn render_footer() -> String {
    r#"<div class="footer">
    <p>This report was generated using the ISO/IEC 15939 Software Measurement Process standard.</p>
    <p>Quality model based on ISO/IEC 25010 System and Software Quality Models.</p>
    <p class="brand">Generated by Qualimeter</p>
</div>
"#
    .to_string()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Embedded CSS; no external asset references so the file stands alone
const CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: 'Segoe UI', Arial, sans-serif;
    line-height: 1.6;
    color: #1a1a1a;
    padding: 40px;
    background: #ffffff;
}

.header {
    text-align: center;
    border-bottom: 4px solid #4f46e5;
    padding-bottom: 20px;
    margin-bottom: 30px;
}

.header h1 {
    color: #4f46e5;
    font-size: 32px;
    margin-bottom: 10px;
}

.header .subtitle {
    color: #666;
    font-size: 14px;
}

.section {
    margin-bottom: 30px;
    page-break-inside: avoid;
}

.section-title {
    background: linear-gradient(135deg, #4f46e5, #8b5cf6);
    color: white;
    padding: 12px 20px;
    font-size: 18px;
    font-weight: bold;
    margin-bottom: 15px;
    border-radius: 8px;
}

.overall-score {
    text-align: center;
    background: #f8f9fa;
    padding: 30px;
    border-radius: 12px;
    margin-bottom: 30px;
    border: 2px solid #4f46e5;
}

.overall-score .score {
    font-size: 72px;
    font-weight: bold;
    color: #4f46e5;
    line-height: 1;
}

.overall-score .label {
    color: #666;
    font-size: 16px;
    margin-top: 10px;
}

.overall-score .rating {
    margin-top: 15px;
    font-size: 18px;
    color: #4f46e5;
    font-weight: bold;
}

.info-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 15px;
    margin-bottom: 20px;
}

.info-box {
    background: white;
    padding: 15px;
    border-radius: 8px;
    border: 1px solid #e0e0e0;
    text-align: center;
}

.info-box .value {
    font-size: 28px;
    font-weight: bold;
    color: #4f46e5;
}

.info-box .label {
    font-size: 12px;
    color: #666;
    margin-top: 5px;
}

.dimension-card {
    background: #f8f9fa;
    border-left: 4px solid #4f46e5;
    padding: 20px;
    margin-bottom: 20px;
    border-radius: 8px;
}

.dimension-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 10px;
}

.dimension-name {
    font-size: 20px;
    font-weight: bold;
    color: #1a1a1a;
}

.dimension-score {
    font-size: 32px;
    font-weight: bold;
    color: #4f46e5;
}

.dimension-meta {
    color: #666;
    font-size: 14px;
    margin-bottom: 10px;
}

.metric-table {
    width: 100%;
    border-collapse: collapse;
    margin-top: 15px;
    background: white;
}

.metric-table th {
    background: #4f46e5;
    color: white;
    padding: 10px;
    text-align: left;
    font-size: 12px;
}

.metric-table td {
    padding: 10px;
    border-bottom: 1px solid #e0e0e0;
    font-size: 12px;
}

.status-excellent { color: #22c55e; font-weight: bold; }
.status-good { color: #3b82f6; font-weight: bold; }
.status-needs { color: #ef4444; font-weight: bold; }

.no-data { color: #999; }

.recommendation {
    background: white;
    border-left: 4px solid #3b82f6;
    padding: 15px;
    margin-bottom: 12px;
    border-radius: 4px;
}

.recommendation.critical { border-left-color: #ef4444; }
.recommendation.warning { border-left-color: #f59e0b; }
.recommendation.success { border-left-color: #22c55e; }
.recommendation.stable { border-left-color: #3b82f6; }

.recommendation-title {
    font-weight: bold;
    margin-bottom: 5px;
    font-size: 14px;
}

.recommendation-text {
    color: #666;
    font-size: 13px;
}

.methodology {
    background: #f8f9fa;
    padding: 20px;
    border-radius: 8px;
}

.methodology ul {
    margin: 15px 0 15px 20px;
    color: #666;
}

.methodology p { color: #444; }

.footer {
    margin-top: 50px;
    padding-top: 20px;
    border-top: 2px solid #e0e0e0;
    text-align: center;
    color: #666;
    font-size: 12px;
}

.footer .brand { margin-top: 10px; font-weight: bold; }

@media print {
    body { padding: 0; background: white; }
    .dimension-card { page-break-inside: avoid; }
    .recommendation { page-break-inside: avoid; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_html_is_standalone() {
        let html = render(&test_report()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        // No external asset references
        assert!(!html.contains("href=\"http"));
        assert!(!html.contains("src=\"http"));
    }

    #[test]
    fn test_html_contains_required_fields() {
        let html = render(&test_report()).unwrap();
        // Overall block and rating
        assert!(html.contains(">67<"));
        assert!(html.contains("ACCEPTABLE"));
        // Summary counts
        assert!(html.contains("Dimensions Analyzed"));
        assert!(html.contains("Total Weight"));
        // Dimension card with metric table
        assert!(html.contains("Performance Efficiency"));
        assert!(html.contains("Average Response Time"));
        assert!(html.contains("250 ms"));
        assert!(html.contains("status-needs"));
        // Recommendations and methodology
        assert!(html.contains("CRITICAL - Security"));
        assert!(html.contains("Measurement Methodology"));
        assert!(html.contains("ISO/IEC 15939"));
    }

    #[test]
    fn test_html_escapes_content() {
        let mut report = test_report();
        report.dimensions[0].title = "A <script> title".into();
        let html = render(&report).unwrap();
        assert!(html.contains("A &lt;script&gt; title"));
        assert!(!html.contains("A <script> title"));
    }
}
