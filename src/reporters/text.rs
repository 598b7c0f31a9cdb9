//! Text (terminal) reporter with colors and formatting

use crate::models::{QualityReport, Tier};
use anyhow::Result;

/// Score colors (ANSI escape codes)
fn score_color(score: i64) -> &'static str {
    if score >= 90 {
        "\x1b[32m" // Green
    } else if score >= 70 {
        "\x1b[34m" // Blue
    } else if score >= 50 {
        "\x1b[33m" // Yellow
    } else {
        "\x1b[31m" // Red
    }
}

/// Tier colors
fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::Critical => "\x1b[31m",  // Red
        Tier::Optimize => "\x1b[33m",  // Yellow
        Tier::Excellent => "\x1b[32m", // Green
        Tier::Stable => "\x1b[34m",    // Blue
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render report as formatted terminal output
pub fn render(report: &QualityReport) -> Result<String> {
    let mut out = String::new();

    // Header
    let overall_c = score_color(report.overall_score);
    out.push_str(&format!("\n{BOLD}Qualimeter Assessment{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Overall: {overall_c}{BOLD}{}/100{RESET} ({})  ",
        report.overall_score, report.rating
    ));
    out.push_str(&format!(
        "Dimensions: {}  Above target: {}  Total weight: {}%\n\n",
        report.dimensions_analyzed, report.above_target, report.total_weight
    ));

    // Dimension indicators
    out.push_str(&format!("{BOLD}DIMENSIONS{RESET}\n"));
    for dim in &report.dimensions {
        let c = score_color(dim.score);
        out.push_str(&format!(
            "  {c}{:>3}{RESET}  {:<26} {DIM}weight {:>3}%  contributes {:>3} points{RESET}\n",
            dim.score,
            dim.title,
            dim.weight,
            dim.contribution()
        ));

        for m in &dim.metrics {
            out.push_str(&format!(
                "       {DIM}{:<24} {} {} (target {} {})  {:>4.0}%  {}{RESET}\n",
                m.name, m.base_measure, m.unit, m.target, m.unit, m.derived_measure, m.status
            ));
        }
    }
    out.push('\n');

    // Recommendations
    out.push_str(&format!("{BOLD}RECOMMENDATIONS{RESET}\n"));
    for rec in &report.recommendations {
        let c = tier_color(rec.tier);
        out.push_str(&format!("  {c}{BOLD}{}{RESET}\n", rec.title));
        out.push_str(&format!("    {DIM}{}{RESET}\n", rec.message));
    }

    Ok(out)
}
