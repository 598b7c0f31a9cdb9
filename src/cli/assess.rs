//! Assess command - run the scoring pipeline and report the results

use anyhow::{Context, Result};
use chrono::Local;
use console::style;
use std::path::Path;

use crate::catalog::Catalog;
use crate::config;
use crate::reporters;
use crate::scoring;

/// Run the assess command
pub fn run(file: &Path, format: &str, output: Option<&Path>) -> Result<()> {
    let catalog = Catalog::standard();

    let assessment = config::load_assessment(file, &catalog)
        .with_context(|| format!("Could not load assessment from {}", file.display()))?;

    if assessment.dimensions.is_empty() {
        anyhow::bail!(
            "No known dimensions selected in {}. Run `qualimeter init` to scaffold one, \
             or `qualimeter catalog` to list valid dimension ids.",
            file.display()
        );
    }

    let report = scoring::analyze(&assessment, &catalog);
    let rendered = reporters::report(&report, format)?;

    format_and_output(&rendered, format, output)?;

    Ok(())
}

/// Write the rendered report to a file or stdout.
///
/// html/markdown default to a date-stamped file in the current directory so
/// repeated runs on the same day overwrite the same report.
fn format_and_output(rendered: &str, format: &str, output: Option<&Path>) -> Result<()> {
    let write_to_file = output.is_some() || matches!(format, "html" | "markdown" | "md");

    if write_to_file {
        let out_path = if let Some(p) = output {
            p.to_path_buf()
        } else {
            let ext = match format {
                "html" => "html",
                "markdown" | "md" => "md",
                "json" => "json",
                _ => "txt",
            };
            let date = Local::now().format("%Y-%m-%d");
            std::path::PathBuf::from(format!("quality_report_{date}.{ext}"))
        };

        std::fs::write(&out_path, rendered)
            .with_context(|| format!("Failed to write report to {}", out_path.display()))?;
        println!(
            "{} Report written to {}",
            style("✓").green(),
            style(out_path.display()).cyan()
        );
    } else {
        println!("{}", rendered);
    }

    Ok(())
}
