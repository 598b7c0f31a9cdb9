//! CLI command definitions and handlers

pub(crate) mod assess;
mod catalog;
mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Qualimeter - software quality assessment
///
/// Scores ISO/IEC 25010 quality dimensions from measured metrics.
#[derive(Parser, Debug)]
#[command(name = "qualimeter")]
#[command(
    version,
    about = "Software quality assessment — score ISO/IEC 25010 dimensions from measured metrics and export reports",
    long_about = "Qualimeter reads an assessment file describing which quality dimensions to \
evaluate, their relative weights, and raw measurement values, then computes normalized \
metric scores, per-dimension indicators, and a weighted overall quality score with \
recommendations, following the ISO/IEC 15939 measurement process.\n\n\
Run without a subcommand to assess ./assessment.toml:\n  \
qualimeter",
    after_help = "\
Examples:
  qualimeter                                   Assess ./assessment.toml
  qualimeter assess my-system.toml             Assess a specific file
  qualimeter assess --format json              JSON output for scripting
  qualimeter assess --format html -o out.html  Standalone HTML report
  qualimeter init --case iot                   Scaffold an assessment for an IoT system
  qualimeter catalog perf                      Show the Performance Efficiency metrics

Documentation: https://github.com/qualimeter/qualimeter"
)]
pub struct Cli {
    /// Path to the assessment file (default: ./assessment.toml)
    #[arg(global = true, default_value = "assessment.toml")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold an assessment file, optionally from a case-study preset
    Init {
        /// Case-study preset: iot, health, mobile
        #[arg(long, value_parser = ["iot", "health", "mobile"])]
        case: Option<String>,

        /// Overwrite an existing assessment file
        #[arg(long)]
        force: bool,
    },

    /// Run the assessment and report scores and recommendations
    #[command(after_help = "\
Examples:
  qualimeter assess                            Assess ./assessment.toml
  qualimeter assess my-system.toml             Assess a specific file
  qualimeter assess --format json              JSON output for scripting
  qualimeter assess --format html              Write quality_report_<date>.html
  qualimeter assess --format md -o report.md   Markdown report to a chosen path")]
    Assess {
        /// Output format: text, json, html, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "html", "markdown", "md"])]
        format: String,

        /// Output file path (default: stdout, or auto-named for html/markdown)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print the metric catalog, optionally for one dimension
    Catalog {
        /// Dimension id: perf, rel, comp, sec, usab, port
        dimension: Option<String>,
    },
}

/// Dispatch a parsed CLI invocation
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { case, force }) => init::run(&cli.file, case.as_deref(), force),

        Some(Commands::Assess { format, output }) => {
            assess::run(&cli.file, &format, output.as_deref())
        }

        Some(Commands::Catalog { dimension }) => catalog::run(dimension.as_deref()),

        // No subcommand: assess the default file as terminal text
        None => assess::run(&cli.file, "text", None),
    }
}
