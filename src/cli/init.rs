//! Init command - scaffold an assessment file

use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use std::str::FromStr;

use crate::catalog::{Catalog, DimensionDef};
use crate::config::CasePreset;

/// Run the init command
pub fn run(file: &Path, case: Option<&str>, force: bool) -> Result<()> {
    if file.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            file.display()
        );
    }

    let preset = case.map(CasePreset::from_str).transpose()?;
    let catalog = Catalog::standard();
    let content = template(&catalog, preset);

    std::fs::write(file, content)
        .with_context(|| format!("Failed to write {}", file.display()))?;

    match preset {
        Some(p) => println!(
            "{} Created {} from the {} preset ({})",
            style("✓").green(),
            style(file.display()).cyan(),
            style(p.title()).bold(),
            p.description()
        ),
        None => println!(
            "{} Created {} with all dimensions selected",
            style("✓").green(),
            style(file.display()).cyan()
        ),
    }
    println!(
        "  Fill in measured values, then run {}",
        style("qualimeter assess").bold()
    );

    Ok(())
}

/// Dimension ids and weights for the template
fn selection(catalog: &Catalog, preset: Option<CasePreset>) -> Vec<(String, u32)> {
    match preset {
        Some(p) => p
            .default_weights()
            .iter()
            .map(|(id, w)| (id.to_string(), *w))
            .collect(),
        None => catalog
            .dimensions()
            .iter()
            .map(|d| (d.id.clone(), 0))
            .collect(),
    }
}

fn template(catalog: &Catalog, preset: Option<CasePreset>) -> String {
    let selected = selection(catalog, preset);

    let mut out = String::from(
        "# Qualimeter assessment\n\
         # Fill in measured values below, then run `qualimeter assess`.\n\
         # Values may be numbers or numeric strings; leave a metric commented\n\
         # out (or set it to \"\") if it was not measured.\n\n",
    );

    let dims: Vec<String> = selected.iter().map(|(id, _)| format!("\"{id}\"")).collect();
    out.push_str(&format!("dimensions = [{}]\n\n", dims.join(", ")));

    out.push_str("# Relative importance per dimension (0-100); weights should sum to 100.\n");
    out.push_str("[weights]\n");
    for (id, weight) in &selected {
        out.push_str(&format!("{id} = {weight}\n"));
    }
    out.push('\n');

    for (id, _) in &selected {
        let dim = catalog
            .dimension(id)
            .expect("selection only contains catalog dimensions");
        out.push_str(&measurement_section(dim));
    }

    out
}

fn measurement_section(dim: &DimensionDef) -> String {
    if dim.metrics.is_empty() {
        return format!("# {} has no standard metrics.\n\n", dim.title);
    }

    let mut out = format!("# {}\n[measurements.{}]\n", dim.title, dim.id);
    for m in &dim.metrics {
        let direction = if m.lower_better {
            "lower is better"
        } else {
            "higher is better"
        };
        out.push_str(&format!(
            "# {} = {}    # {} ({}), {}, target {}\n",
            m.id, m.target, m.name, m.unit, direction, m.target
        ));
    }
    out.push('\n');
    out
}
