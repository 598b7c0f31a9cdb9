//! Catalog command - print the metric catalog

use anyhow::Result;
use console::style;

use crate::catalog::{Catalog, DimensionDef};

/// Run the catalog command
pub fn run(dimension: Option<&str>) -> Result<()> {
    let catalog = Catalog::standard();

    match dimension {
        Some(id) => {
            let Some(dim) = catalog.dimension(id) else {
                let valid: Vec<&str> =
                    catalog.dimensions().iter().map(|d| d.id.as_str()).collect();
                anyhow::bail!(
                    "Unknown dimension '{}'. Valid dimensions: {}",
                    id,
                    valid.join(", ")
                );
            };
            print_dimension(dim);
        }
        None => {
            for dim in catalog.dimensions() {
                print_dimension(dim);
            }
        }
    }

    Ok(())
}

fn print_dimension(dim: &DimensionDef) {
    println!(
        "\n{} {}",
        style(&dim.id).cyan().bold(),
        style(&dim.title).bold()
    );

    if dim.metrics.is_empty() {
        println!("  {}", style("no standard metrics").dim());
        return;
    }

    let mut last_subchar = "";
    for m in &dim.metrics {
        if m.subcharacteristic != last_subchar {
            println!("  {}", style(&m.subcharacteristic).underlined());
            last_subchar = &m.subcharacteristic;
        }
        let direction = if m.lower_better { "↓" } else { "↑" };
        println!(
            "    {:<16} {:<26} {:<12} target {:<8} {} range {}..{}",
            m.id,
            m.name,
            format!("[{}]", m.unit),
            m.target,
            direction,
            m.min,
            m.max
        );
    }
}
