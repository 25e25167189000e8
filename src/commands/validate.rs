//! Validate command - check the catalog against the plugin tree

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::catalog::Catalog;

pub fn run(catalog_path: PathBuf, root: PathBuf) -> Result<()> {
    let catalog = Catalog::load(&catalog_path)?;
    let report = catalog.validate(&root);

    if report.is_ok() {
        println!("{} Validation passed with no errors", "✓".green());
    } else {
        println!("{} Validation failed with errors:", "❌".red());
        for error in &report.errors {
            println!("  - {error}");
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}  Warnings:", "⚠️".yellow());
        for warning in &report.warnings {
            println!("  - {warning}");
        }
    }

    if !report.is_ok() {
        std::process::exit(1);
    }
    Ok(())
}
