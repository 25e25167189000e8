//! Remove command - delete a plugin entry from the catalog

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::catalog::Catalog;

pub fn run(name: String, catalog_path: PathBuf) -> Result<()> {
    let mut catalog = Catalog::load(&catalog_path)?;
    catalog.remove_plugin(&name)?;
    catalog.save(&catalog_path)?;
    println!("{} Removed plugin '{name}' from catalog", "✓".green());
    Ok(())
}
