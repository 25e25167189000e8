//! Add command - insert a new plugin entry into the catalog

use anyhow::Result;
use colored::Colorize;

use crate::catalog::{Catalog, NewPlugin};
use crate::cli::AddArgs;

pub fn run(args: AddArgs) -> Result<()> {
    let mut catalog = Catalog::load(&args.catalog)?;
    let name = args.name.clone();
    catalog.add_plugin(NewPlugin {
        name: args.name,
        description: args.description,
        version: args.version,
        category: args.category,
        agents: args.agents,
        commands: args.commands,
        skills: args.skills,
        keywords: args.keywords,
        license: args.license,
        strict: args.strict,
        author_name: args.author_name,
        author_url: args.author_url,
    })?;
    catalog.save(&args.catalog)?;
    println!("{} Added plugin '{name}' to catalog", "✓".green());
    Ok(())
}
