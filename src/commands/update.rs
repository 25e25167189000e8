//! Update command - edit fields of an existing plugin entry

use anyhow::Result;
use colored::Colorize;

use crate::catalog::{Catalog, PluginUpdate};
use crate::cli::UpdateArgs;

pub fn run(args: UpdateArgs) -> Result<()> {
    let mut catalog = Catalog::load(&args.catalog)?;
    catalog.update_plugin(
        &args.name,
        PluginUpdate {
            description: args.description,
            version: args.version,
            category: args.category,
            keywords: args.keywords,
            add_agent: args.add_agent,
            remove_agent: args.remove_agent,
            add_command: args.add_command,
            remove_command: args.remove_command,
            add_skill: args.add_skill,
            remove_skill: args.remove_skill,
        },
    )?;
    catalog.save(&args.catalog)?;
    println!("{} Updated plugin '{}' in catalog", "✓".green(), args.name);
    Ok(())
}
