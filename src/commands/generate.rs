//! Generate command - render the documentation set from templates

use anyhow::Result;
use colored::Colorize;

use crate::cli::GenerateArgs;
use crate::docs::Generator;

pub fn run(args: GenerateArgs) -> Result<()> {
    let generator = Generator::new(args.catalog, args.templates, args.output);
    generator.generate_all(args.dry_run, args.file.as_deref())?;

    if !args.dry_run {
        println!("\n{} Documentation generation complete", "✓".green());
    }
    Ok(())
}
