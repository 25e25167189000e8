use clap::Parser;
use colored::Colorize;

use folio::cli::{Cli, Commands};
use folio::commands;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add(args) => commands::add::run(args),
        Commands::Update(args) => commands::update::run(args),
        Commands::Remove { name, catalog } => commands::remove::run(name, catalog),
        Commands::Validate { catalog, root } => commands::validate::run(catalog, root),
        Commands::Generate(args) => commands::generate::run(args),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "❌ Error:".red());
        std::process::exit(1);
    }
}
