//! CLI command structure using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new plugin to the catalog
    Add(AddArgs),

    /// Update an existing plugin entry
    Update(UpdateArgs),

    /// Remove a plugin from the catalog
    Remove {
        /// Plugin name
        #[arg(long)]
        name: String,

        /// Path to the catalog file
        #[arg(long, default_value = "catalog.json")]
        catalog: PathBuf,
    },

    /// Validate the catalog against the plugin tree
    Validate {
        /// Path to the catalog file
        #[arg(long, default_value = "catalog.json")]
        catalog: PathBuf,

        /// Directory holding plugins/
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Render the documentation set from templates
    Generate(GenerateArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Plugin name
    #[arg(long)]
    pub name: String,

    /// Plugin description
    #[arg(long)]
    pub description: String,

    /// Plugin version
    #[arg(long)]
    pub version: String,

    /// Plugin category
    #[arg(long, default_value = "general")]
    pub category: String,

    /// Comma-separated list of agent files
    #[arg(long, value_delimiter = ',')]
    pub agents: Vec<String>,

    /// Comma-separated list of command files
    #[arg(long, value_delimiter = ',')]
    pub commands: Vec<String>,

    /// Comma-separated list of skill directories
    #[arg(long, value_delimiter = ',')]
    pub skills: Vec<String>,

    /// Comma-separated list of keywords
    #[arg(long, value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// License type
    #[arg(long, default_value = "MIT")]
    pub license: String,

    /// Enable strict mode
    #[arg(long)]
    pub strict: bool,

    /// Author name
    #[arg(long)]
    pub author_name: Option<String>,

    /// Author URL
    #[arg(long)]
    pub author_url: Option<String>,

    /// Path to the catalog file
    #[arg(long, default_value = "catalog.json")]
    pub catalog: PathBuf,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Plugin name
    #[arg(long)]
    pub name: String,

    /// Updated description
    #[arg(long)]
    pub description: Option<String>,

    /// Updated version
    #[arg(long)]
    pub version: Option<String>,

    /// Updated category
    #[arg(long)]
    pub category: Option<String>,

    /// Updated keywords (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub keywords: Option<Vec<String>>,

    /// Agent file to add
    #[arg(long)]
    pub add_agent: Option<String>,

    /// Agent file to remove
    #[arg(long)]
    pub remove_agent: Option<String>,

    /// Command file to add
    #[arg(long)]
    pub add_command: Option<String>,

    /// Command file to remove
    #[arg(long)]
    pub remove_command: Option<String>,

    /// Skill directory to add
    #[arg(long)]
    pub add_skill: Option<String>,

    /// Skill directory to remove
    #[arg(long)]
    pub remove_skill: Option<String>,

    /// Path to the catalog file
    #[arg(long, default_value = "catalog.json")]
    pub catalog: PathBuf,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the catalog file
    #[arg(long, default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// Directory containing the templates
    #[arg(long, default_value = "templates")]
    pub templates: PathBuf,

    /// Directory to write rendered documents into
    #[arg(long, default_value = "docs")]
    pub output: PathBuf,

    /// Render a single document: agents, agent-skills, plugins, or usage
    #[arg(long)]
    pub file: Option<String>,

    /// Preview output without writing files
    #[arg(long)]
    pub dry_run: bool,
}
