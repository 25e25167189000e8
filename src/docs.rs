//! Drives rendering of the documentation set.
//!
//! Each document pairs a template name with an output file. Failures are
//! reported per document and do not stop the run, so one broken template
//! still lets the rest regenerate.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::catalog::Catalog;
use crate::context;
use crate::error::{Error, Result};
use crate::render::Template;
use crate::value::Value;

/// Template names and the markdown files they produce.
const DOCUMENTS: [(&str, &str); 4] = [
    ("agents", "agents.md"),
    ("agent-skills", "agent-skills.md"),
    ("plugins", "plugins.md"),
    ("usage", "usage.md"),
];

/// Renders catalog documentation from templates.
#[derive(Debug, Clone)]
pub struct Generator {
    catalog_path: PathBuf,
    templates_dir: PathBuf,
    output_dir: PathBuf,
    root: PathBuf,
}

impl Generator {
    /// Constructs a generator reading the catalog at `catalog_path` and
    /// templates from `templates_dir`, writing rendered documents into
    /// `output_dir`.
    pub fn new(
        catalog_path: impl Into<PathBuf>,
        templates_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            templates_dir: templates_dir.into(),
            output_dir: output_dir.into(),
            root: PathBuf::from("."),
        }
    }

    /// Sets the directory that holds `plugins/`, used when resolving
    /// component frontmatter. Defaults to the current directory.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Renders every document, or just `only` when given.
    ///
    /// With `dry_run` the rendered content is previewed on stdout instead
    /// of written. An unknown `only` name or an unreadable catalog aborts;
    /// failures in a single document are printed and skipped.
    pub fn generate_all(&self, dry_run: bool, only: Option<&str>) -> Result<()> {
        if let Some(name) = only {
            if !DOCUMENTS.iter().any(|(template, _)| *template == name) {
                return Err(Error::UnknownDoc(name.to_owned()));
            }
        }

        let catalog = Catalog::load(&self.catalog_path)?;
        let ctx = context::build(&catalog, &self.root);

        for (name, file) in DOCUMENTS {
            if only.is_some_and(|o| o != name) {
                continue;
            }
            println!("Generating {file}...");
            if let Err(err) = self.generate_one(name, file, &ctx, dry_run) {
                println!("{} {err}", format!("❌ Error generating {file}:").red());
            }
        }
        Ok(())
    }

    fn generate_one(&self, name: &str, file: &str, ctx: &Value, dry_run: bool) -> Result<()> {
        let template = self.load_template(name)?;
        let content = template.render_value(ctx);
        if dry_run {
            println!("\n--- {file} ---");
            println!("{}", preview(&content));
            println!();
        } else {
            fs::create_dir_all(&self.output_dir)
                .map_err(|err| Error::io(&self.output_dir, err))?;
            let path = self.output_dir.join(file);
            fs::write(&path, content).map_err(|err| Error::io(&path, err))?;
            println!("{} Generated {}", "✓".green(), path.display());
        }
        Ok(())
    }

    fn load_template(&self, name: &str) -> Result<Template> {
        let path = self.templates_dir.join(format!("{name}.tmpl"));
        if !path.exists() {
            return Err(Error::TemplateNotFound(path));
        }
        let source = fs::read_to_string(&path).map_err(|err| Error::io(&path, err))?;
        Ok(Template::new(source))
    }
}

/// The first 500 characters of `content`, with an ellipsis when truncated.
fn preview(content: &str) -> String {
    match content.char_indices().nth(500) {
        Some((i, _)) => format!("{}...", &content[..i]),
        None => content.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_content_unchanged() {
        assert_eq!(preview("hello"), "hello");
        assert_eq!(preview(&"x".repeat(500)), "x".repeat(500));
    }

    #[test]
    fn preview_truncates_long_content() {
        let long = "y".repeat(501);
        let shown = preview(&long);
        assert_eq!(shown.len(), 503);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn unknown_document_rejected() {
        let generator = Generator::new("catalog.json", "templates", "docs");
        let err = generator.generate_all(true, Some("intro")).unwrap_err();
        assert_eq!(err.to_string(), "unknown documentation file: intro");
    }

    #[test]
    fn missing_catalog_aborts() {
        let generator = Generator::new("no-such-catalog.json", "templates", "docs");
        let err = generator.generate_all(true, None).unwrap_err();
        assert_eq!(err.to_string(), "catalog not found: no-such-catalog.json");
    }
}
