//! The catalog document: a typed model of `catalog.json` and the operations
//! that maintain it.
//!
//! The model is deliberately tolerant: required fields are checked by
//! [`Catalog::validate`], not by deserialization, so a malformed document can
//! be loaded, inspected, and reported on. Unknown fields round-trip through
//! `extra` maps untouched.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::value::Map;
use crate::{Error, Result};

/// The top-level catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<Plugin>>,
    #[serde(flatten)]
    pub extra: Map<String, Json>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Json>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(flatten)]
    pub extra: Map<String, Json>,
}

/// One plugin entry. Field order is the serialization order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plugin {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Json>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Json>,
}

/// Arguments for [`Catalog::add_plugin`].
#[derive(Debug, Clone, Default)]
pub struct NewPlugin {
    pub name: String,
    pub description: String,
    pub version: String,
    pub category: String,
    pub agents: Vec<String>,
    pub commands: Vec<String>,
    pub skills: Vec<String>,
    pub keywords: Vec<String>,
    pub license: String,
    pub strict: bool,
    pub author_name: Option<String>,
    pub author_url: Option<String>,
}

/// Partial updates for [`Catalog::update_plugin`]. `None` means unchanged.
#[derive(Debug, Clone, Default)]
pub struct PluginUpdate {
    pub description: Option<String>,
    pub version: Option<String>,
    pub category: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub add_agent: Option<String>,
    pub remove_agent: Option<String>,
    pub add_command: Option<String>,
    pub remove_command: Option<String>,
    pub add_skill: Option<String>,
    pub remove_skill: Option<String>,
}

/// The outcome of [`Catalog::validate`].
///
/// Errors fail validation; warnings do not.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Catalog {
    /// Load the catalog document at `path`.
    ///
    /// A missing file and malformed JSON are distinct errors, both naming
    /// the path.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::CatalogNotFound(path.to_owned()));
        }
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| Error::invalid_catalog(path, e))
    }

    /// Write the catalog document to `path` as two-space-indented JSON with
    /// a trailing newline.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut json =
            serde_json::to_string_pretty(self).map_err(|e| Error::Serialize(e.to_string()))?;
        json.push('\n');
        fs::write(path, json).map_err(|e| Error::io(path, e))
    }

    /// Find a plugin entry by name.
    pub fn find_plugin(&self, name: &str) -> Option<&Plugin> {
        self.plugins
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .find(|p| p.name == name)
    }

    fn find_plugin_mut(&mut self, name: &str) -> Option<&mut Plugin> {
        self.plugins
            .as_mut()
            .and_then(|plugins| plugins.iter_mut().find(|p| p.name == name))
    }

    /// Add a new plugin entry.
    ///
    /// The source is derived as `./plugins/<name>` and component names are
    /// prefixed into `./agents/`, `./commands/`, and `./skills/` references.
    /// The author defaults to the catalog owner; homepage and repository are
    /// filled in from a GitHub owner URL. Duplicate names are rejected.
    pub fn add_plugin(&mut self, new: NewPlugin) -> Result<()> {
        if self.find_plugin(&new.name).is_some() {
            return Err(Error::PluginExists(new.name));
        }

        let mut plugin = Plugin {
            source: format!("./plugins/{}", new.name),
            name: new.name,
            description: new.description,
            version: new.version,
            category: Some(new.category),
            license: Some(new.license),
            strict: Some(new.strict),
            ..Plugin::default()
        };

        if new.author_name.is_some() || new.author_url.is_some() {
            plugin.author = Some(Author {
                name: new.author_name,
                url: new.author_url,
                ..Author::default()
            });
        } else if let Some(owner) = &self.owner {
            plugin.author = Some(Author {
                name: Some(owner.name.clone()),
                url: Some(owner.url.clone().unwrap_or_default()),
                ..Author::default()
            });
        }

        if let Some(url) = self.owner.as_ref().and_then(|o| o.url.as_deref()) {
            if url.contains("github.com") {
                plugin.homepage = Some(url.to_owned());
                plugin.repository = Some(url.to_owned());
            }
        }

        if !new.keywords.is_empty() {
            plugin.keywords = Some(new.keywords);
        }
        if !new.agents.is_empty() {
            plugin.agents = Some(prefixed("./agents", &new.agents));
        }
        if !new.commands.is_empty() {
            plugin.commands = Some(prefixed("./commands", &new.commands));
        }
        if !new.skills.is_empty() {
            plugin.skills = Some(prefixed("./skills", &new.skills));
        }

        self.plugins.get_or_insert_with(Vec::new).push(plugin);
        Ok(())
    }

    /// Apply partial updates to an existing plugin entry.
    ///
    /// Component additions are idempotent and removals of absent references
    /// are silent no-ops.
    pub fn update_plugin(&mut self, name: &str, update: PluginUpdate) -> Result<()> {
        let plugin = self
            .find_plugin_mut(name)
            .ok_or_else(|| Error::PluginNotFound(name.to_owned()))?;

        if let Some(description) = update.description {
            plugin.description = description;
        }
        if let Some(version) = update.version {
            plugin.version = version;
        }
        if let Some(category) = update.category {
            plugin.category = Some(category);
        }
        if let Some(keywords) = update.keywords {
            plugin.keywords = Some(keywords);
        }

        add_component(&mut plugin.agents, "./agents", update.add_agent);
        remove_component(&mut plugin.agents, "./agents", update.remove_agent);
        add_component(&mut plugin.commands, "./commands", update.add_command);
        remove_component(&mut plugin.commands, "./commands", update.remove_command);
        add_component(&mut plugin.skills, "./skills", update.add_skill);
        remove_component(&mut plugin.skills, "./skills", update.remove_skill);

        Ok(())
    }

    /// Remove a plugin entry by name.
    pub fn remove_plugin(&mut self, name: &str) -> Result<()> {
        if let Some(plugins) = &mut self.plugins {
            if let Some(i) = plugins.iter().position(|p| p.name == name) {
                plugins.remove(i);
                return Ok(());
            }
        }
        Err(Error::PluginNotFound(name.to_owned()))
    }

    /// Check the document structure and the component references.
    ///
    /// Missing required fields and duplicate plugin names are errors.
    /// Component references that do not resolve to files under
    /// `<root>/plugins/<name>/` are warnings; a skill reference must contain
    /// a `SKILL.md`.
    pub fn validate(&self, root: &Path) -> ValidationReport {
        let mut report = ValidationReport::default();

        if self.name.is_none() {
            report.errors.push("Missing required field: name".into());
        }
        if self.owner.is_none() {
            report.errors.push("Missing required field: owner".into());
        }
        if self.metadata.is_none() {
            report.errors.push("Missing required field: metadata".into());
        }
        if self.plugins.is_none() {
            report.errors.push("Missing required field: plugins".into());
        }

        let mut seen = BTreeSet::new();
        for (i, plugin) in self.plugins.as_deref().unwrap_or(&[]).iter().enumerate() {
            let required = [
                ("name", &plugin.name),
                ("source", &plugin.source),
                ("description", &plugin.description),
                ("version", &plugin.version),
            ];
            for (field, value) in required {
                if value.is_empty() {
                    report
                        .errors
                        .push(format!("Plugin {i}: Missing required field '{field}'"));
                }
            }

            if plugin.name.is_empty() {
                continue;
            }
            if !seen.insert(plugin.name.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate plugin name: {}", plugin.name));
            }

            let plugin_dir = root.join("plugins").join(&plugin.name);
            for (kind, refs) in [
                ("Agent", &plugin.agents),
                ("Command", &plugin.commands),
                ("Skill", &plugin.skills),
            ] {
                for reference in refs.as_deref().unwrap_or(&[]) {
                    let mut path = plugin_dir.join(local(reference));
                    if kind == "Skill" {
                        path.push("SKILL.md");
                    }
                    if !path.exists() {
                        report.warnings.push(format!(
                            "Plugin '{}': {kind} file not found: {}",
                            plugin.name,
                            path.display()
                        ));
                    }
                }
            }
        }

        report
    }
}

/// Strip a leading `./` so references join cleanly under a plugin directory.
pub(crate) fn local(reference: &str) -> &str {
    reference.strip_prefix("./").unwrap_or(reference)
}

fn prefixed(prefix: &str, names: &[String]) -> Vec<String> {
    names.iter().map(|n| format!("{prefix}/{n}")).collect()
}

fn add_component(refs: &mut Option<Vec<String>>, prefix: &str, name: Option<String>) {
    if let Some(name) = name {
        let reference = format!("{prefix}/{name}");
        let refs = refs.get_or_insert_with(Vec::new);
        if !refs.contains(&reference) {
            refs.push(reference);
        }
    }
}

fn remove_component(refs: &mut Option<Vec<String>>, prefix: &str, name: Option<String>) {
    if let Some(name) = name {
        if let Some(refs) = refs {
            let reference = format!("{prefix}/{name}");
            refs.retain(|r| r != &reference);
        }
    }
}
