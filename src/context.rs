//! Assembles the data that documentation templates render against.
//!
//! The context is a single flat map: scalar keys describe the catalog as a
//! whole, while `plugins`, `categories`, `all_agents`, `all_commands`, and
//! `all_skills` hold lists of one-level records. Component records pull
//! their display name and description from the frontmatter of the file the
//! catalog points at, falling back to the file name when a field is absent.

use std::collections::BTreeMap;
use std::path::Path;

use crate::catalog::{self, Catalog, Plugin};
use crate::frontmatter;
use crate::value::{List, Map, Value};

/// Builds the render context for `catalog`, stamped with the current local
/// time.
///
/// Component files are resolved under `root`, which is the directory
/// holding `plugins/`. Missing files contribute empty frontmatter fields
/// rather than errors.
pub fn build(catalog: &Catalog, root: &Path) -> Value {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    build_with_timestamp(catalog, root, &now)
}

/// Builds the render context with a caller-supplied timestamp, so output
/// can be reproduced exactly.
pub fn build_with_timestamp(catalog: &Catalog, root: &Path, now: &str) -> Value {
    let mut ctx = Map::new();

    ctx.insert(
        "marketplace_name".to_owned(),
        catalog.name.clone().unwrap_or_default().into(),
    );
    let (description, version) = match &catalog.metadata {
        Some(metadata) => (metadata.description.clone(), metadata.version.clone()),
        None => (String::new(), String::new()),
    };
    ctx.insert("marketplace_description".to_owned(), description.into());
    ctx.insert("marketplace_version".to_owned(), version.into());
    let (owner_name, owner_url) = match &catalog.owner {
        Some(owner) => (owner.name.clone(), owner.url.clone().unwrap_or_default()),
        None => (String::new(), String::new()),
    };
    ctx.insert("owner_name".to_owned(), owner_name.into());
    ctx.insert("owner_url".to_owned(), owner_url.into());
    ctx.insert("now".to_owned(), now.into());

    let plugins = catalog.plugins.as_deref().unwrap_or_default();

    let mut records = List::new();
    let mut by_category: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    let mut agents = List::new();
    let mut commands = List::new();
    let mut skills = List::new();
    let (mut total_agents, mut total_commands, mut total_skills) = (0, 0, 0);

    for plugin in plugins {
        records.push(plugin_record(plugin));
        by_category
            .entry(category(plugin))
            .or_default()
            .push(&plugin.name);
        total_agents += list_len(&plugin.agents);
        total_commands += list_len(&plugin.commands);
        total_skills += list_len(&plugin.skills);

        let plugin_dir = root.join("plugins").join(&plugin.name);
        for reference in plugin.agents.iter().flatten() {
            agents.push(agent_record(plugin, reference, &plugin_dir));
        }
        for reference in plugin.commands.iter().flatten() {
            commands.push(command_record(plugin, reference, &plugin_dir));
        }
        for reference in plugin.skills.iter().flatten() {
            skills.push(skill_record(plugin, reference, &plugin_dir));
        }
    }

    ctx.insert("total_plugins".to_owned(), (plugins.len() as i64).into());
    ctx.insert("total_agents".to_owned(), total_agents.into());
    ctx.insert("total_commands".to_owned(), total_commands.into());
    ctx.insert("total_skills".to_owned(), total_skills.into());
    ctx.insert("plugins".to_owned(), Value::List(records));
    ctx.insert("categories".to_owned(), category_records(&by_category));
    ctx.insert("all_agents".to_owned(), Value::List(agents));
    ctx.insert("all_commands".to_owned(), Value::List(commands));
    ctx.insert("all_skills".to_owned(), Value::List(skills));

    Value::Map(ctx)
}

fn plugin_record(plugin: &Plugin) -> Value {
    let mut record = Map::new();
    record.insert("name".to_owned(), plugin.name.clone().into());
    record.insert("version".to_owned(), plugin.version.clone().into());
    record.insert("description".to_owned(), plugin.description.clone().into());
    record.insert("category".to_owned(), category(plugin).into());
    record.insert("source".to_owned(), plugin.source.clone().into());
    record.insert(
        "license".to_owned(),
        plugin.license.clone().unwrap_or_default().into(),
    );
    record.insert(
        "homepage".to_owned(),
        plugin.homepage.clone().unwrap_or_default().into(),
    );
    record.insert(
        "repository".to_owned(),
        plugin.repository.clone().unwrap_or_default().into(),
    );
    record.insert(
        "keywords".to_owned(),
        plugin
            .keywords
            .as_deref()
            .unwrap_or_default()
            .join(", ")
            .into(),
    );
    record.insert("agent_count".to_owned(), list_len(&plugin.agents).into());
    record.insert("command_count".to_owned(), list_len(&plugin.commands).into());
    record.insert("skill_count".to_owned(), list_len(&plugin.skills).into());
    Value::Map(record)
}

/// Category groupings, ordered by category name.
fn category_records(by_category: &BTreeMap<String, Vec<&str>>) -> Value {
    let mut records = List::new();
    for (name, members) in by_category {
        let mut record = Map::new();
        record.insert("name".to_owned(), name.clone().into());
        record.insert("count".to_owned(), (members.len() as i64).into());
        record.insert("plugins".to_owned(), members.join(", ").into());
        records.push(Value::Map(record));
    }
    Value::List(records)
}

fn agent_record(plugin: &Plugin, reference: &str, plugin_dir: &Path) -> Value {
    let file = reference.strip_prefix("./agents/").unwrap_or(reference);
    let fm = frontmatter::extract(&plugin_dir.join(catalog::local(reference)));
    let mut record = Map::new();
    record.insert("plugin".to_owned(), plugin.name.clone().into());
    record.insert(
        "name".to_owned(),
        field_or(&fm, "name", file.strip_suffix(".md").unwrap_or(file)).into(),
    );
    record.insert("file".to_owned(), file.into());
    record.insert("description".to_owned(), field_or(&fm, "description", "").into());
    record.insert("model".to_owned(), field_or(&fm, "model", "").into());
    Value::Map(record)
}

fn command_record(plugin: &Plugin, reference: &str, plugin_dir: &Path) -> Value {
    let file = reference.strip_prefix("./commands/").unwrap_or(reference);
    let fm = frontmatter::extract(&plugin_dir.join(catalog::local(reference)));
    let mut record = Map::new();
    record.insert("plugin".to_owned(), plugin.name.clone().into());
    record.insert(
        "name".to_owned(),
        field_or(&fm, "name", file.strip_suffix(".md").unwrap_or(file)).into(),
    );
    record.insert("file".to_owned(), file.into());
    record.insert("description".to_owned(), field_or(&fm, "description", "").into());
    Value::Map(record)
}

/// A skill reference names a directory; its frontmatter lives in the
/// `SKILL.md` inside it.
fn skill_record(plugin: &Plugin, reference: &str, plugin_dir: &Path) -> Value {
    let path = reference.strip_prefix("./skills/").unwrap_or(reference);
    let fm = frontmatter::extract(&plugin_dir.join(catalog::local(reference)).join("SKILL.md"));
    let mut record = Map::new();
    record.insert("plugin".to_owned(), plugin.name.clone().into());
    record.insert("name".to_owned(), field_or(&fm, "name", path).into());
    record.insert("path".to_owned(), path.into());
    record.insert("description".to_owned(), field_or(&fm, "description", "").into());
    Value::Map(record)
}

fn category(plugin: &Plugin) -> String {
    plugin
        .category
        .clone()
        .unwrap_or_else(|| String::from("general"))
}

fn list_len(list: &Option<Vec<String>>) -> i64 {
    list.as_deref().unwrap_or_default().len() as i64
}

fn field_or(fm: &Map<String, String>, key: &str, fallback: &str) -> String {
    match fm.get(key) {
        Some(value) => value.clone(),
        None => fallback.to_owned(),
    }
}
