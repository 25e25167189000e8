//! Integration tests for catalog load, edit, and validate operations.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use folio::catalog::{Catalog, NewPlugin, PluginUpdate};

const SAMPLE: &str = r#"{
  "name": "toolbox",
  "owner": { "name": "Ferris", "url": "https://github.com/ferris" },
  "metadata": { "description": "Handy plugins", "version": "0.1.0" },
  "custom": { "note": "keep" },
  "plugins": [
    {
      "name": "alpha",
      "source": "./plugins/alpha",
      "description": "First plugin",
      "version": "1.0.0",
      "category": "tools",
      "agents": ["./agents/helper.md"],
      "priority": 5
    }
  ]
}
"#;

fn write_sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("catalog.json");
    fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    let err = Catalog::load(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("catalog not found: {}", path.display())
    );
}

#[test]
fn load_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let err = Catalog::load(&path).unwrap_err();
    assert!(err
        .to_string()
        .starts_with(&format!("invalid JSON in {}", path.display())));
}

#[test]
fn save_round_trip_preserves_unknown_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let catalog = Catalog::load(&path).unwrap();
    let out = dir.path().join("out.json");
    catalog.save(&out).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("\"custom\""));
    assert!(written.contains("\"note\": \"keep\""));
    assert!(written.contains("\"priority\": 5"));
    assert!(written.ends_with('\n'));

    let reloaded = Catalog::load(&out).unwrap();
    assert_eq!(reloaded.name.as_deref(), Some("toolbox"));
    assert!(reloaded.find_plugin("alpha").is_some());
}

#[test]
fn add_plugin_appends_entry() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);
    let mut catalog = Catalog::load(&path).unwrap();

    catalog
        .add_plugin(NewPlugin {
            name: String::from("beta"),
            description: String::from("Second plugin"),
            version: String::from("2.0.0"),
            category: String::from("general"),
            agents: vec![String::from("one.md")],
            keywords: vec![String::from("docs"), String::from("tools")],
            license: String::from("MIT"),
            ..Default::default()
        })
        .unwrap();

    let plugin = catalog.find_plugin("beta").unwrap();
    assert_eq!(plugin.source, "./plugins/beta");
    assert_eq!(plugin.category.as_deref(), Some("general"));
    assert_eq!(
        plugin.agents.as_deref(),
        Some(&[String::from("./agents/one.md")][..])
    );
    assert_eq!(plugin.commands, None);
    assert_eq!(plugin.strict, Some(false));
}

#[test]
fn add_plugin_author_defaults_to_owner() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);
    let mut catalog = Catalog::load(&path).unwrap();

    catalog
        .add_plugin(NewPlugin {
            name: String::from("beta"),
            description: String::from("Second plugin"),
            version: String::from("2.0.0"),
            ..Default::default()
        })
        .unwrap();

    let plugin = catalog.find_plugin("beta").unwrap();
    let author = plugin.author.as_ref().unwrap();
    assert_eq!(author.name.as_deref(), Some("Ferris"));
    assert_eq!(author.url.as_deref(), Some("https://github.com/ferris"));
    assert_eq!(
        plugin.homepage.as_deref(),
        Some("https://github.com/ferris")
    );
    assert_eq!(
        plugin.repository.as_deref(),
        Some("https://github.com/ferris")
    );
}

#[test]
fn add_plugin_explicit_author_wins() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);
    let mut catalog = Catalog::load(&path).unwrap();

    catalog
        .add_plugin(NewPlugin {
            name: String::from("beta"),
            description: String::from("Second plugin"),
            version: String::from("2.0.0"),
            author_name: Some(String::from("Someone Else")),
            ..Default::default()
        })
        .unwrap();

    let author = catalog.find_plugin("beta").unwrap().author.as_ref().unwrap();
    assert_eq!(author.name.as_deref(), Some("Someone Else"));
    assert_eq!(author.url, None);
}

#[test]
fn add_duplicate_plugin_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);
    let mut catalog = Catalog::load(&path).unwrap();

    let err = catalog
        .add_plugin(NewPlugin {
            name: String::from("alpha"),
            description: String::from("Again"),
            version: String::from("9.9.9"),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "plugin 'alpha' already exists in catalog");
}

#[test]
fn update_plugin_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);
    let mut catalog = Catalog::load(&path).unwrap();

    catalog
        .update_plugin(
            "alpha",
            PluginUpdate {
                description: Some(String::from("Updated description")),
                version: Some(String::from("1.1.0")),
                keywords: Some(vec![String::from("fresh")]),
                ..Default::default()
            },
        )
        .unwrap();

    let plugin = catalog.find_plugin("alpha").unwrap();
    assert_eq!(plugin.description, "Updated description");
    assert_eq!(plugin.version, "1.1.0");
    assert_eq!(plugin.category.as_deref(), Some("tools"));
    assert_eq!(
        plugin.keywords.as_deref(),
        Some(&[String::from("fresh")][..])
    );
}

#[test]
fn update_plugin_components() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);
    let mut catalog = Catalog::load(&path).unwrap();

    catalog
        .update_plugin(
            "alpha",
            PluginUpdate {
                add_agent: Some(String::from("extra.md")),
                add_skill: Some(String::from("review")),
                ..Default::default()
            },
        )
        .unwrap();
    // Adding the same reference again is a no-op.
    catalog
        .update_plugin(
            "alpha",
            PluginUpdate {
                add_agent: Some(String::from("extra.md")),
                ..Default::default()
            },
        )
        .unwrap();

    let plugin = catalog.find_plugin("alpha").unwrap();
    assert_eq!(
        plugin.agents.as_deref(),
        Some(
            &[
                String::from("./agents/helper.md"),
                String::from("./agents/extra.md")
            ][..]
        )
    );
    assert_eq!(
        plugin.skills.as_deref(),
        Some(&[String::from("./skills/review")][..])
    );

    catalog
        .update_plugin(
            "alpha",
            PluginUpdate {
                remove_agent: Some(String::from("helper.md")),
                ..Default::default()
            },
        )
        .unwrap();
    let plugin = catalog.find_plugin("alpha").unwrap();
    assert_eq!(
        plugin.agents.as_deref(),
        Some(&[String::from("./agents/extra.md")][..])
    );
}

#[test]
fn update_missing_plugin_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);
    let mut catalog = Catalog::load(&path).unwrap();

    let err = catalog
        .update_plugin("zeta", PluginUpdate::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "plugin 'zeta' not found in catalog");
}

#[test]
fn remove_plugin_deletes_entry() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);
    let mut catalog = Catalog::load(&path).unwrap();

    catalog.remove_plugin("alpha").unwrap();
    assert!(catalog.find_plugin("alpha").is_none());

    let err = catalog.remove_plugin("alpha").unwrap_err();
    assert_eq!(err.to_string(), "plugin 'alpha' not found in catalog");
}

#[test]
fn validate_reports_missing_top_level_fields() {
    let catalog: Catalog = serde_json::from_str("{}").unwrap();
    let dir = TempDir::new().unwrap();
    let report = catalog.validate(dir.path());
    assert_eq!(
        report.errors,
        vec![
            "Missing required field: name",
            "Missing required field: owner",
            "Missing required field: metadata",
            "Missing required field: plugins",
        ]
    );
    assert!(!report.is_ok());
}

#[test]
fn validate_reports_missing_plugin_fields() {
    let catalog: Catalog = serde_json::from_str(
        r#"{
          "name": "toolbox",
          "owner": { "name": "Ferris" },
          "metadata": { "description": "d", "version": "0.1.0" },
          "plugins": [{ "name": "alpha" }]
        }"#,
    )
    .unwrap();
    let dir = TempDir::new().unwrap();
    let report = catalog.validate(dir.path());
    assert_eq!(
        report.errors,
        vec![
            "Plugin 0: Missing required field 'source'",
            "Plugin 0: Missing required field 'description'",
            "Plugin 0: Missing required field 'version'",
        ]
    );
}

#[test]
fn validate_reports_duplicate_names() {
    let catalog: Catalog = serde_json::from_str(
        r#"{
          "name": "toolbox",
          "owner": { "name": "Ferris" },
          "metadata": { "description": "d", "version": "0.1.0" },
          "plugins": [
            { "name": "alpha", "source": "./plugins/alpha", "description": "a", "version": "1" },
            { "name": "alpha", "source": "./plugins/alpha", "description": "b", "version": "2" }
          ]
        }"#,
    )
    .unwrap();
    let dir = TempDir::new().unwrap();
    let report = catalog.validate(dir.path());
    assert_eq!(report.errors, vec!["Duplicate plugin name: alpha"]);
}

#[test]
fn validate_warns_on_missing_component_files() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);
    let catalog = Catalog::load(&path).unwrap();

    let report = catalog.validate(dir.path());
    assert!(report.is_ok());
    let expected = dir
        .path()
        .join("plugins")
        .join("alpha")
        .join("agents")
        .join("helper.md");
    assert_eq!(
        report.warnings,
        vec![format!(
            "Plugin 'alpha': Agent file not found: {}",
            expected.display()
        )]
    );
}

#[test]
fn validate_passes_when_component_files_exist() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);
    let catalog = Catalog::load(&path).unwrap();

    let agents_dir = dir.path().join("plugins").join("alpha").join("agents");
    fs::create_dir_all(&agents_dir).unwrap();
    fs::write(agents_dir.join("helper.md"), "---\nname: Helper\n---\n").unwrap();

    let report = catalog.validate(dir.path());
    assert!(report.is_ok());
    assert!(report.warnings.is_empty());
}
