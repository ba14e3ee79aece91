//! pyproject.toml parsing (Python projects)

use crate::domain::RawMetadata;
use std::path::Path;
use toml::Value;
use tracing::debug;

const WEB_FRAMEWORKS: &[&str] = &["fastapi", "flask", "django", "starlette", "aiohttp"];

pub fn parse(root: &Path, raw: &mut RawMetadata) {
    let data: Value = match std::fs::read_to_string(root.join("pyproject.toml"))
        .map_err(anyhow::Error::from)
        .and_then(|text| text.parse::<Value>().map_err(anyhow::Error::from))
    {
        Ok(data) => data,
        Err(err) => {
            debug!("skipping pyproject.toml: {err}");
            return;
        }
    };

    let Some(project) = data.get("project") else {
        debug!("pyproject.toml has no [project] table");
        return;
    };

    if let Some(name) = project.get("name").and_then(Value::as_str) {
        raw.name = name.to_string();
    }
    if let Some(description) = project.get("description").and_then(Value::as_str) {
        raw.description = description.to_string();
    }
    if let Some(version) = project.get("version").and_then(Value::as_str) {
        raw.version = version.to_string();
    }
    raw.language = "Python".to_string();

    // PEP 621 authors: array of tables with optional name/email.
    if let Some(author) = project
        .get("authors")
        .and_then(Value::as_array)
        .and_then(|authors| authors.first())
        .and_then(|entry| entry.get("name"))
        .and_then(Value::as_str)
    {
        raw.author = author.to_string();
    }

    if let Some(urls) = project.get("urls").and_then(Value::as_table) {
        if let Some(homepage) = urls.get("Homepage").and_then(Value::as_str) {
            raw.homepage = homepage.to_string();
        }
        if let Some(repository) = urls.get("Repository").and_then(Value::as_str) {
            raw.repository = repository.to_string();
        }
    }

    if let Some(scripts) = project.get("scripts").and_then(Value::as_table) {
        if !scripts.is_empty() {
            raw.has_bin = true;
            raw.cli_commands = scripts.keys().cloned().collect();
        }
    }

    if let Some(deps) = project.get("dependencies").and_then(Value::as_array) {
        raw.dependencies =
            deps.iter().filter_map(Value::as_str).map(str::to_string).collect();
    }

    // Requirement specifiers carry version pins, so probe by substring.
    let dep_blob = raw.dependencies.join(" ").to_lowercase();
    if WEB_FRAMEWORKS.iter().any(|fw| dep_blob.contains(fw)) {
        raw.has_web_framework = true;
    }
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::domain::RawMetadata;
    use std::fs;
    use tempfile::TempDir;

    fn parse_fixture(contents: &str) -> RawMetadata {
        let temp = TempDir::new().expect("tmp");
        fs::write(temp.path().join("pyproject.toml"), contents).expect("write pyproject.toml");
        let mut raw = RawMetadata::default();
        parse(temp.path(), &mut raw);
        raw
    }

    #[test]
    fn extracts_project_table() {
        let raw = parse_fixture(
            r#"
[project]
name = "data-cruncher"
version = "0.9.0"
description = "Crunches data"
authors = [{ name = "Dana", email = "dana@example.com" }]
dependencies = ["requests>=2.0", "click"]

[project.urls]
Homepage = "https://cruncher.dev"
Repository = "https://github.com/dana/data-cruncher"
"#,
        );
        assert_eq!(raw.name, "data-cruncher");
        assert_eq!(raw.version, "0.9.0");
        assert_eq!(raw.description, "Crunches data");
        assert_eq!(raw.author, "Dana");
        assert_eq!(raw.language, "Python");
        assert_eq!(raw.homepage, "https://cruncher.dev");
        assert_eq!(raw.repository, "https://github.com/dana/data-cruncher");
        assert_eq!(raw.dependencies, vec!["requests>=2.0".to_string(), "click".to_string()]);
    }

    #[test]
    fn scripts_become_cli_commands() {
        let raw = parse_fixture(
            "[project]\nname = \"t\"\n\n[project.scripts]\ncrunch = \"t.cli:main\"\n",
        );
        assert!(raw.has_bin);
        assert_eq!(raw.cli_commands, vec!["crunch".to_string()]);
    }

    #[test]
    fn detects_pinned_web_framework() {
        let raw =
            parse_fixture("[project]\nname = \"t\"\ndependencies = [\"FastAPI>=0.100\"]\n");
        assert!(raw.has_web_framework);
    }

    #[test]
    fn missing_project_table_is_ignored() {
        let raw = parse_fixture("[tool.black]\nline-length = 100\n");
        assert!(raw.name.is_empty());
        assert!(raw.language.is_empty());
    }
}
