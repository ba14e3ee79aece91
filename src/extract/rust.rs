//! Cargo.toml parsing (Rust projects)

use crate::domain::RawMetadata;
use std::path::Path;
use toml::Value;
use tracing::debug;

const WEB_FRAMEWORKS: &[&str] = &["actix-web", "rocket", "axum", "warp"];

pub fn parse(root: &Path, raw: &mut RawMetadata) {
    let data: Value = match std::fs::read_to_string(root.join("Cargo.toml"))
        .map_err(anyhow::Error::from)
        .and_then(|text| text.parse::<Value>().map_err(anyhow::Error::from))
    {
        Ok(data) => data,
        Err(err) => {
            debug!("skipping Cargo.toml: {err}");
            return;
        }
    };

    if let Some(package) = data.get("package") {
        if let Some(name) = package.get("name").and_then(Value::as_str) {
            raw.name = name.to_string();
        }
        if let Some(description) = package.get("description").and_then(Value::as_str) {
            raw.description = description.to_string();
        }
        if let Some(version) = package.get("version").and_then(Value::as_str) {
            raw.version = version.to_string();
        }
        if let Some(author) = package
            .get("authors")
            .and_then(Value::as_array)
            .and_then(|authors| authors.first())
            .and_then(Value::as_str)
        {
            raw.author = author.to_string();
        }
        if let Some(homepage) = package.get("homepage").and_then(Value::as_str) {
            raw.homepage = homepage.to_string();
        }
        if let Some(repository) = package.get("repository").and_then(Value::as_str) {
            raw.repository = repository.to_string();
        }
    }
    raw.language = "Rust".to_string();

    if data.get("bin").is_some() || root.join("src/main.rs").exists() {
        raw.has_bin = true;
        raw.cli_commands = vec![raw.name.clone()];
    }

    if let Some(deps) = data.get("dependencies").and_then(Value::as_table) {
        raw.dependencies = deps.keys().cloned().collect();
        if deps.keys().any(|dep| WEB_FRAMEWORKS.contains(&dep.as_str())) {
            raw.has_web_framework = true;
        }
    }
}
