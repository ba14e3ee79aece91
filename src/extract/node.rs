//! package.json parsing (Node.js/npm projects)

use crate::domain::RawMetadata;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

const WEB_FRAMEWORKS: &[&str] = &["express", "koa", "fastify", "next", "nuxt", "react", "vue"];

pub fn parse(root: &Path, raw: &mut RawMetadata) {
    let data: Value = match std::fs::read_to_string(root.join("package.json"))
        .map_err(anyhow::Error::from)
        .and_then(|text| serde_json::from_str(&text).map_err(anyhow::Error::from))
    {
        Ok(data) => data,
        Err(err) => {
            debug!("skipping package.json: {err}");
            return;
        }
    };

    if let Some(name) = data["name"].as_str() {
        raw.name = name.to_string();
    }
    if let Some(description) = data["description"].as_str() {
        raw.description = description.to_string();
    }
    if let Some(version) = data["version"].as_str() {
        raw.version = version.to_string();
    }
    if let Some(author) = data["author"].as_str() {
        raw.author = author.to_string();
    }
    if let Some(homepage) = data["homepage"].as_str() {
        raw.homepage = homepage.to_string();
    }
    match &data["repository"] {
        Value::String(url) => raw.repository = url.clone(),
        Value::Object(obj) => {
            if let Some(url) = obj.get("url").and_then(Value::as_str) {
                raw.repository = url.to_string();
            }
        }
        _ => {}
    }
    raw.language = "JavaScript".to_string();

    // A "bin" entry marks a CLI; a map lists the command names, a bare
    // string means the package name is the command.
    match &data["bin"] {
        Value::Object(bins) => {
            raw.has_bin = true;
            raw.cli_commands = bins.keys().cloned().collect();
        }
        Value::String(_) => {
            raw.has_bin = true;
            raw.cli_commands = vec![raw.name.clone()];
        }
        _ => {}
    }

    let runtime_deps: Vec<String> = data["dependencies"]
        .as_object()
        .map(|deps| deps.keys().cloned().collect())
        .unwrap_or_default();
    let dev_deps: Vec<String> = data["devDependencies"]
        .as_object()
        .map(|deps| deps.keys().cloned().collect())
        .unwrap_or_default();

    if runtime_deps.iter().any(|dep| WEB_FRAMEWORKS.contains(&dep.as_str())) {
        raw.has_web_framework = true;
    }

    raw.dependencies = runtime_deps;
    raw.dependencies.extend(dev_deps);
}
