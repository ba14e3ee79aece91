//! Metadata normalization
//!
//! Turns sparse `RawMetadata` plus caller overrides into a complete
//! `CanonicalListing`. Every field has a defined default, so normalization
//! never fails regardless of how little the extractor found.

use crate::domain::{CanonicalListing, RawMetadata, ToolType, MAX_FEATURES, MAX_KEYWORDS};
use chrono::Utc;

/// Caller overrides for fields the extractor may not know.
///
/// An empty string means "use the extracted value, else the constant
/// default".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub author: String,
    pub license: String,
    pub repository: String,
}

/// Build a complete listing from raw metadata.
///
/// Keywords and features keep their given order: the first 10 / first 5 are
/// taken as-is, with no sorting or deduplication (dedup is the extractor's
/// job).
pub fn normalize(
    raw: &RawMetadata,
    tool_type: ToolType,
    keywords: &[String],
    overrides: &Overrides,
) -> CanonicalListing {
    let name = default_if_empty(&raw.name, "unknown-tool");
    let version = default_if_empty(&raw.version, "0.1.0");
    let language = default_if_empty(&raw.language, "Unknown");

    let repository = if !overrides.repository.is_empty() {
        overrides.repository.clone()
    } else {
        raw.repository.clone()
    };

    let now = Utc::now();

    CanonicalListing {
        installation: installation_command(&name, &language, tool_type, &repository),
        usage: usage_example(&name, &language, tool_type, &raw.cli_commands, &repository),
        requirements: requirements_text(&language),
        description: resolve_description(raw, &language),
        keywords: keywords.iter().take(MAX_KEYWORDS).cloned().collect(),
        features: raw.features.iter().take(MAX_FEATURES).cloned().collect(),
        author: pick(&overrides.author, &raw.author, "Unknown"),
        license: pick(&overrides.license, "", "MIT"),
        homepage: raw.homepage.clone(),
        status: "active".to_string(),
        last_updated: now.format("%Y-%m-%d").to_string(),
        generated_at: now.format("%Y-%m-%dT%H:%M:%S+00:00").to_string(),
        name,
        version,
        tool_type,
        language,
        repository,
    }
}

/// Description resolution order: AI-enhanced text, then the manifest
/// description, then a synthesized fallback.
fn resolve_description(raw: &RawMetadata, language: &str) -> String {
    if !raw.ai_description.is_empty() {
        raw.ai_description.clone()
    } else if !raw.description.is_empty() {
        raw.description.clone()
    } else {
        format!("A {language} tool.")
    }
}

fn installation_command(
    name: &str,
    language: &str,
    tool_type: ToolType,
    repository: &str,
) -> String {
    // GitHub Actions are referenced by repository slug, never installed.
    if tool_type == ToolType::GithubAction {
        let slug = if repository.is_empty() { "owner/repo" } else { repository };
        return format!("uses: {slug}@v1");
    }

    let lang = language.to_lowercase();
    if lang.contains("python") {
        format!("pip install {name}")
    } else if lang.contains("javascript") || lang.contains("typescript") {
        if tool_type == ToolType::Cli {
            format!("npm install -g {name}")
        } else {
            format!("npm install {name}")
        }
    } else if lang.contains("rust") {
        format!("cargo install {name}")
    } else if lang.contains("go") {
        format!("go install github.com/{name}@latest")
    } else {
        "# See documentation for installation instructions".to_string()
    }
}

fn usage_example(
    name: &str,
    language: &str,
    tool_type: ToolType,
    cli_commands: &[String],
    repository: &str,
) -> String {
    match tool_type {
        ToolType::Cli | ToolType::McpServer => match cli_commands.first() {
            Some(cmd) => format!("{cmd} --help"),
            None => format!("{name} --help"),
        },
        ToolType::GithubAction => {
            let slug = if repository.is_empty() { "owner/repo" } else { repository };
            format!("uses: {slug}@v1\nwith:\n  token: ${{{{ secrets.GITHUB_TOKEN }}}}")
        }
        ToolType::Library => {
            let lang = language.to_lowercase();
            if lang.contains("python") {
                let module = name.replace('-', "_");
                format!("from {module} import {}", class_name(name))
            } else if lang.contains("javascript") || lang.contains("typescript") {
                format!("import {{ {name} }} from '{name}';")
            } else if lang.contains("rust") {
                format!("use {}::*;", name.replace('-', "_"))
            } else {
                "See documentation for usage examples".to_string()
            }
        }
        _ => "See documentation for usage examples".to_string(),
    }
}

/// Title-case a hyphenated package name into a class-like identifier
/// ("my-python-tool" becomes "MyPythonTool").
fn class_name(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn requirements_text(language: &str) -> String {
    let lang = language.to_lowercase();
    let req = if lang.contains("python") {
        "Python >= 3.9"
    } else if lang.contains("javascript") || lang.contains("typescript") {
        "Node.js >= 18"
    } else if lang.contains("rust") {
        "Rust >= 1.70"
    } else if lang.contains("go") {
        "Go >= 1.20"
    } else {
        "See repository for requirements"
    };
    req.to_string()
}

fn default_if_empty(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Pick the first non-empty of override, extracted value, and default.
fn pick(override_value: &str, extracted: &str, default: &str) -> String {
    if !override_value.is_empty() {
        override_value.to_string()
    } else if !extracted.is_empty() {
        extracted.to_string()
    } else {
        default.to_string()
    }
}
