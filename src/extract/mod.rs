//! Repository metadata extraction
//!
//! Reads well-known manifest files and the README from a repository root
//! and fills a `RawMetadata` record. Every parser is best-effort: a broken
//! or missing manifest is logged at debug level and skipped, never fatal.

use crate::domain::RawMetadata;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

pub mod golang;
pub mod language;
pub mod node;
pub mod python;
pub mod readme;
pub mod rust;

/// Extract all available metadata from a repository root.
pub fn extract_metadata(root: &Path) -> Result<RawMetadata> {
    let mut raw = RawMetadata {
        name: root.file_name().and_then(|n| n.to_str()).unwrap_or("").to_string(),
        ..Default::default()
    };

    if root.join("package.json").exists() {
        debug!("parsing package.json");
        node::parse(root, &mut raw);
    }
    if root.join("pyproject.toml").exists() {
        debug!("parsing pyproject.toml");
        python::parse(root, &mut raw);
    }
    if root.join("Cargo.toml").exists() {
        debug!("parsing Cargo.toml");
        rust::parse(root, &mut raw);
    }
    if root.join("go.mod").exists() {
        debug!("parsing go.mod");
        golang::parse(root, &mut raw);
    }

    if let Some(readme_path) = readme::find_readme(root) {
        debug!("parsing README at {}", readme_path.display());
        readme::parse(&readme_path, &mut raw);
    }

    if raw.language.is_empty() {
        raw.language = language::detect_language(root);
        debug!("detected language by extension census: {}", raw.language);
    }

    Ok(raw)
}
