//! Keyword extraction from repository metadata

use crate::domain::{RawMetadata, MAX_KEYWORDS};
use std::collections::BTreeSet;

/// Terms worth surfacing when they appear in descriptions or READMEs.
const COMMON_KEYWORDS: &[&str] = &[
    "cli",
    "api",
    "web",
    "database",
    "testing",
    "automation",
    "monitoring",
    "deployment",
    "security",
    "parser",
    "generator",
    "framework",
    "library",
    "tool",
    "utility",
    "service",
];

/// Derive a deduplicated, sorted keyword list from language, dependency
/// names, and description/README text, capped at 10 entries.
///
/// A BTreeSet gives both dedup and deterministic (sorted) output order;
/// insertion-order truncation happens later, in the normalizer.
pub fn extract_keywords(raw: &RawMetadata) -> Vec<String> {
    let mut keywords: BTreeSet<String> = BTreeSet::new();

    // The census placeholder "Unknown" is not a keyword.
    if !raw.language.is_empty() && !raw.language.eq_ignore_ascii_case("unknown") {
        keywords.insert(raw.language.to_lowercase());
    }

    for dep in &raw.dependencies {
        let base = dependency_base_name(dep);
        if base.chars().count() > 2 {
            keywords.insert(base.to_lowercase());
        }
    }

    let text = format!("{} {}", raw.description, raw.readme_excerpt).to_lowercase();
    for word in text.split_whitespace() {
        let word = word.trim_matches(['.', ',', ';', ':', '!', '?']);
        if COMMON_KEYWORDS.contains(&word) {
            keywords.insert(word.to_string());
        }
    }

    keywords.into_iter().take(MAX_KEYWORDS).collect()
}

/// Strip scope/path prefixes and version suffixes from a dependency
/// specifier ("@scope/pkg@1.0", "requests==2.0" → "pkg", "requests").
fn dependency_base_name(dep: &str) -> &str {
    let base = dep.rsplit('/').next().unwrap_or(dep);
    let base = base.split('@').next().unwrap_or(base);
    base.split("==").next().unwrap_or(base)
}
