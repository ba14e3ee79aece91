//! README excerpt and feature extraction

use crate::domain::RawMetadata;
use std::path::{Path, PathBuf};
use tracing::debug;

const README_NAMES: &[&str] = &["README.md", "README.MD", "readme.md", "README", "readme.txt"];

const FEATURE_HEADINGS: &[&str] = &["## features", "## key features", "# features"];

/// Longest excerpt kept from the README opening paragraph.
const EXCERPT_CAP: usize = 500;

/// Find a README file at the repository root, trying common name variants.
pub fn find_readme(root: &Path) -> Option<PathBuf> {
    README_NAMES.iter().map(|name| root.join(name)).find(|path| path.exists())
}

pub fn parse(readme_path: &Path, raw: &mut RawMetadata) {
    let content = match std::fs::read_to_string(readme_path) {
        Ok(content) => content,
        Err(err) => {
            debug!("skipping README: {err}");
            return;
        }
    };

    raw.readme_excerpt = first_paragraph(&content);
    raw.features = feature_bullets(&content);
}

/// Collect the first prose paragraph, skipping headings, badges, and link
/// lines, capped at 500 characters.
fn first_paragraph(content: &str) -> String {
    let mut excerpt_lines: Vec<&str> = Vec::new();

    for line in content.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if line.starts_with('#') {
            continue;
        }
        if line.to_lowercase().contains("badge") || line.starts_with("[![") {
            continue;
        }
        if line.starts_with('[') {
            continue;
        }
        excerpt_lines.push(line);
        if excerpt_lines.join(" ").chars().count() > 200 {
            break;
        }
    }

    excerpt_lines.join(" ").chars().take(EXCERPT_CAP).collect()
}

/// Pull bullet points from a "Features" section, capped at five short ones.
fn feature_bullets(content: &str) -> Vec<String> {
    let mut features = Vec::new();
    let mut in_features = false;

    for line in content.lines() {
        let lower = line.to_lowercase();
        let lower = lower.trim();

        if FEATURE_HEADINGS.iter().any(|heading| lower.starts_with(heading)) {
            in_features = true;
            continue;
        }
        if in_features && line.starts_with('#') {
            break;
        }

        let trimmed = line.trim();
        if in_features && (trimmed.starts_with('-') || trimmed.starts_with('*')) {
            let feature = trimmed.trim_start_matches(['-', '*']).trim();
            if !feature.is_empty() && feature.chars().count() < 100 {
                features.push(feature.to_string());
            }
        }
    }

    features.truncate(5);
    features
}

#[cfg(test)]
mod tests {
    use super::{feature_bullets, find_readme, first_paragraph};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_readme_variants() {
        let temp = TempDir::new().expect("tmp");
        fs::write(temp.path().join("readme.md"), "hello").expect("write readme");
        let found = find_readme(temp.path()).expect("readme found");
        assert!(found.ends_with("readme.md"));
    }

    #[test]
    fn no_readme_returns_none() {
        let temp = TempDir::new().expect("tmp");
        assert!(find_readme(temp.path()).is_none());
    }

    #[test]
    fn excerpt_skips_title_and_badges() {
        let content = "# My Tool\n\n[![CI](https://img.shields.io/badge/ci-pass)](x)\n\nDoes useful things quickly.\n";
        assert_eq!(first_paragraph(content), "Does useful things quickly.");
    }

    #[test]
    fn excerpt_is_capped() {
        let long_line = "word ".repeat(200);
        let excerpt = first_paragraph(&long_line);
        assert!(excerpt.chars().count() <= 500);
    }

    #[test]
    fn feature_section_bullets_extracted() {
        let content = "# Tool\n\n## Features\n\n- Fast parsing\n* Async support\n- Type-safe\n\n## Install\n\n- not a feature\n";
        let features = feature_bullets(content);
        assert_eq!(
            features,
            vec!["Fast parsing".to_string(), "Async support".to_string(), "Type-safe".to_string()]
        );
    }

    #[test]
    fn features_capped_at_five() {
        let bullets: String = (0..8).map(|i| format!("- feature {i}\n")).collect();
        let content = format!("## Features\n{bullets}");
        assert_eq!(feature_bullets(&content).len(), 5);
    }

    #[test]
    fn overlong_bullets_discarded() {
        let content = format!("## Features\n- {}\n- short one\n", "x".repeat(150));
        assert_eq!(feature_bullets(&content), vec!["short one".to_string()]);
    }

    #[test]
    fn no_features_section_yields_empty() {
        assert!(feature_bullets("# Tool\n\nJust a description.\n").is_empty());
    }
}
