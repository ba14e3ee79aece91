//! GitHub repository cloning

use crate::fetch::RepoContext;
use anyhow::{Context, Result};
use git2::{FetchOptions, Repository};
use std::env;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Shallow-clone (depth=1) a repository into a fresh temp directory,
/// falling back to a full clone when the server rejects shallow fetches.
/// The temp directory is removed again if the clone fails.
pub fn clone_repository(url: &str) -> Result<RepoContext> {
    let temp_dir = build_temp_repo_dir();
    std::fs::create_dir_all(&temp_dir)
        .with_context(|| format!("Failed creating temp directory: {}", temp_dir.display()))?;

    // Normalize GitHub URLs: strip trailing slash, append .git if missing.
    let normalized = normalize_github_url(url);
    let url = normalized.as_str();
    debug!("cloning {url} into {}", temp_dir.display());

    let result = shallow_clone(url, &temp_dir).or_else(|_| {
        Repository::clone(url, &temp_dir)
            .with_context(|| format!("Failed cloning repository from {url}"))
    });

    match result {
        Ok(_) => Ok(RepoContext::new(temp_dir, true)),
        Err(err) => {
            let _ = std::fs::remove_dir_all(&temp_dir);
            Err(err)
        }
    }
}

/// Normalize a GitHub URL to the canonical HTTPS `.git` form.
///
/// Examples:
/// - `https://github.com/owner/repo`    → `https://github.com/owner/repo.git`
/// - `https://github.com/owner/repo/`   → `https://github.com/owner/repo.git`
/// - `https://github.com/owner/repo.git`→ unchanged
/// - non-GitHub URLs                    → unchanged
fn normalize_github_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    if trimmed.contains("github.com") && !trimmed.ends_with(".git") {
        format!("{}.git", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Shallow clone (depth=1) the default branch.
fn shallow_clone(url: &str, dest: &Path) -> Result<Repository> {
    let mut fo = FetchOptions::new();
    fo.depth(1);

    let mut builder = git2::build::RepoBuilder::new();
    builder.fetch_options(fo);

    builder.clone(url, dest).with_context(|| format!("Shallow clone from {url} failed"))
}

fn build_temp_repo_dir() -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or(0);
    let pid = std::process::id();
    env::temp_dir().join(format!("moltbook-gen-{pid}-{nanos}"))
}
