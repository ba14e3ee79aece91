//! Source acquisition (local directories, GitHub URLs)

use anyhow::Result;
use std::path::Path;

pub mod context;
pub mod github;
pub mod local;

pub use context::RepoContext;

/// Materialize a source argument as a local repository root.
///
/// An `http://`/`https://` source is cloned into a temp directory that the
/// returned [`RepoContext`] removes on drop; anything else is validated as
/// an existing local directory.
pub fn fetch_source(source: &str) -> Result<RepoContext> {
    if source.starts_with("http://") || source.starts_with("https://") {
        github::clone_repository(source)
    } else {
        local::validate_local_path(Path::new(source))
    }
}

/// Derive the repository name used in default output file names.
///
/// URLs keep their last path segment with any `.git` suffix stripped; local
/// paths use the directory name.
pub fn repo_name(source: &str) -> String {
    if source.starts_with("http://") || source.starts_with("https://") {
        let last = source.trim_end_matches('/').rsplit('/').next().unwrap_or(source);
        last.trim_end_matches(".git").to_string()
    } else {
        Path::new(source)
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "listing".to_string())
    }
}
