//! Local path validation

use crate::fetch::RepoContext;
use anyhow::{Context, Result};
use std::path::Path;

pub fn validate_local_path(path: &Path) -> Result<RepoContext> {
    let canonical = path
        .canonicalize()
        .with_context(|| format!("Directory not found: {}", path.display()))?;

    if !canonical.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    Ok(RepoContext::new(canonical, false))
}

#[cfg(test)]
mod tests {
    use super::validate_local_path;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn accepts_existing_directory() {
        let temp = TempDir::new().expect("tmp");
        let ctx = validate_local_path(temp.path()).expect("valid path");
        assert!(!ctx.is_temp);
        assert!(ctx.root_path.is_dir());
    }

    #[test]
    fn rejects_missing_directory() {
        let err = validate_local_path(Path::new("/no/such/directory")).unwrap_err();
        assert!(err.to_string().contains("Directory not found"));
    }

    #[test]
    fn rejects_plain_file() {
        let temp = TempDir::new().expect("tmp");
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").expect("write");
        let err = validate_local_path(&file).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
