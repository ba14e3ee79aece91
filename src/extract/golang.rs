//! go.mod parsing (Go projects)

use crate::domain::RawMetadata;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::debug;

static MODULE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^module\s+(\S+)").expect("valid module regex"));

pub fn parse(root: &Path, raw: &mut RawMetadata) {
    let content = match std::fs::read_to_string(root.join("go.mod")) {
        Ok(content) => content,
        Err(err) => {
            debug!("skipping go.mod: {err}");
            return;
        }
    };

    if let Some(captures) = MODULE_LINE.captures(&content) {
        let module = &captures[1];
        // Module paths look like github.com/owner/name; the listing name is
        // the last segment.
        raw.name = module.rsplit('/').next().unwrap_or(module).to_string();
    }
    raw.language = "Go".to_string();

    if root.join("main.go").exists() || root.join("cmd").is_dir() {
        raw.has_bin = true;
        raw.cli_commands = vec![raw.name.clone()];
    }
}
