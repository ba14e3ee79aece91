//! Info command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::domain::ToolType;
use crate::extract::extract_metadata;
use crate::keywords::extract_keywords;

#[derive(Args)]
pub struct InfoArgs {
    /// Local directory path to analyze
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let root = args.path.canonicalize()?;
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    let raw = extract_metadata(&root)?;
    let tool_type = ToolType::detect(&raw);
    let keywords = extract_keywords(&raw);

    println!("Repository: {}", raw.name);
    println!("Language: {}", if raw.language.is_empty() { "Unknown" } else { raw.language.as_str() });
    if !raw.version.is_empty() {
        println!("Version: {}", raw.version);
    }
    if !raw.description.is_empty() {
        println!("Description: {}", raw.description);
    }
    if !raw.author.is_empty() {
        println!("Author: {}", raw.author);
    }
    println!("Detected tool type: {tool_type}");

    if !raw.cli_commands.is_empty() {
        println!("CLI commands: {}", raw.cli_commands.join(", "));
    }
    println!("Dependencies: {}", raw.dependencies.len());

    if !raw.features.is_empty() {
        println!("Features:");
        for feature in &raw.features {
            println!("  - {feature}");
        }
    }

    if !keywords.is_empty() {
        println!("Keywords: {}", keywords.join(", "));
    }

    if !raw.readme_excerpt.is_empty() {
        println!("README excerpt:");
        println!("  {}", raw.readme_excerpt);
    }

    Ok(())
}
