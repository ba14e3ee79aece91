//! Generate command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::utils::parse_csv;
use crate::domain::{OutputFormat, ToolType};
use crate::enhance::enhance_description;
use crate::extract::extract_metadata;
use crate::fetch::{fetch_source, repo_name};
use crate::keywords::extract_keywords;
use crate::normalize::{normalize, Overrides};
use crate::render::render;

#[derive(Args)]
pub struct GenerateArgs {
    /// GitHub URL or local directory path
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Output file path (default: <repo-name>-moltbook.<ext>)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format: 'yaml', 'json', or 'markdown'
    #[arg(short, long, value_name = "FORMAT", default_value = "yaml")]
    pub format: String,

    /// Tool type (cli, library, web-app, service, plugin, mcp-server,
    /// github-action); auto-detected when omitted
    #[arg(long, value_name = "TYPE")]
    pub tool_type: Option<String>,

    /// Print the listing to stdout instead of writing a file
    #[arg(long)]
    pub preview: bool,

    /// Skip AI-powered description generation
    #[arg(long)]
    pub no_ai: bool,

    /// Anthropic API key for AI description enhancement
    #[arg(long, value_name = "KEY", env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the listing author
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Override the listing license
    #[arg(long, value_name = "SPDX")]
    pub license: Option<String>,

    /// Override the repository URL
    #[arg(long, value_name = "URL")]
    pub repository: Option<String>,

    /// Extra keywords to append (comma-separated)
    #[arg(short, long, value_name = "WORDS")]
    pub keywords: Option<String>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let format: OutputFormat = args.format.parse()?;
    let requested_type: Option<ToolType> =
        args.tool_type.as_deref().map(str::parse).transpose()?;

    let use_ai = !args.no_ai && args.api_key.is_some();
    if !args.no_ai && args.api_key.is_none() {
        warn!("no Anthropic API key provided; skipping AI description enhancement");
    }

    let repo = fetch_source(&args.source)?;
    debug!("extracting metadata from {}", repo.root_path.display());
    let mut raw = extract_metadata(&repo.root_path)?;

    let tool_type = requested_type.unwrap_or_else(|| ToolType::detect(&raw));
    info!("tool type: {tool_type}");

    if use_ai {
        let api_key = args.api_key.as_deref().unwrap_or_default();
        match enhance_description(api_key, &raw) {
            Ok(text) => {
                debug!("AI description: {text}");
                raw.ai_description = text;
            }
            // Enhancement is best-effort; fall back to the manifest description.
            Err(err) => warn!("AI description enhancement failed: {err:#}"),
        }
    }

    let mut keywords = extract_keywords(&raw);
    if let Some(extras) = parse_csv(&args.keywords) {
        for extra in extras {
            if !keywords.contains(&extra) {
                keywords.push(extra);
            }
        }
    }
    debug!("keywords: {}", keywords.join(", "));

    let overrides = Overrides {
        author: args.author.unwrap_or_default(),
        license: args.license.unwrap_or_default(),
        repository: args.repository.unwrap_or_default(),
    };

    let listing = normalize(&raw, tool_type, &keywords, &overrides);
    let rendered = render(&listing, format)?;

    if args.preview {
        println!("{rendered}");
        return Ok(());
    }

    let output_path = args.output.unwrap_or_else(|| {
        PathBuf::from(format!("{}-moltbook.{}", repo_name(&args.source), format.extension()))
    });
    fs::write(&output_path, &rendered)
        .with_context(|| format!("Failed writing listing to {}", output_path.display()))?;
    println!("Generated: {}", output_path.display());
    debug!("output size: {} bytes", rendered.len());

    Ok(())
}
