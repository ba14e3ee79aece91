//! moltbook-gen: Generate MoltBook listings from repositories
//!
//! This tool extracts metadata from a repository's package manifests and
//! README, then renders a normalized MoltBook listing as YAML, JSON, or
//! Markdown.

use anyhow::Result;

mod cli;
mod domain;
mod enhance;
mod extract;
mod fetch;
mod keywords;
mod normalize;
mod render;

fn main() -> Result<()> {
    cli::run()
}
