//! Listing rendering (YAML, JSON, Markdown)

use crate::domain::{CanonicalListing, OutputFormat};
use anyhow::Result;

pub mod json;
pub mod markdown;
pub mod yaml;

/// Render a listing in the requested output format.
///
/// The format is a closed enum, so dispatch is total; only the JSON emitter
/// can fail, and only on an invariant violation.
pub fn render(listing: &CanonicalListing, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(yaml::render_yaml(listing)),
        OutputFormat::Json => json::render_json(listing),
        OutputFormat::Markdown => Ok(markdown::render_markdown(listing)),
    }
}
