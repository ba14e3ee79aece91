//! JSON listing emitter

use crate::domain::CanonicalListing;
use anyhow::{Context, Result};

/// Serialize the listing as pretty-printed JSON.
///
/// Key order follows the struct declaration, so `generated_at` is always the
/// last key. Every field is present, including empty repository/homepage.
/// Non-ASCII text is emitted literally; serde_json does not escape it.
pub fn render_json(listing: &CanonicalListing) -> Result<String> {
    let text = serde_json::to_string_pretty(listing)
        .context("Failed serializing listing to JSON (invariant violation)")?;
    Ok(format!("{text}\n"))
}
