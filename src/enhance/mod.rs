//! AI description enhancement via the Anthropic Messages API
//!
//! Optional collaborator: the caller treats any failure here as "no
//! enhancement" and falls back to the manifest description.

use crate::domain::RawMetadata;
use anyhow::{Context, Result};
use serde_json::json;
use std::time::Duration;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MODEL: &str = "claude-3-5-sonnet-20241022";
const MAX_TOKENS: u32 = 150;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Ask the model for a concise 1-2 sentence listing description.
pub fn enhance_description(api_key: &str, raw: &RawMetadata) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed building HTTP client")?;

    let body = json!({
        "model": MODEL,
        "max_tokens": MAX_TOKENS,
        "messages": [{"role": "user", "content": build_prompt(raw)}],
    });

    let response = client
        .post(API_URL)
        .header("x-api-key", api_key)
        .header("anthropic-version", API_VERSION)
        .json(&body)
        .send()
        .context("Anthropic API request failed")?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("Anthropic API returned status {status}");
    }

    let doc: serde_json::Value =
        response.json().context("Failed decoding Anthropic API response")?;
    let text = doc["content"][0]["text"]
        .as_str()
        .context("Anthropic API response carried no text content")?;

    Ok(text.trim().to_string())
}

fn build_prompt(raw: &RawMetadata) -> String {
    let describe = |value: &str, fallback: &str| -> String {
        if value.is_empty() {
            fallback.to_string()
        } else {
            value.to_string()
        }
    };

    let context = format!(
        "Repository: {}\nDescription: {}\nREADME excerpt: {}\nLanguage: {}\nFeatures: {}",
        describe(&raw.name, "Unknown"),
        describe(&raw.description, "No description"),
        describe(&raw.readme_excerpt, "No README"),
        describe(&raw.language, "Unknown"),
        raw.features.join(", "),
    );

    format!(
        "Given this repository information, generate a concise, compelling listing description.\n\n\
         {context}\n\n\
         Requirements:\n\
         - 1-2 sentences maximum\n\
         - Focus on what the tool does and its key benefit\n\
         - Use active voice\n\
         - Be specific and concrete\n\
         - Avoid marketing fluff\n\
         - Target developers as the audience\n\n\
         Generate only the description, no preamble:"
    )
}
