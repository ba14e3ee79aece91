//! Markdown listing emitter

use crate::domain::CanonicalListing;

pub fn render_markdown(listing: &CanonicalListing) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {} v{}\n\n", listing.name, listing.version));

    // Description as a block quote; continuation lines keep the quote marker.
    for line in listing.description.lines() {
        out.push_str(&format!("> {line}\n"));
    }
    out.push('\n');

    out.push_str(&format!(
        "**Type:** {} | **Language:** {} | **License:** {}\n\n",
        listing.tool_type, listing.language, listing.license
    ));

    if !listing.keywords.is_empty() {
        let tags: Vec<String> = listing.keywords.iter().map(|kw| format!("`{kw}`")).collect();
        out.push_str(&format!("**Keywords:** {}\n\n", tags.join(" ")));
    }

    let fence = fence_tag(&listing.language);
    out.push_str("## Installation\n\n");
    out.push_str(&format!("```{fence}\n{}\n```\n\n", listing.installation));

    out.push_str("## Usage\n\n");
    out.push_str(&format!("```{fence}\n{}\n```\n\n", listing.usage));

    out.push_str("## Features\n\n");
    if listing.features.is_empty() {
        out.push_str("_No features listed._\n\n");
    } else {
        for feature in &listing.features {
            out.push_str(&format!("- {feature}\n"));
        }
        out.push('\n');
    }

    out.push_str("## Requirements\n\n");
    out.push_str(&format!("- {}\n\n", listing.requirements));

    out.push_str("---\n\n");
    out.push_str(&format!("**Author:** {}\n", listing.author));
    let repository =
        if listing.repository.is_empty() { "_Not specified_" } else { listing.repository.as_str() };
    out.push_str(&format!("**Repository:** {repository}\n"));
    out.push_str(&format!("**Last updated:** {}\n", listing.last_updated));
    out.push_str(&format!("**Generated:** {}\n", listing.generated_at));

    out
}

/// Fence language tag for the installation/usage code blocks.
///
/// Install and usage snippets are shell commands regardless of the project
/// language, so every recognized language maps to "bash"; the table is the
/// seam for any future non-shell mapping.
fn fence_tag(language: &str) -> &'static str {
    let lang = language.to_lowercase();
    match lang.as_str() {
        "python" | "javascript" | "typescript" | "rust" | "go" => "bash",
        _ => "bash",
    }
}
