//! YAML listing emitter
//!
//! Hand-built rather than serialized: the comment header, fixed key order,
//! quoted-vs-block scalar handling, and conditional repository/homepage
//! lines are all part of the listing format.

use crate::domain::CanonicalListing;

pub fn render_yaml(listing: &CanonicalListing) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# MoltBook Listing".to_string());
    lines.push(format!("# Tool: {}", listing.name));
    lines.push(format!("# Generated: {}", listing.generated_at));
    lines.push(String::new());

    lines.push(format!("name: {}", listing.name));
    lines.push(format!("version: {}", listing.version));
    lines.push(format!("type: {}", listing.tool_type));
    lines.push(format!("language: {}", listing.language));
    lines.push(format!("author: {}", listing.author));
    lines.push(format!("license: {}", listing.license));
    lines.push(format!("status: {}", listing.status));
    lines.push(format!("last_updated: {}", listing.last_updated));

    push_sequence(&mut lines, "keywords", &listing.keywords);
    push_sequence(&mut lines, "features", &listing.features);

    push_scalar(&mut lines, "description", &listing.description);
    push_scalar(&mut lines, "installation", &listing.installation);
    push_scalar(&mut lines, "usage", &listing.usage);
    push_scalar(&mut lines, "requirements", &listing.requirements);

    // The only conditionally-present keys.
    if !listing.repository.is_empty() {
        lines.push(format!("repository: {}", listing.repository));
    }
    if !listing.homepage.is_empty() {
        lines.push(format!("homepage: {}", listing.homepage));
    }

    format!("{}\n", lines.join("\n"))
}

/// Emit a block sequence, or an explicit empty-sequence marker so the key is
/// never omitted.
fn push_sequence(lines: &mut Vec<String>, key: &str, items: &[String]) {
    if items.is_empty() {
        lines.push(format!("{key}: []"));
        return;
    }
    lines.push(format!("{key}:"));
    for item in items {
        lines.push(format!("  - {item}"));
    }
}

/// Emit a text field as a double-quoted scalar, or as a block literal when
/// it spans multiple lines.
fn push_scalar(lines: &mut Vec<String>, key: &str, value: &str) {
    if value.contains('\n') {
        lines.push(format!("{key}: |"));
        for line in value.lines() {
            lines.push(format!("  {line}"));
        }
    } else {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        lines.push(format!("{key}: \"{escaped}\""));
    }
}
