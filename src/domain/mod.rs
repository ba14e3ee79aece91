//! Shared value types for listings
//!
//! `RawMetadata` is what the extractor gathers from a repository;
//! `CanonicalListing` is the fully-defaulted record every emitter consumes.

use serde::Serialize;
use thiserror::Error;

/// Maximum number of keywords carried into a listing.
pub const MAX_KEYWORDS: usize = 10;

/// Maximum number of features carried into a listing.
pub const MAX_FEATURES: usize = 5;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("unsupported output format: '{0}' (expected yaml, json, or markdown)")]
    UnsupportedFormat(String),

    #[error(
        "unknown tool type: '{0}' (expected cli, library, web-app, service, plugin, mcp-server, or github-action)"
    )]
    UnknownToolType(String),
}

/// Sparsely-populated repository metadata gathered by the extractor.
///
/// No field is guaranteed to be filled in; downstream code must treat an
/// empty string or empty vec as "absent" and fall back to a default.
#[derive(Debug, Clone, Default)]
pub struct RawMetadata {
    pub name: String,
    pub description: String,
    pub version: String,
    pub language: String,
    pub author: String,
    pub homepage: String,
    pub repository: String,
    pub dependencies: Vec<String>,
    pub features: Vec<String>,
    pub cli_commands: Vec<String>,
    pub readme_excerpt: String,
    pub ai_description: String,
    pub has_bin: bool,
    pub has_web_framework: bool,
    pub has_server: bool,
    pub has_daemon: bool,
}

/// Category describing how a repository is meant to be installed and used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolType {
    Cli,
    Library,
    WebApp,
    Service,
    Plugin,
    McpServer,
    GithubAction,
}

impl ToolType {
    /// Auto-detect the tool type from extracted metadata.
    ///
    /// Precedence: CLI indicators, then web framework, then server/daemon
    /// hints, then a "plugin" name, defaulting to library.
    pub fn detect(raw: &RawMetadata) -> Self {
        if raw.has_bin || !raw.cli_commands.is_empty() {
            ToolType::Cli
        } else if raw.has_web_framework {
            ToolType::WebApp
        } else if raw.has_server || raw.has_daemon {
            ToolType::Service
        } else if raw.name.to_lowercase().contains("plugin") {
            ToolType::Plugin
        } else {
            ToolType::Library
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolType::Cli => "cli",
            ToolType::Library => "library",
            ToolType::WebApp => "web-app",
            ToolType::Service => "service",
            ToolType::Plugin => "plugin",
            ToolType::McpServer => "mcp-server",
            ToolType::GithubAction => "github-action",
        }
    }
}

impl std::fmt::Display for ToolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ToolType {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cli" => Ok(ToolType::Cli),
            "library" => Ok(ToolType::Library),
            "web-app" => Ok(ToolType::WebApp),
            "service" => Ok(ToolType::Service),
            "plugin" => Ok(ToolType::Plugin),
            "mcp-server" => Ok(ToolType::McpServer),
            "github-action" => Ok(ToolType::GithubAction),
            other => Err(ListingError::UnknownToolType(other.to_string())),
        }
    }
}

/// Output syntax for a rendered listing.
///
/// This is a closed set: an unrecognized format name is rejected at the
/// boundary instead of silently falling back to YAML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
    Markdown,
}

impl OutputFormat {
    /// File extension used for default output file names.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            other => Err(ListingError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Fully-normalized listing record.
///
/// Every field is present and non-empty apart from `repository` and
/// `homepage`, which may legitimately be empty. Field declaration order is
/// the JSON key order; `generated_at` stays last.
#[derive(Debug, Clone, Serialize)]
pub struct CanonicalListing {
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub language: String,
    pub keywords: Vec<String>,
    pub description: String,
    pub installation: String,
    pub usage: String,
    pub requirements: String,
    pub features: Vec<String>,
    pub author: String,
    pub license: String,
    pub repository: String,
    pub homepage: String,
    pub status: String,
    pub last_updated: String,
    pub generated_at: String,
}
