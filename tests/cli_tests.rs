//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn moltbook_gen() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("moltbook-gen"));
    cmd.env_remove("ANTHROPIC_API_KEY");
    cmd
}

/// Build a small Python project fixture with a manifest and README.
fn python_fixture() -> TempDir {
    let temp = TempDir::new().expect("temp repo dir");
    fs::write(
        temp.path().join("pyproject.toml"),
        r#"[project]
name = "demo-tool"
version = "0.3.1"
description = "Demonstrates things on demand."
authors = [{ name = "Alice" }]
dependencies = ["requests>=2.0"]

[project.scripts]
demo-tool = "demo_tool.cli:main"
"#,
    )
    .expect("write pyproject.toml");
    fs::write(
        temp.path().join("README.md"),
        "# demo-tool\n\nDemonstrates things on demand for developers.\n\n## Features\n\n- Fast demos\n- Zero setup\n",
    )
    .expect("write README.md");
    temp
}

#[test]
fn test_cli_version() {
    let mut cmd = moltbook_gen();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("moltbook-gen"));
}

#[test]
fn test_cli_help() {
    let mut cmd = moltbook_gen();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generate MoltBook listings"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("info"));
}

#[test]
fn test_generate_rejects_missing_directory() {
    let mut cmd = moltbook_gen();
    cmd.args(["generate", "/no/such/directory", "--no-ai", "--preview"]);
    cmd.assert().failure().stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn test_generate_rejects_unsupported_format() {
    let repo = python_fixture();
    let mut cmd = moltbook_gen();
    cmd.args([
        "generate",
        repo.path().to_str().expect("utf8 path"),
        "--no-ai",
        "--preview",
        "--format",
        "xml",
    ]);
    cmd.assert().failure().stderr(predicate::str::contains("unsupported output format"));
}

#[test]
fn test_generate_rejects_unknown_tool_type() {
    let repo = python_fixture();
    let mut cmd = moltbook_gen();
    cmd.args([
        "generate",
        repo.path().to_str().expect("utf8 path"),
        "--no-ai",
        "--preview",
        "--tool-type",
        "desktop-app",
    ]);
    cmd.assert().failure().stderr(predicate::str::contains("unknown tool type"));
}

#[test]
fn test_generate_preview_yaml() {
    let repo = python_fixture();
    let mut cmd = moltbook_gen();
    cmd.args(["generate", repo.path().to_str().expect("utf8 path"), "--no-ai", "--preview"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("# MoltBook Listing"))
        .stdout(predicate::str::contains("name: demo-tool"))
        .stdout(predicate::str::contains("version: 0.3.1"))
        .stdout(predicate::str::contains("type: cli"))
        .stdout(predicate::str::contains("installation: \"pip install demo-tool\""))
        .stdout(predicate::str::contains("usage: \"demo-tool --help\""))
        .stdout(predicate::str::contains("- Fast demos"));
}

#[test]
fn test_generate_json_output_file() {
    let repo = python_fixture();
    let out = TempDir::new().expect("temp out dir");
    let out_path = out.path().join("listing.json");

    let mut cmd = moltbook_gen();
    cmd.args([
        "generate",
        repo.path().to_str().expect("utf8 path"),
        "--no-ai",
        "--format",
        "json",
        "-o",
        out_path.to_str().expect("utf8 out path"),
    ]);
    cmd.assert().success().stdout(predicate::str::contains("Generated:"));

    let content = fs::read_to_string(&out_path).expect("read listing");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(doc["name"].as_str(), Some("demo-tool"));
    assert_eq!(doc["version"].as_str(), Some("0.3.1"));
    assert_eq!(doc["type"].as_str(), Some("cli"));
    assert_eq!(doc["author"].as_str(), Some("Alice"));
    assert_eq!(doc["requirements"].as_str(), Some("Python >= 3.9"));
    let features = doc["features"].as_array().expect("features array");
    assert_eq!(features.len(), 2);
}

#[test]
fn test_generate_markdown_output_file() {
    let repo = python_fixture();
    let out = TempDir::new().expect("temp out dir");
    let out_path = out.path().join("listing.md");

    let mut cmd = moltbook_gen();
    cmd.args([
        "generate",
        repo.path().to_str().expect("utf8 path"),
        "--no-ai",
        "--format",
        "markdown",
        "-o",
        out_path.to_str().expect("utf8 out path"),
    ]);
    cmd.assert().success();

    let content = fs::read_to_string(&out_path).expect("read listing");
    assert!(content.starts_with("# demo-tool v0.3.1"));
    assert!(content.contains("## Installation"));
    assert!(content.contains("pip install demo-tool"));
    assert!(content.contains("- Fast demos"));
}

#[test]
fn test_generate_default_output_name() {
    let repo = python_fixture();
    let workdir = TempDir::new().expect("temp workdir");

    let mut cmd = moltbook_gen();
    cmd.current_dir(workdir.path());
    cmd.args(["generate", repo.path().to_str().expect("utf8 path"), "--no-ai"]);
    cmd.assert().success();

    let repo_dir_name = repo.path().file_name().and_then(|n| n.to_str()).expect("dir name");
    let expected = workdir.path().join(format!("{repo_dir_name}-moltbook.yaml"));
    assert!(expected.exists(), "default output file should exist at {}", expected.display());
}

#[test]
fn test_generate_applies_overrides() {
    let repo = python_fixture();
    let out = TempDir::new().expect("temp out dir");
    let out_path = out.path().join("listing.json");

    let mut cmd = moltbook_gen();
    cmd.args([
        "generate",
        repo.path().to_str().expect("utf8 path"),
        "--no-ai",
        "--format",
        "json",
        "--author",
        "Bob",
        "--license",
        "Apache-2.0",
        "--keywords",
        "extra-one,extra-two",
        "-o",
        out_path.to_str().expect("utf8 out path"),
    ]);
    cmd.assert().success();

    let content = fs::read_to_string(&out_path).expect("read listing");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(doc["author"].as_str(), Some("Bob"));
    assert_eq!(doc["license"].as_str(), Some("Apache-2.0"));
    let keywords: Vec<&str> = doc["keywords"]
        .as_array()
        .expect("keywords array")
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert!(keywords.len() <= 10);
}

#[test]
fn test_info_reports_metadata() {
    let repo = python_fixture();
    let mut cmd = moltbook_gen();
    cmd.args(["info", repo.path().to_str().expect("utf8 path")]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Repository: demo-tool"))
        .stdout(predicate::str::contains("Language: Python"))
        .stdout(predicate::str::contains("Detected tool type: cli"))
        .stdout(predicate::str::contains("- Fast demos"));
}

#[test]
fn test_info_rejects_file_path() {
    let temp = TempDir::new().expect("tmp");
    let file = temp.path().join("plain.txt");
    fs::write(&file, "x").expect("write");

    let mut cmd = moltbook_gen();
    cmd.args(["info", file.to_str().expect("utf8 path")]);
    cmd.assert().failure();
}

#[test]
fn test_generate_empty_repository_still_succeeds() {
    let repo = TempDir::new().expect("temp repo dir");
    fs::create_dir(repo.path().join("empty-project")).expect("mkdir");
    let project = repo.path().join("empty-project");

    let mut cmd = moltbook_gen();
    cmd.args(["generate", project.to_str().expect("utf8 path"), "--no-ai", "--preview"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("name: empty-project"))
        .stdout(predicate::str::contains("version: 0.1.0"))
        .stdout(predicate::str::contains("language: Unknown"))
        .stdout(predicate::str::contains("keywords: []"));
}
