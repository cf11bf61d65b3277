//! Integration tests for the document-mcp command line

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Run the binary from an empty directory so no stray config file is picked up
fn document_mcp(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("document-mcp").expect("Failed to find document-mcp binary");
    cmd.current_dir(dir.path())
        .env_remove("DOCUMENT_MCP_SERVER_NAME")
        .env_remove("DOCUMENT_MCP_LOG_LEVEL")
        .env_remove("DOCUMENT_MCP_SEED_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_list_prints_seeded_identifiers() {
    let dir = TempDir::new().unwrap();
    document_mcp(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout("deposition.md\nreport.pdf\nfinancials.docx\noutlook.pdf\nplan.md\nspec.txt\n");
}

#[test]
fn test_read_prints_document() {
    let dir = TempDir::new().unwrap();
    document_mcp(&dir)
        .args(["read", "financials.docx"])
        .assert()
        .success()
        .stdout("These financials outline the project's budget and expenditures.\n");
}

#[test]
fn test_read_missing_document_fails() {
    let dir = TempDir::new().unwrap();
    document_mcp(&dir)
        .args(["read", "missing.pdf"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Doc with id missing.pdf not found"));
}

#[test]
fn test_prompt_renders_document() {
    let dir = TempDir::new().unwrap();
    document_mcp(&dir)
        .args(["prompt", "format_markdown", "plan.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plan.md"))
        .stdout(predicate::str::contains(
            "The plan outlines the steps for the project's implementation.",
        ))
        .stdout(predicate::str::contains("edit_document"));
}

#[test]
fn test_unknown_prompt_is_usage_error() {
    let dir = TempDir::new().unwrap();
    document_mcp(&dir)
        .args(["prompt", "translate", "plan.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("translate"));
}

#[test]
fn test_config_seed_file_replaces_documents() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("seed.yaml"),
        "- id: notes.txt\n  content: First notes.\n- id: minutes.md\n  content: Meeting minutes.\n",
    )
    .unwrap();
    let config = dir.path().join("custom.yaml");
    fs::write(&config, "seed_file: seed.yaml\n").unwrap();

    document_mcp(&dir)
        .arg("list")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("notes.txt\nminutes.md\n");
}

#[test]
fn test_discovered_config_file_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("seed.yaml"),
        "- id: only.txt\n  content: The only document.\n",
    )
    .unwrap();
    fs::write(dir.path().join("document-mcp.yaml"), "seed_file: seed.yaml\n").unwrap();

    document_mcp(&dir)
        .args(["read", "only.txt"])
        .assert()
        .success()
        .stdout("The only document.\n");
}

#[test]
fn test_broken_discovered_config_warns_and_falls_back() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("document-mcp.yaml"), "servername: typo\n").unwrap();

    document_mcp(&dir)
        .env("HOME", dir.path())
        .args(["list", "--verbose"])
        .assert()
        .success()
        .stdout("deposition.md\nreport.pdf\nfinancials.docx\noutlook.pdf\nplan.md\nspec.txt\n")
        .stderr(predicate::str::contains("Ignoring configuration file"))
        .stderr(predicate::str::contains("document-mcp.yaml"));
}

#[test]
fn test_invalid_config_exits_with_config_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.yaml");
    fs::write(&config, "log_level: loud\n").unwrap();

    document_mcp(&dir)
        .arg("list")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("log_level"));
}

#[test]
fn test_missing_config_file_exits_with_config_error() {
    let dir = TempDir::new().unwrap();
    document_mcp(&dir)
        .args(["list", "--config", "does-not-exist.yaml"])
        .assert()
        .code(2);
}

#[test]
fn test_duplicate_seed_ids_exit_with_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("seed.yaml"),
        "- id: a.txt\n  content: one\n- id: a.txt\n  content: two\n",
    )
    .unwrap();

    document_mcp(&dir)
        .arg("list")
        .env("DOCUMENT_MCP_SEED_FILE", dir.path().join("seed.yaml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("a.txt"));
}
