// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn test_render_replaces_every_placeholder() {
    let out = render("# {{PROJECT_NAME}}\n\nWelcome to {{PROJECT_NAME}}.", "echo");
    assert_eq!(out, "# echo\n\nWelcome to echo.");
}

#[test]
fn test_render_without_placeholder() {
    assert_eq!(render("static", "echo"), "static");
}

#[test]
fn test_write_creates_file() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("AGENT_REPO.template.md");
    fs::write(&template, "Project: {{PROJECT_NAME}}\n").unwrap();

    assert!(write(temp.path(), &template, "echo", false).unwrap());
    assert_eq!(
        fs::read_to_string(temp.path().join(AGENT_FILE_NAME)).unwrap(),
        "Project: echo\n"
    );
}

#[test]
fn test_write_keeps_existing_unless_overwrite() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("AGENT_REPO.template.md");
    fs::write(&template, "fresh").unwrap();
    fs::write(temp.path().join(AGENT_FILE_NAME), "mine").unwrap();

    assert!(!write(temp.path(), &template, "echo", false).unwrap());
    assert_eq!(
        fs::read_to_string(temp.path().join(AGENT_FILE_NAME)).unwrap(),
        "mine"
    );

    assert!(write(temp.path(), &template, "echo", true).unwrap());
    assert_eq!(
        fs::read_to_string(temp.path().join(AGENT_FILE_NAME)).unwrap(),
        "fresh"
    );
}

#[test]
fn test_write_missing_template() {
    let temp = TempDir::new().unwrap();
    let err = write(temp.path(), &temp.path().join("nope.md"), "echo", false).unwrap_err();
    assert!(err.to_string().contains("Failed to read template"));
}
