// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;
use yare::parameterized;

#[test]
fn installs_everything_from_flowmates() {
    let env = Env::new().with_flowmates_repo().configured().git_root();

    env.echo()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Initialization Summary ==="))
        .stdout(predicate::str::contains("Source: Flowmates repository"))
        .stdout(predicate::str::contains("✓ core.mdc"))
        .stdout(predicate::str::contains("✓ issues/demo/proposal"))
        .stdout(predicate::str::contains("✓ Created .gitignore with .cursor entry"))
        .stdout(predicate::str::contains("✅ Git pre-commit hook installed"))
        .stdout(predicate::str::contains("✓ Created AGENT.md from template"))
        .stdout(predicate::str::contains("Project name detected: demo"))
        .stdout(predicate::str::contains("✓ Initialization completed successfully!"));

    let root = env.root();
    assert!(root.join(".cursor/rules/workflow.mdc").exists());
    for status in ["proposal", "todo", "in_progress", "done"] {
        assert!(root.join("issues/demo").join(status).is_dir());
    }
    assert!(root.join("issues/shared/templates/feature.md").exists());
    assert!(root.join("scripts/pre-commit-hook").exists());
    assert!(root.join(".git/hooks/pre-commit").exists());
    assert_eq!(read(&root.join("AGENT.md")), "# Agents for demo\n");
    assert!(read(&root.join(".gitignore")).contains(".cursor/"));
}

#[test]
fn second_run_reports_skips() {
    let env = Env::new().with_flowmates_repo().configured().git_root();
    env.echo().arg("init").assert().success();

    env.echo()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped rules (already exist):"))
        .stdout(predicate::str::contains("⊘ core.mdc"))
        .stdout(predicate::str::contains("⊘ .cursor already in .gitignore (skipped)"))
        .stdout(predicate::str::contains("Git pre-commit hook already exists (skipped)"))
        .stdout(predicate::str::contains("Created directories").not());
}

#[test]
fn force_marks_updates() {
    let env = Env::new().with_flowmates_repo().configured().git_root();
    env.echo().arg("init").assert().success();

    env.echo()
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ core.mdc (updated)"))
        .stdout(predicate::str::contains("✅ Git pre-commit hook updated"));
}

#[test]
fn directory_flag_targets_other_repo() {
    let env = Env::new().with_flowmates_repo().configured();

    env.echo()
        .current_dir(env.temp.path())
        .args(["-C", "demo", "init", "--skip-hooks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project name detected: demo"))
        .stdout(predicate::str::contains("Git hook installation skipped"));

    assert!(env.root().join(".cursor/rules/core.mdc").exists());
}

#[test]
fn directory_flag_resolves_parent() {
    let env = Env::new().with_flowmates_repo().configured();
    std::fs::create_dir_all(env.root().join("nested")).unwrap();

    env.echo()
        .current_dir(env.root().join("nested"))
        .args(["-C", "..", "init", "--skip-hooks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project name detected: demo"));

    assert!(env.root().join("issues/demo/todo").is_dir());
    assert!(!env.root().join("issues/project").exists());
}

#[test]
fn directory_flag_rejects_missing_directory() {
    let env = Env::new().with_flowmates_repo().configured();

    env.echo()
        .args(["-C", "missing", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot use directory"));

    assert!(!env.root().join("missing").exists());
}

#[test]
fn appends_to_existing_gitignore() {
    let env = Env::new().with_flowmates_repo().configured();
    write(&env.root().join(".gitignore"), "target/\n");

    env.echo()
        .args(["init", "--skip-hooks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Added .cursor entry to .gitignore"));

    similar_asserts::assert_eq!(
        read(&env.root().join(".gitignore")),
        "target/\n\n# Cursor agent state and cache\n.cursor/\n"
    );
}

#[test]
fn not_a_git_repository_still_succeeds() {
    let env = Env::new().with_flowmates_repo().configured();

    env.echo()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Not a git repository, skipping hook installation",
        ));
}

#[test]
fn falls_back_to_cursor_dir() {
    let env = Env::new();
    write(&env.home().join(".cursor/rules/core.mdc"), "core");
    write(
        &env.home().join(".cursor/docs/issues/templates/bug.md"),
        "# Bug",
    );

    env.echo()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Source: ~/.cursor/ repository"))
        .stdout(predicate::str::contains(
            "Flowmates repository not configured. Using ~/.cursor/ as fallback.",
        ))
        .stdout(predicate::str::contains("scripts/pre-commit-hook not found"))
        .stderr(predicate::str::contains("not configured").not());

    assert!(env.root().join("issues/shared/templates/bug.md").exists());
    assert!(!env.root().join("scripts").exists());
}

#[test]
fn invalid_flowmates_path_warns() {
    let env = Env::new().configured();
    write(&env.home().join(".cursor/rules/core.mdc"), "core");

    env.echo()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flowmates repository path invalid"));
}

#[test]
fn fails_without_any_source() {
    let env = Env::new();

    env.echo()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("~/.cursor/ unavailable"));
}

#[test]
fn fails_when_rules_cannot_be_installed() {
    let env = Env::new().with_flowmates_repo().configured();
    write(&env.root().join(".cursor/rules"), "a file, not a directory");

    env.echo()
        .args(["init", "--skip-hooks"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error copying rules"))
        .stdout(predicate::str::contains("Initialization completed with errors"))
        .stderr(predicate::str::contains("initialization completed with errors"));
}

#[parameterized(
    skip_agent = { &["init", "--skip-agent"], false },
    default = { &["init"], true },
)]
fn agent_file_creation(args: &[&str], created: bool) {
    let env = Env::new().with_flowmates_repo().configured();

    env.echo().args(args).assert().success();

    assert_eq!(env.root().join("AGENT.md").exists(), created);
}

#[test]
fn with_agent_overwrites_existing() {
    let env = Env::new().with_flowmates_repo().configured();
    write(&env.root().join("AGENT.md"), "stale");

    env.echo().args(["init", "--with-agent"]).assert().success();

    assert_eq!(read(&env.root().join("AGENT.md")), "# Agents for demo\n");
}

#[test]
fn conflicting_agent_flags_rejected() {
    let env = Env::new();

    env.echo()
        .args(["init", "--skip-agent", "--with-agent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
