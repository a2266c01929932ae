// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// A temporary home directory, flowmates checkout, and target repository.
pub struct Env {
    pub temp: TempDir,
}

impl Env {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("home")).unwrap();
        fs::create_dir_all(temp.path().join("demo")).unwrap();
        Env { temp }
    }

    pub fn home(&self) -> PathBuf {
        self.temp.path().join("home")
    }

    /// The repository being initialized.
    pub fn root(&self) -> PathBuf {
        self.temp.path().join("demo")
    }

    pub fn flowmates(&self) -> PathBuf {
        self.temp.path().join("flowmates")
    }

    /// `echo` with `ECHO_HOME` pointing at the temp home and cwd at the target.
    pub fn echo(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("echo");
        cmd.env("ECHO_HOME", self.home())
            .env_remove("ECHO_LOG")
            .env("NO_COLOR", "1")
            .current_dir(self.root());
        cmd
    }

    /// Populate a flowmates checkout with rules, templates, scripts, and an
    /// AGENT.md template.
    pub fn with_flowmates_repo(self) -> Self {
        let repo = self.flowmates();
        write(&repo.join("rules/core.mdc"), "core");
        write(&repo.join("rules/workflow.mdc"), "workflow");
        write(&repo.join("issues/shared/templates/feature.md"), "# Feature");
        write(&repo.join("scripts/pre-commit-hook"), "#!/bin/sh\nexit 0\n");
        write(&repo.join("scripts/validate-workflow-state.py"), "print('ok')\n");
        write(
            &repo.join("templates/AGENT_REPO.template.md"),
            "# Agents for {{PROJECT_NAME}}\n",
        );
        git_init(&repo);
        self
    }

    /// Record the flowmates checkout in `~/.flowmates/config.json`.
    pub fn configured(self) -> Self {
        let config = format!(
            "{{\n  \"repo_path\": {}\n}}\n",
            serde_json::to_string(&self.flowmates()).unwrap()
        );
        write(&self.home().join(".flowmates/config.json"), &config);
        self
    }

    /// Turn the target into a git repository.
    pub fn git_root(self) -> Self {
        git_init(&self.root());
        self
    }
}

pub fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

pub fn git_init(path: &Path) {
    std::process::Command::new("git")
        .current_dir(path)
        .args(["init", "--quiet"])
        .output()
        .unwrap();
}
