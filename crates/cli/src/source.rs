// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating the rules, templates, and scripts that `init` installs.
//!
//! A flowmates checkout recorded in `~/.flowmates/config.json` is preferred.
//! When it is missing or invalid, `~/.cursor/` is used instead.

use std::path::{Path, PathBuf};

use crate::config::{default_config_path, FlowmatesConfig};
use crate::install::count_with_extension;
use crate::report::InitReport;

const AGENT_TEMPLATE: &str = "templates/AGENT_REPO.template.md";

/// Where the installed files come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Flowmates,
    Cursor,
}

impl SourceKind {
    /// Name used in the summary report.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Flowmates => "Flowmates",
            SourceKind::Cursor => "~/.cursor/",
        }
    }
}

/// Resolved source directories.
#[derive(Debug, Clone)]
pub struct Source {
    pub kind: SourceKind,
    pub base_path: PathBuf,
    pub rules_path: PathBuf,
    pub templates_path: Option<PathBuf>,
    pub scripts_path: Option<PathBuf>,
}

impl Source {
    fn from_base(kind: SourceKind, base_path: PathBuf) -> Self {
        let templates_path = first_existing(&[
            base_path.join("issues/shared/templates"),
            base_path.join("docs/issues/templates"),
        ]);
        let scripts_path = match kind {
            SourceKind::Flowmates => Some(base_path.join("scripts")).filter(|p| p.exists()),
            SourceKind::Cursor => None,
        };
        Source {
            kind,
            rules_path: base_path.join("rules"),
            templates_path,
            scripts_path,
            base_path,
        }
    }

    /// Path of the `AGENT.md` template for this source.
    pub fn agent_template(&self) -> PathBuf {
        self.base_path.join(AGENT_TEMPLATE)
    }
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.exists()).cloned()
}

/// Find the source to install from, recording fallback warnings in `report`.
pub fn discover(home: &Path, report: &mut InitReport) -> Option<Source> {
    let config_path = default_config_path(home);
    if config_path.exists() {
        match FlowmatesConfig::load(&config_path) {
            Ok(config) if is_flowmates_repo(&config.repo_path) => {
                tracing::info!(repo = %config.repo_path.display(), "using flowmates repository");
                return Some(Source::from_base(SourceKind::Flowmates, config.repo_path));
            }
            Ok(config) => report.warn(format!(
                "Flowmates repository path invalid: {}. Using ~/.cursor/ as fallback.",
                config.repo_path.display()
            )),
            Err(e) => tracing::debug!("ignoring flowmates config: {}", e),
        }
    } else {
        report.warn("Flowmates repository not configured. Using ~/.cursor/ as fallback.");
    }

    let cursor_dir = home.join(".cursor");
    if cursor_dir.join("rules").exists() {
        tracing::info!(dir = %cursor_dir.display(), "using ~/.cursor/ fallback");
        return Some(Source::from_base(SourceKind::Cursor, cursor_dir));
    }

    None
}

/// A flowmates repository has a `rules/` directory with at least one `.mdc` file.
pub fn is_flowmates_repo(repo_path: &Path) -> bool {
    let rules_dir = repo_path.join("rules");
    rules_dir.is_dir() && count_with_extension(&rules_dir, "mdc") > 0
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
