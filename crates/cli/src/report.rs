// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Summary report collected while running `echo init`.

use std::fmt;

use crate::gitignore::GitignoreAction;
use crate::git_hooks::HookAction;
use crate::install::{CopyOutcome, Copied};
use crate::source::SourceKind;

/// Everything `init` did, skipped, or failed at.
#[derive(Debug, Default)]
pub struct InitReport {
    pub project_name: String,
    pub source: Option<SourceKind>,
    pub created_dirs: Vec<String>,
    pub rules: Vec<Copied>,
    pub templates: Vec<Copied>,
    pub scripts: Vec<Copied>,
    pub gitignore: Option<GitignoreAction>,
    pub hook: Option<HookAction>,
    pub agent_created: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl InitReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(warning = %message, "init report");
        self.warnings.push(message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(error = %message, "init report");
        self.errors.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

fn written(items: &[Copied]) -> Vec<String> {
    items
        .iter()
        .filter_map(|c| match c.outcome {
            CopyOutcome::Created => Some(c.name.clone()),
            CopyOutcome::Updated => Some(format!("{} (updated)", c.name)),
            CopyOutcome::Skipped => None,
        })
        .collect()
}

fn skipped(items: &[Copied]) -> Vec<String> {
    items
        .iter()
        .filter(|c| c.outcome == CopyOutcome::Skipped)
        .map(|c| c.name.clone())
        .collect()
}

fn section(f: &mut fmt::Formatter<'_>, title: &str, mark: &str, lines: &[String]) -> fmt::Result {
    if lines.is_empty() {
        return Ok(());
    }
    writeln!(f, "{}:", title)?;
    for line in lines {
        writeln!(f, "  {} {}", mark, line)?;
    }
    writeln!(f)
}

impl fmt::Display for InitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Initialization Summary ===\n")?;

        if let Some(source) = self.source {
            writeln!(f, "Source: {} repository\n", source.label())?;
        }

        section(f, "Created directories", "✓", &self.created_dirs)?;
        section(f, "Copied/Updated rules", "✓", &written(&self.rules))?;
        section(f, "Skipped rules (already exist)", "⊘", &skipped(&self.rules))?;
        section(f, "Copied/Updated templates", "✓", &written(&self.templates))?;
        section(
            f,
            "Skipped templates (already exist)",
            "⊘",
            &skipped(&self.templates),
        )?;
        section(f, "Copied/Updated scripts", "✓", &written(&self.scripts))?;
        section(f, "Skipped scripts (already exist)", "⊘", &skipped(&self.scripts))?;

        if let Some(action) = self.gitignore {
            let line = match action {
                GitignoreAction::Created => "✓ Created .gitignore with .cursor entry",
                GitignoreAction::Added => "✓ Added .cursor entry to .gitignore",
                GitignoreAction::Skipped => "⊘ .cursor already in .gitignore (skipped)",
            };
            writeln!(f, "{}\n", line)?;
        }

        if let Some(action) = self.hook {
            let line = match action {
                HookAction::Installed => "✅ Git pre-commit hook installed",
                HookAction::Updated => "✅ Git pre-commit hook updated",
                HookAction::Skipped => "⚠️  Git pre-commit hook already exists (skipped)",
                HookAction::NotFound => "⚠️  scripts/pre-commit-hook not found. Run init from flowmates repo or ensure scripts/ directory is available.",
                HookAction::NotGit => "⚠️  Not a git repository, skipping hook installation",
                HookAction::Disabled => "⊘ Git hook installation skipped (--skip-hooks)",
            };
            writeln!(f, "{}\n", line)?;
        }

        if self.agent_created {
            writeln!(f, "✓ Created AGENT.md from template\n")?;
        }

        section(f, "Warnings", "⚠", &self.warnings)?;
        section(f, "Errors", "✗", &self.errors)?;

        writeln!(f, "Project name detected: {}\n", self.project_name)?;

        if self.has_errors() {
            write!(
                f,
                "⚠ Initialization completed with errors. Please review above."
            )
        } else {
            writeln!(f, "✓ Initialization completed successfully!")?;
            writeln!(f, "\nNext steps:")?;
            write!(f, "  - Run `load-context` to bootstrap repository context")
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
