// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git pre-commit hook installation.
//!
//! The hook body is the repository's own `scripts/pre-commit-hook`, which
//! `init` copies from the flowmates checkout.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::git::find_git_dir;
use crate::report::InitReport;

/// Script installed as the pre-commit hook, relative to the repository root.
pub const HOOK_SCRIPT: &str = "scripts/pre-commit-hook";

/// Outcome of hook installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookAction {
    Installed,
    Updated,
    /// A hook already exists and `--force` was not given.
    Skipped,
    /// `scripts/pre-commit-hook` is missing.
    NotFound,
    NotGit,
    /// `--skip-hooks` was given.
    Disabled,
}

/// Install `scripts/pre-commit-hook` as `.git/hooks/pre-commit`.
///
/// Copy failures are recorded as report errors; failing to mark the hook
/// executable is only a warning.
pub fn install_pre_commit(root: &Path, force: bool, report: &mut InitReport) -> Option<HookAction> {
    let script = root.join(HOOK_SCRIPT);
    if !script.exists() {
        return Some(HookAction::NotFound);
    }

    let git_dir = match find_git_dir(root) {
        Ok(dir) => dir,
        Err(e) => {
            tracing::debug!("skipping hook installation: {}", e);
            return Some(HookAction::NotGit);
        }
    };

    let hooks_dir = git_dir.join("hooks");
    let hook = hooks_dir.join("pre-commit");
    let existed = hook.exists();
    if existed && !force {
        return Some(HookAction::Skipped);
    }

    if let Err(e) = fs::create_dir_all(&hooks_dir).and_then(|_| fs::copy(&script, &hook)) {
        report.error(format!("Failed to copy git hook: {}", e));
        return None;
    }

    if let Err(e) = fs::set_permissions(&hook, fs::Permissions::from_mode(0o755)) {
        report.warn(format!("Failed to make hook executable: {}", e));
    }

    tracing::info!(hook = %hook.display(), "installed pre-commit hook");
    Some(if existed {
        HookAction::Updated
    } else {
        HookAction::Installed
    })
}

#[cfg(test)]
#[path = "git_hooks_tests.rs"]
mod tests;
