// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue workflow directory structure.
//!
//! Issue records are markdown files that move between the status
//! directories by hand:
//!
//! ```text
//! issues/
//!   <project>/
//!     proposal/
//!     todo/
//!     in_progress/
//!     done/
//!   shared/
//!     templates/
//! ```

use std::fs;
use std::path::Path;

use crate::error::{IoContext, Result};
use crate::install::count_with_extension;
use crate::report::InitReport;

/// Status directories, in workflow order.
pub const STATUSES: [&str; 4] = ["proposal", "todo", "in_progress", "done"];

/// Shared issue templates, relative to the repository root.
pub const TEMPLATES_DIR: &str = "issues/shared/templates";

/// Installed rules, relative to the repository root.
pub const RULES_DIR: &str = ".cursor/rules";

/// Every directory the workflow requires, relative to the repository root.
pub fn required_dirs(project: &str) -> Vec<String> {
    STATUSES
        .iter()
        .map(|status| format!("issues/{}/{}", project, status))
        .chain(std::iter::once(TEMPLATES_DIR.to_string()))
        .collect()
}

/// Create any missing workflow directories, returning the ones created.
pub fn create(root: &Path, project: &str) -> Result<Vec<String>> {
    let mut created = Vec::new();
    for dir in required_dirs(project) {
        let path = root.join(&dir);
        if !path.exists() {
            fs::create_dir_all(&path)
                .context(|| format!("Failed to create directory: {}", dir))?;
            created.push(dir);
        }
    }
    Ok(created)
}

/// Check the result of `init`, recording problems in `report`.
pub fn validate(root: &Path, project: &str, report: &mut InitReport) {
    let rules_dir = root.join(RULES_DIR);
    if !rules_dir.exists() {
        report.error(format!("Rules directory not found: {}/", RULES_DIR));
    } else if count_with_extension(&rules_dir, "mdc") == 0 {
        report.warn(format!("No .mdc rule files found in {}/", RULES_DIR));
    }

    for dir in required_dirs(project) {
        if !root.join(&dir).exists() {
            report.error(format!("Required directory missing: {}", dir));
        }
    }

    let templates_dir = root.join(TEMPLATES_DIR);
    if templates_dir.exists() && count_with_extension(&templates_dir, "md") == 0 {
        report.warn(format!("No template files found in {}/", TEMPLATES_DIR));
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
