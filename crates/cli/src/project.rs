// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project name detection.

use std::path::Path;

use crate::git;

const FALLBACK_NAME: &str = "project";

/// Detect the project name from the `origin` remote, falling back to the
/// directory name of `root`.
pub fn detect_name(root: &Path) -> String {
    if let Some(name) = git::origin_url(root).and_then(|url| name_from_remote(&url)) {
        tracing::debug!(name = %name, "project name from git remote");
        return name;
    }

    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    root.file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}

/// Extract the repository name from a remote URL.
///
/// Handles `https://host/org/repo.git`, `git@host:org/repo.git`,
/// `git@host:repo.git`, and plain paths.
pub fn name_from_remote(url: &str) -> Option<String> {
    let url = url.trim().trim_end_matches('/');
    let last = url.rsplit(['/', ':']).next()?;
    let name = last.strip_suffix(".git").unwrap_or(last);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
