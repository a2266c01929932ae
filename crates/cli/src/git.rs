// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Thin wrappers around the `git` executable.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Run `git <args>` in `dir`, returning trimmed stdout on success and `None`
/// when git exits non-zero.
pub fn output(dir: &Path, args: &[&str]) -> Result<Option<String>> {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .map_err(|e| Error::Git(e.to_string()))?;

    if !output.status.success() {
        tracing::debug!(?args, status = ?output.status, "git command failed");
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()))
}

fn resolve(from: &Path, path: String) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        from.join(path)
    }
}

/// Find the .git directory for a repository.
pub fn find_git_dir(from: &Path) -> Result<PathBuf> {
    match output(from, &["rev-parse", "--git-dir"])? {
        Some(git_dir) => Ok(resolve(from, git_dir)),
        None => Err(Error::NotGitRepo(from.display().to_string())),
    }
}

/// Find the top-level working tree directory containing `from`.
pub fn toplevel(from: &Path) -> Result<PathBuf> {
    match output(from, &["rev-parse", "--show-toplevel"])? {
        Some(top) if !top.is_empty() => Ok(resolve(from, top)),
        _ => Err(Error::NotGitRepo(from.display().to_string())),
    }
}

/// URL of the `origin` remote, if any.
pub fn origin_url(dir: &Path) -> Option<String> {
    output(dir, &["remote", "get-url", "origin"])
        .ok()
        .flatten()
        .filter(|url| !url.is_empty())
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
