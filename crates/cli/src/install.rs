// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Copying rule, template, and script files into the target repository.
//!
//! Existing destination files are left alone unless `force` is set.

use std::fs;
use std::path::Path;

use crate::error::{Error, IoContext, Result};

/// Helper scripts copied from a flowmates checkout. `pre-work-hook` is optional.
pub const SCRIPTS: [&str; 3] = [
    "pre-commit-hook",
    "validate-workflow-state.py",
    "pre-work-hook",
];

/// What happened to a single destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The file did not exist and was written.
    Created,
    /// The file existed and was overwritten (`--force`).
    Updated,
    /// The file existed and was left alone.
    Skipped,
}

/// A copied (or skipped) file, by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Copied {
    pub name: String,
    pub outcome: CopyOutcome,
}

impl Copied {
    fn new(name: &str, outcome: CopyOutcome) -> Self {
        Copied {
            name: name.to_string(),
            outcome,
        }
    }
}

/// Copy `src` to `dest` unless `dest` exists and `force` is false.
pub fn copy_file(src: &Path, dest: &Path, force: bool) -> Result<CopyOutcome> {
    let existed = dest.exists();
    if existed && !force {
        return Ok(CopyOutcome::Skipped);
    }

    fs::copy(src, dest).context(|| format!("Failed to copy: {}", src.display()))?;

    Ok(if existed {
        CopyOutcome::Updated
    } else {
        CopyOutcome::Created
    })
}

/// Copy every `*.<ext>` file in `src_dir` into `dest_dir`, in file-name order.
pub fn copy_by_extension(
    src_dir: &Path,
    dest_dir: &Path,
    ext: &str,
    force: bool,
) -> Result<Vec<Copied>> {
    fs::create_dir_all(dest_dir)
        .context(|| format!("Failed to create directory: {}", dest_dir.display()))?;

    let mut files = Vec::new();
    for entry in
        fs::read_dir(src_dir).context(|| format!("Failed to read directory: {}", src_dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, ext) {
            files.push(path);
        }
    }
    files.sort();

    let mut copied = Vec::with_capacity(files.len());
    for path in files {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::InvalidFileName(path.display().to_string()))?;
        let outcome = copy_file(&path, &dest_dir.join(name), force)?;
        tracing::debug!(file = name, ?outcome, "copied");
        copied.push(Copied::new(name, outcome));
    }

    Ok(copied)
}

/// Copy each of `names` that exists in `src_dir` into `dest_dir`.
pub fn copy_named(
    src_dir: &Path,
    dest_dir: &Path,
    names: &[&str],
    force: bool,
) -> Result<Vec<Copied>> {
    fs::create_dir_all(dest_dir)
        .context(|| format!("Failed to create directory: {}", dest_dir.display()))?;

    let mut copied = Vec::new();
    for name in names {
        let src = src_dir.join(name);
        if !src.is_file() {
            continue;
        }
        let outcome = copy_file(&src, &dest_dir.join(name), force)?;
        tracing::debug!(file = *name, ?outcome, "copied");
        copied.push(Copied::new(name, outcome));
    }

    Ok(copied)
}

/// Returns true if `path` has the given extension.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(ext)
}

/// Count the files in `dir` with the given extension. A missing directory counts as zero.
pub fn count_with_extension(dir: &Path, ext: &str) -> usize {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| has_extension(&e.path(), ext))
                .count()
        })
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "install_tests.rs"]
mod tests;
