// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keeping `.cursor/` out of version control.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{IoContext, Result};

const GITIGNORE_FILE_NAME: &str = ".gitignore";
const CURSOR_ENTRY: &str = "# Cursor agent state and cache\n.cursor/\n";

/// What happened to `.gitignore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitignoreAction {
    Created,
    Added,
    Skipped,
}

/// Make sure the repository's `.gitignore` ignores `.cursor`.
pub fn ensure_cursor_ignored(root: &Path) -> Result<GitignoreAction> {
    let path = root.join(GITIGNORE_FILE_NAME);

    if !path.exists() {
        fs::write(&path, CURSOR_ENTRY).context(|| "Failed to create .gitignore".to_string())?;
        return Ok(GitignoreAction::Created);
    }

    let content = fs::read_to_string(&path).context(|| "Failed to read .gitignore".to_string())?;
    if has_cursor_entry(&content) {
        return Ok(GitignoreAction::Skipped);
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(&path)
        .context(|| "Failed to open .gitignore for appending".to_string())?;
    write!(file, "\n{}", CURSOR_ENTRY)?;

    Ok(GitignoreAction::Added)
}

/// Any pattern line beginning with `.cursor` (case-insensitive) counts.
pub fn has_cursor_entry(content: &str) -> bool {
    content.lines().map(str::trim).any(|line| {
        !line.is_empty() && !line.starts_with('#') && line.to_lowercase().starts_with(".cursor")
    })
}

#[cfg(test)]
#[path = "gitignore_tests.rs"]
mod tests;
