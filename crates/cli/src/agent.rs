// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `AGENT.md` generation from the source's repository template.

use std::fs;
use std::path::Path;

use crate::error::{IoContext, Result};

pub const AGENT_FILE_NAME: &str = "AGENT.md";
const PROJECT_NAME_PLACEHOLDER: &str = "{{PROJECT_NAME}}";

/// Substitute the project name into a template.
pub fn render(template: &str, project: &str) -> String {
    template.replace(PROJECT_NAME_PLACEHOLDER, project)
}

/// Write `AGENT.md` from `template_path`. Returns false when an existing file
/// was kept because `overwrite` is false.
pub fn write(root: &Path, template_path: &Path, project: &str, overwrite: bool) -> Result<bool> {
    let dest = root.join(AGENT_FILE_NAME);
    if dest.exists() && !overwrite {
        return Ok(false);
    }

    let template = fs::read_to_string(template_path)
        .context(|| format!("Failed to read template: {}", template_path.display()))?;
    fs::write(&dest, render(&template, project))
        .context(|| format!("Failed to write: {}", dest.display()))?;

    Ok(true)
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
