// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use crate::config::{flowmates_dir, FlowmatesConfig};
use crate::error::{Error, Result};
use crate::git;
use crate::source::is_flowmates_repo;

/// Flags accepted by `echo init-flowmates-config`.
#[derive(Debug, Clone, Default)]
pub struct FlowmatesConfigOptions {
    pub path: Option<String>,
    pub file: String,
    pub force: bool,
    pub dry_run: bool,
    pub no_validate: bool,
}

pub fn run(cwd: &Path, home: &Path, options: &FlowmatesConfigOptions) -> Result<()> {
    let repo_path = resolve_repo_path(cwd, options)?;

    if !is_flowmates_repo(&repo_path) {
        eprintln!(
            "Warning: {} does not contain rules/*.mdc; init will fall back to ~/.cursor/",
            repo_path.display()
        );
    }

    let config_dir = flowmates_dir(home);
    let config_path = config_dir.join(&options.file);
    let existing = config_path.exists();
    if existing && !options.force {
        return Err(Error::ConfigExists(config_path.display().to_string()));
    }

    let config = if existing {
        FlowmatesConfig::merged(&config_path, repo_path.clone())
    } else {
        FlowmatesConfig::new(repo_path.clone())
    };

    if options.dry_run {
        if !config_dir.exists() {
            println!("Would create directory {}", config_dir.display());
        }
        let verb = if existing { "overwrite" } else { "write" };
        println!("Would {} {}:", verb, config_path.display());
        print!("{}", config.to_json()?);
        return Ok(());
    }

    config.save(&config_path)?;
    tracing::info!(config = %config_path.display(), repo = %repo_path.display(), "saved flowmates config");

    println!("Wrote flowmates config to {}", config_path.display());
    println!("Repository: {}", repo_path.display());

    Ok(())
}

/// Work out which directory to record, validating it unless `--no-validate`.
fn resolve_repo_path(cwd: &Path, options: &FlowmatesConfigOptions) -> Result<PathBuf> {
    let candidate = match &options.path {
        Some(p) => cwd.join(p),
        None => match git::toplevel(cwd) {
            Ok(top) => top,
            Err(_) if options.no_validate => cwd.to_path_buf(),
            Err(e) => return Err(e),
        },
    };

    if options.no_validate {
        // Recorded as given when it does not exist yet.
        return Ok(candidate.canonicalize().unwrap_or(candidate));
    }

    if !candidate.exists() {
        return Err(Error::RepoPathNotFound(candidate.display().to_string()));
    }
    let repo_path = candidate.canonicalize()?;
    git::find_git_dir(&repo_path)?;

    Ok(repo_path)
}

#[cfg(test)]
#[path = "flowmates_config_tests.rs"]
mod tests;
