// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::agent;
use crate::error::{Error, Result};
use crate::git_hooks::{self, HookAction};
use crate::gitignore;
use crate::install::{self, SCRIPTS};
use crate::project;
use crate::report::InitReport;
use crate::source::{self, Source};
use crate::workflow::{self, RULES_DIR, TEMPLATES_DIR};

/// Flags accepted by `echo init`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    pub force: bool,
    pub skip_agent: bool,
    pub with_agent: bool,
    pub skip_hooks: bool,
}

pub fn run(root: &Path, home: &Path, options: InitOptions) -> Result<()> {
    let report = execute(root, home, options)?;
    println!("{}", report);

    if report.has_errors() {
        return Err(Error::InitFailed);
    }
    Ok(())
}

/// Run every init step against `root`, returning the report without printing it.
///
/// Only a missing source, workflow directory creation, and `.gitignore`
/// failures abort; everything else is recorded in the report.
pub fn execute(root: &Path, home: &Path, options: InitOptions) -> Result<InitReport> {
    let mut report = InitReport::new();

    let source = source::discover(home, &mut report).ok_or(Error::NoRuleSource)?;
    report.source = Some(source.kind);

    match install::copy_by_extension(&source.rules_path, &root.join(RULES_DIR), "mdc", options.force)
    {
        Ok(copied) => report.rules = copied,
        Err(e) => report.error(format!("Error copying rules: {}", e)),
    }

    report.project_name = project::detect_name(root);
    tracing::info!(project = %report.project_name, root = %root.display(), "initializing");
    report.created_dirs = workflow::create(root, &report.project_name)?;

    if let Some(templates) = &source.templates_path {
        match install::copy_by_extension(templates, &root.join(TEMPLATES_DIR), "md", options.force)
        {
            Ok(copied) => report.templates = copied,
            Err(e) => report.warn(format!("Error copying templates: {}", e)),
        }
    }

    if let Some(scripts) = &source.scripts_path {
        match install::copy_named(scripts, &root.join("scripts"), &SCRIPTS, options.force) {
            Ok(copied) => report.scripts = copied,
            Err(e) => report.warn(format!("Error copying scripts: {}", e)),
        }
    }

    report.gitignore = Some(gitignore::ensure_cursor_ignored(root)?);

    report.hook = if options.skip_hooks {
        Some(HookAction::Disabled)
    } else {
        git_hooks::install_pre_commit(root, options.force, &mut report)
    };

    if !options.skip_agent {
        write_agent(root, &source, options, &mut report);
    }

    let project_name = report.project_name.clone();
    workflow::validate(root, &project_name, &mut report);

    Ok(report)
}

fn write_agent(root: &Path, source: &Source, options: InitOptions, report: &mut InitReport) {
    let exists = root.join(agent::AGENT_FILE_NAME).exists();
    if exists && !options.with_agent {
        return;
    }

    let template = source.agent_template();
    if !template.exists() {
        if options.with_agent {
            report.warn(format!(
                "AGENT template not found at: {}",
                template.display()
            ));
        }
        return;
    }

    let overwrite = options.force || options.with_agent;
    match agent::write(root, &template, &report.project_name, overwrite) {
        Ok(created) => report.agent_created = created,
        Err(e) => report.warn(format!("Error creating AGENT.md: {}", e)),
    }
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
