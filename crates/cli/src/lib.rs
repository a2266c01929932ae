// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! echors - repository bootstrap for the Cursor multi-agent rules system.
//!
//! This crate provides the functionality behind the `echo` CLI:
//!
//! - [`commands::init`] installs agent rules into `.cursor/rules/`, creates the
//!   issue workflow directories under `issues/`, copies issue templates and
//!   helper scripts, ignores `.cursor/` in git, installs the pre-commit hook,
//!   and renders `AGENT.md`.
//! - [`commands::flowmates_config`] records the flowmates checkout that `init`
//!   installs from in `~/.flowmates/config.json`.
//!
//! ```rust,ignore
//! use echors::commands::init::{execute, InitOptions};
//!
//! let report = execute(Path::new("."), &home, InitOptions::default())?;
//! println!("{}", report);
//! ```

mod cli;
pub mod colors;
pub mod commands;
mod env;
pub mod help;
pub mod logging;

pub mod agent;
pub mod config;
pub mod error;
pub mod git;
pub mod git_hooks;
pub mod gitignore;
pub mod install;
pub mod project;
pub mod report;
pub mod source;
pub mod workflow;

pub use cli::{Cli, Command};
pub use config::FlowmatesConfig;
pub use error::{Error, Result};
pub use report::InitReport;

use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;

use commands::flowmates_config::FlowmatesConfigOptions;
use commands::init::InitOptions;
use error::IoContext;

/// Resolve the directory commands operate in: `-C <path>` relative to the
/// current directory, or the current directory itself. The result is
/// canonical, so `-C ..` still has a directory name.
fn working_dir(directory: Option<&str>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let dir = match directory {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    dir.canonicalize()
        .context(|| format!("cannot use directory {}", dir.display()))
}

fn home_dir() -> Result<PathBuf> {
    env::home_dir().ok_or(Error::HomeNotFound)
}

/// Execute a parsed CLI invocation. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init {
            force,
            skip_agent,
            with_agent,
            skip_hooks,
            install_hooks: _,
        } => {
            let root = working_dir(cli.directory.as_deref())?;
            let home = home_dir()?;
            commands::init::run(
                &root,
                &home,
                InitOptions {
                    force,
                    skip_agent,
                    with_agent,
                    skip_hooks,
                },
            )
        }
        Command::InitFlowmatesConfig {
            path,
            file,
            force,
            dry_run,
            no_validate,
        } => {
            let cwd = working_dir(cli.directory.as_deref())?;
            let home = home_dir()?;
            commands::flowmates_config::run(
                &cwd,
                &home,
                &FlowmatesConfigOptions {
                    path,
                    file,
                    force,
                    dry_run,
                    no_validate,
                },
            )
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "echo", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
