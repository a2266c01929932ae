// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::colors;
use crate::config::DEFAULT_CONFIG_FILE_NAME;
use crate::help;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "echo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Cursor Multi-Agent Rules System CLI")]
#[command(
    long_about = "Cursor Multi-Agent Rules System CLI.\n\n\
    Installs agent rules, the issue workflow directory structure, issue templates, \
    and git hooks into a repository."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Run as if echo was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize repository with Cursor Multi-Agent Rules System
    #[command(after_help = colors::examples("\
Examples:
  echo init                  Install rules, directories, templates, and hooks
  echo init --force          Overwrite previously installed files
  echo init --skip-hooks     Leave .git/hooks untouched
  echo init --with-agent     Regenerate AGENT.md from the template"))]
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,

        /// Skip creating AGENT.md even if it's missing
        #[arg(long, conflicts_with = "with_agent")]
        skip_agent: bool,

        /// Always create AGENT.md from template (overwrites existing)
        #[arg(long)]
        with_agent: bool,

        /// Skip installing git hooks (hooks are installed by default)
        #[arg(long, conflicts_with = "install_hooks")]
        skip_hooks: bool,

        /// Install git hooks (already the default)
        #[arg(long, hide = true)]
        install_hooks: bool,
    },

    /// Initialize flowmates configuration directory
    #[command(after_help = colors::examples("\
Examples:
  echo init-flowmates-config                      Use the enclosing git repository
  echo init-flowmates-config --path ~/flowmates   Use an explicit checkout
  echo init-flowmates-config --dry-run            Show what would be written"))]
    InitFlowmatesConfig {
        /// Repository path (default: auto-detect from git root)
        #[arg(long)]
        path: Option<String>,

        /// Config filename inside ~/.flowmates/
        #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
        file: String,

        /// Overwrite existing config file even if it already exists
        #[arg(long)]
        force: bool,

        /// Show what would be created without making changes
        #[arg(long)]
        dry_run: bool,

        /// Skip git repository validation (allow non-git directories)
        #[arg(long)]
        no_validate: bool,
    },

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
