// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the echors library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not determine home directory\n  hint: set ECHO_HOME or HOME")]
    HomeNotFound,

    #[error("both flowmates repo and ~/.cursor/ unavailable\n  hint: run 'echo init-flowmates-config' or sync ~/.cursor/ first")]
    NoRuleSource,

    #[error("not a git repository: {0}\n  hint: pass --path, or --no-validate to allow non-git directories")]
    NotGitRepo(String),

    #[error("repository path not found: {0}")]
    RepoPathNotFound(String),

    #[error("config already exists: {0}\n  hint: use --force to overwrite")]
    ConfigExists(String),

    #[error("invalid file name: {0}")]
    InvalidFileName(String),

    #[error("failed to run git: {0}")]
    Git(String),

    #[error("initialization completed with errors")]
    InitFailed,

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for echors operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Attach a human-readable context to io failures.
pub trait IoContext<T> {
    fn context(self, f: impl FnOnce() -> String) -> Result<T>;
}

impl<T> IoContext<T> for std::result::Result<T, std::io::Error> {
    fn context(self, f: impl FnOnce() -> String) -> Result<T> {
        self.map_err(|source| Error::Context {
            context: f(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
