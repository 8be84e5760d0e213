//! Error handling for the repo-tool application
//!
//! This module provides a typed error hierarchy shared by both command
//! groups. Every command handler returns the crate-wide [`Result`]; `main`
//! propagates it, so a failure reaches the shell as a printed error and a
//! non-zero exit code.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoToolError {
    #[error("Precondition failed: {0}")]
    Precondition(#[from] PreconditionError),

    #[error("External process error: {0}")]
    Process(#[from] ProcessError),

    #[error("Launch error: {0}")]
    Launch(#[from] LaunchError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Checks that fail before any external process is touched.
#[derive(Error, Debug)]
pub enum PreconditionError {
    #[error("the current folder is already a repository")]
    AlreadyRepository,

    #[error("an origin is required")]
    OriginRequired,

    #[error("origin must be a GitHub remote URL, got: {origin}")]
    InvalidOrigin { origin: String },
}

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A step exited non-zero; carries the step context and the combined
    /// stdout/stderr of the failed invocation.
    #[error("{context}: {output}")]
    Failed { context: String, output: String },
}

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("failed to open {url} in the default browser: {reason}")]
    Failed { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, RepoToolError>;
