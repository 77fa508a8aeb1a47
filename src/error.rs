//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `specs-site` application. It uses the `thiserror` library to create a
//! comprehensive `Error` enum that covers all anticipated failure modes,
//! providing clear and descriptive error messages.
//!
//! The taxonomy is deliberately flat and every variant is fatal: this tool is
//! a batch site generator intended for unattended but supervised re-runs, so
//! nothing is caught, retried, or downgraded to a warning. The only non-fatal
//! condition in the whole program ("output directory already exists") is a
//! skip, not an error, and never reaches this module.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for specs-site operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file could not be read from disk.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A release entry has neither a tag nor a commit, so no checkout target
    /// can be resolved. This aborts the entire run, not just the release.
    #[error("[{spec}] invalid config for release at index {index}: needs a tag or a commit")]
    ReleaseUnresolvable { spec: String, index: usize },

    /// An error occurred while cloning a spec repository.
    ///
    /// Includes the remote URL and the captured stderr of the `git clone`
    /// invocation (or the spawn error if git could not be started).
    #[error("git clone failed for {url}: {message}")]
    GitClone { url: String, message: String },

    /// A git command run inside an existing working copy failed.
    #[error("git {command} failed in {dir}: {stderr}")]
    GitCommand {
        command: String,
        dir: PathBuf,
        stderr: String,
    },

    /// The documentation build command exited non-zero.
    #[error("[{spec}] docs build failed for {target}: {stderr}")]
    Build {
        spec: String,
        target: String,
        stderr: String,
    },

    /// The build succeeded but produced no `output/` directory to relocate.
    #[error("[{spec}] build produced no output directory at {path}")]
    OutputMissing { spec: String, path: PathBuf },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
