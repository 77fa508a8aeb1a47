//! # Git Collaborator
//!
//! Thin wrappers around the system `git` binary. Using the system command
//! (rather than an in-process git library) means SSH keys, credential
//! helpers, and anything else configured in `~/.gitconfig` work without any
//! handling here.
//!
//! The version-control surface this tool needs is deliberately tiny: make
//! sure a full clone of a remote exists, and force a working copy onto a
//! given ref while discarding local noise. Every failure is fatal to the
//! whole run.

use std::fs;
use std::path::Path;
use std::process::Command;

use log::info;

use crate::error::{Error, Result};

/// Derive the local directory name for a remote URL: the final path segment,
/// with a trailing `.git` stripped.
pub fn repo_base_name(remote: &str) -> &str {
    let base = remote.rsplit('/').next().unwrap_or(remote);
    base.strip_suffix(".git").unwrap_or(base)
}

/// Ensure a local clone of `remote` exists at `dest`.
///
/// If `dest` already exists this does nothing at all: no fetch, no pull, no
/// freshness check. The clone is full-history (historical tags must be
/// checkable-out), done once per spec per workspace lifetime.
pub fn ensure_cloned(remote: &str, dest: &Path) -> Result<()> {
    if dest.exists() {
        info!("clone {} already present, skipping", dest.display());
        return Ok(());
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    info!("running \"git clone --depth=1000000 {}\"", remote);
    let output = Command::new("git")
        .args(["clone", "--depth=1000000", remote])
        .arg(dest)
        .output()
        .map_err(|e| Error::GitClone {
            url: remote.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::GitClone {
            url: remote.to_string(),
            message: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }
    Ok(())
}

/// Force the working copy at `workdir` onto `target`, discarding local
/// modifications (`git checkout -f <target>`).
pub fn checkout_force(workdir: &Path, target: &str) -> Result<()> {
    info!("running \"git checkout -f {}\" in {}", target, workdir.display());
    run_in(workdir, &["checkout", "-f", target])
}

/// Remove untracked files (`git clean -f <target>`).
///
/// The checkout target is passed as a path filter, reproducing the behavior
/// this tool has always had. Do not "fix" this to `clean -fd .` without a
/// fixture demonstrating the intended semantics.
pub fn clean_force(workdir: &Path, target: &str) -> Result<()> {
    info!("running \"git clean -f {}\" in {}", target, workdir.display());
    run_in(workdir, &["clean", "-f", target])
}

fn run_in(workdir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(workdir)
        .output()
        .map_err(|e| Error::GitCommand {
            command: args.join(" "),
            dir: workdir.to_path_buf(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: args.join(" "),
            dir: workdir.to_path_buf(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }
    Ok(())
}
