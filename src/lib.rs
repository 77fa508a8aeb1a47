//! # Specs Site Library
//!
//! This library provides the core functionality for generating a static
//! documentation site from multiple versioned specification repositories. It
//! is used by the `specs-site` command-line tool but can also be embedded in
//! other automation that needs the same pipeline.
//!
//! ## Quick Example
//!
//! ```
//! use specs_site::config;
//!
//! let yaml = r#"
//! specs:
//!   - name: runtime
//!     remote: https://github.com/opencontainers/runtime-spec.git
//!     releases:
//!       - tag: v1.0.0
//!       - tag: v1.0.1
//! "#;
//! let config = config::parse(yaml).unwrap();
//! assert_eq!(config.specs[0].releases[1].checkout_target(), Some("v1.0.1"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: The `specs.yaml` schema: an ordered list
//!   of specs, each with a git remote and releases declared oldest-first.
//! - **Layout (`layout`)**: Every path the generator touches, derived from a
//!   single root. No component ever changes the process working directory.
//! - **Git (`git`)**: The version-control collaborator, two operations via
//!   the system git binary: ensure a clone exists, force a worktree onto a
//!   ref.
//! - **Build (`build`)**: Per-release docs build, including the frozen
//!   Makefile-patching pipelines three specs need, and relocation of the
//!   produced `output/` directory.
//! - **Pipeline (`pipeline`)**: The sequential orchestration loop with its
//!   two idempotence rules (clone once per workspace, build once ever per
//!   release) and fail-fast error policy.
//! - **Site (`site`)**: Rendering of the aggregate `index.html`.
//!
//! ## Execution Flow
//!
//! `pipeline::run` ensures the shared git workspace exists, processes each
//! spec in declared order (clone, then each release newest-first: resolve
//! checkout target, skip if its output directory exists, otherwise checkout,
//! clean, build, relocate), and finally writes the index page. Any failure
//! at any step aborts the entire run.

pub mod build;
pub mod config;
pub mod error;
pub mod git;
pub mod layout;
pub mod output;
pub mod pipeline;
pub mod site;
