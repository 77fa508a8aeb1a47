//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent the `specs.yaml`
//! configuration file, as well as the logic for parsing it. The configuration
//! is an ordered list of specification projects; each project names a git
//! remote and the ordered list of releases to build documentation for.
//!
//! ## Key Components
//!
//! - **`SpecsConfig`**: The whole file, a single top-level `specs` sequence.
//!   Immutable once loaded.
//! - **`Spec`**: One tracked specification project. `name` doubles as the
//!   output directory key, so it must be unique across the file.
//! - **`Release`**: One versioned point of a spec. At least one of `tag` or
//!   `commit` must be non-empty; `checkout_target` resolves which one wins.
//!
//! Releases are expected to be declared oldest-first; the pipeline iterates
//! them in reverse so the newest release is built and listed first.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration filename, looked up in the working directory.
pub const DEFAULT_CONFIG_FILENAME: &str = "specs.yaml";

/// The parsed `specs.yaml` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecsConfig {
    /// All tracked specification projects, in declaration order.
    pub specs: Vec<Spec>,
}

/// One tracked specification project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spec {
    /// Unique name, used as the per-spec output directory and as the key
    /// selecting a build strategy.
    pub name: String,
    /// Git remote URL to clone the project from.
    pub remote: String,
    /// Releases to build, declared oldest-first.
    #[serde(default)]
    pub releases: Vec<Release>,
}

/// One versioned point of a spec.
///
/// Empty strings mean "not set", matching how the fields appear in YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub commit: String,
    #[serde(default)]
    pub tag: String,
    /// Accepted in configuration but never consulted when resolving a
    /// checkout target. Kept so existing config files round-trip.
    #[serde(default)]
    pub branch: String,
}

impl Release {
    /// Resolve the git ref this release checks out: the tag if one is set,
    /// otherwise the commit. Returns `None` when both are empty, which the
    /// pipeline treats as a fatal configuration error.
    pub fn checkout_target(&self) -> Option<&str> {
        if !self.tag.is_empty() {
            Some(&self.tag)
        } else if !self.commit.is_empty() {
            Some(&self.commit)
        } else {
            None
        }
    }
}

/// Parse a YAML string into a `SpecsConfig`.
pub fn parse(content: &str) -> Result<SpecsConfig> {
    let config: SpecsConfig = serde_yaml::from_str(content)?;
    Ok(config)
}

/// Load and parse a configuration file from disk.
pub fn from_file(path: &std::path::Path) -> Result<SpecsConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

/// Structural checks run by the `validate` command before any network or
/// filesystem work. Returns the list of problems found, empty when clean.
pub fn validate(config: &SpecsConfig) -> Vec<String> {
    let mut issues = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for (si, spec) in config.specs.iter().enumerate() {
        if spec.name.is_empty() {
            issues.push(format!("spec at index {} has an empty name", si));
        } else if !seen.insert(spec.name.as_str()) {
            issues.push(format!("duplicate spec name: {}", spec.name));
        }
        if spec.remote.is_empty() {
            issues.push(format!("[{}] empty remote URL", spec.name));
        }
        if spec.releases.is_empty() {
            issues.push(format!("[{}] no releases declared", spec.name));
        }
        for (ri, release) in spec.releases.iter().enumerate() {
            if release.checkout_target().is_none() {
                issues.push(format!(
                    "[{}] release at index {} has neither a tag nor a commit",
                    spec.name, ri
                ));
            }
        }
    }

    issues
}
