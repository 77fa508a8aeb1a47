//! # Workspace Layout
//!
//! All paths the generator touches are derived from a single root directory,
//! captured once in a [`Layout`]. Threading the layout through every
//! operation keeps the process working directory untouched; subprocesses get
//! an explicit `current_dir` instead of the program chdir-ing around a shared
//! global.
//!
//! The layout on disk:
//!
//! ```text
//! <root>/docs/git-workspace/<repo-base-name>/   one persistent clone per spec
//! <root>/docs/specs/<spec-name>/<target>/       one durable dir per built release
//! <root>/docs/index.html                        aggregate page, rewritten every run
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::git;

/// Derived filesystem locations for one generator run.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    /// Anchor a layout at an explicit root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Anchor a layout at the process's current working directory.
    pub fn from_current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// The root all other paths hang off.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Shared directory holding one clone per spec.
    pub fn git_workspace(&self) -> PathBuf {
        self.root.join("docs").join("git-workspace")
    }

    /// The persistent clone directory for a remote, named after the last
    /// path segment of the URL with any `.git` suffix stripped.
    pub fn clone_dir(&self, remote: &str) -> PathBuf {
        self.git_workspace().join(git::repo_base_name(remote))
    }

    /// Parent directory collecting all built releases of one spec.
    pub fn spec_output_parent(&self, spec_name: &str) -> PathBuf {
        self.root.join("docs").join("specs").join(spec_name)
    }

    /// Durable destination for one built release. Once this exists the
    /// release is never rebuilt.
    pub fn release_output(&self, spec_name: &str, target: &str) -> PathBuf {
        self.spec_output_parent(spec_name).join(target)
    }

    /// The aggregate index page.
    pub fn index_file(&self) -> PathBuf {
        self.root.join("docs").join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = Layout::new("/work");
        assert_eq!(
            layout.git_workspace(),
            PathBuf::from("/work/docs/git-workspace")
        );
        assert_eq!(layout.index_file(), PathBuf::from("/work/docs/index.html"));
        assert_eq!(
            layout.spec_output_parent("runtime"),
            PathBuf::from("/work/docs/specs/runtime")
        );
        assert_eq!(
            layout.release_output("runtime", "v1.0.0"),
            PathBuf::from("/work/docs/specs/runtime/v1.0.0")
        );
    }

    #[test]
    fn test_clone_dir_strips_git_suffix() {
        let layout = Layout::new("/work");
        assert_eq!(
            layout.clone_dir("https://github.com/opencontainers/runtime-spec.git"),
            PathBuf::from("/work/docs/git-workspace/runtime-spec")
        );
    }

    #[test]
    fn test_clone_dir_without_git_suffix() {
        let layout = Layout::new("/work");
        assert_eq!(
            layout.clone_dir("https://github.com/opencontainers/image-spec"),
            PathBuf::from("/work/docs/git-workspace/image-spec")
        );
    }
}
