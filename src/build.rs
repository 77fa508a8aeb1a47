//! # Version Builder
//!
//! Builds the documentation for one release of one spec: force the clone
//! onto the checkout target, run the repository's own docs build, and move
//! the resulting `output/` directory to its durable destination.
//!
//! Ideally `make docs` is all any spec needs. Three specs predate build
//! tooling they are now run with and need their Makefile patched in place
//! first; those fixups are frozen per-spec shell pipelines selected by name,
//! not a general mechanism. Each pipeline writes the patched file to
//! `Makefile.new`, which is removed again after the build whatever the
//! outcome.

use std::fs;
use std::path::Path;
use std::process::Command;

use log::info;

use crate::error::{Error, Result};
use crate::git;

/// Name of the patched build file the special-case pipelines leave behind.
const PATCHED_MAKEFILE: &str = "Makefile.new";

/// How to invoke the docs build for a given spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStrategy {
    /// Plain `make docs`, the contract every well-behaved spec honors.
    Generic,
    /// image-spec: docker `-it` flag fixup plus pandoc title metadata, with a
    /// version-pinned `go get` fallback when the first build fails.
    Image,
    /// distribution-spec: same as `Image` plus a `go mod init` rewrite and
    /// removal of `output/.gitkeep` after a successful build.
    Distribution,
    /// runtime-spec: docker flag fixup plus a `go mod init main` rewrite.
    Runtime,
}

/// An executable command description: program plus arguments. Pure data so
/// strategy selection and rendering can be tested without running anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl BuildStrategy {
    /// Select the strategy for a spec by name.
    pub fn for_spec(spec_name: &str) -> Self {
        match spec_name {
            "image" => Self::Image,
            "distribution" => Self::Distribution,
            "runtime" => Self::Runtime,
            _ => Self::Generic,
        }
    }

    /// Render the build invocation for a checkout target.
    pub fn command(&self, target: &str) -> BuildCommand {
        match self {
            Self::Generic => BuildCommand {
                program: "make",
                args: vec!["docs".to_string()],
            },
            Self::Image => BuildCommand {
                program: "sh",
                args: vec![
                    "-c".to_string(),
                    format!(
                        r#"cat Makefile | sed 's/-it/-i/g' | sed 's|-f gfm|-f gfm --metadata title="Open Container Initiative Image Format Specification"|g' > Makefile.new && (make -f Makefile.new docs || (cd .tool/ && go get github.com/opencontainers/image-spec/specs-go@{target} && cd ../ && make -f Makefile.new docs))"#
                    ),
                ],
            },
            Self::Distribution => BuildCommand {
                program: "sh",
                args: vec![
                    "-c".to_string(),
                    format!(
                        r#"cat Makefile | sed 's/-it/-i/g' | sed 's/go mod init \&\& \\/\(rm -f go.* \&\& go mod init main \)\&\& \\/g' | sed 's|-f gfm|-f gfm --metadata title="Open Container Initiative Distribution Specification"|g'> Makefile.new && (make -f Makefile.new docs || (cd .tool/ && go get github.com/opencontainers/distribution-spec/specs-go@{target} && cd ../ && make -f Makefile.new docs)) && rm -f output/.gitkeep"#
                    ),
                ],
            },
            Self::Runtime => BuildCommand {
                program: "sh",
                args: vec![
                    "-c".to_string(),
                    format!(
                        r#"cat Makefile | sed 's/-it/-i/g' | sed 's/go mod init \\/go mod init main \\/g' > Makefile.new && (make -f Makefile.new docs || (cd .tool/ && go get github.com/opencontainers/runtime-spec/specs-go@{target} && cd ../ && make -f Makefile.new docs))"#
                    ),
                ],
            },
        }
    }
}

/// Run the docs build for `spec_name` at `target` inside `clone_dir`.
///
/// The leftover patched Makefile is removed whether the build succeeds or
/// not; a non-zero exit is fatal.
pub fn run_build(clone_dir: &Path, spec_name: &str, target: &str) -> Result<()> {
    let command = BuildStrategy::for_spec(spec_name).command(target);
    info!(
        "[{}] running docs build: {} {}",
        spec_name,
        command.program,
        command.args.join(" ")
    );

    let result = Command::new(command.program)
        .args(&command.args)
        .current_dir(clone_dir)
        .output();

    // Leftover from the special-case pipelines; harmless if absent.
    let _ = fs::remove_file(clone_dir.join(PATCHED_MAKEFILE));

    let output = result.map_err(|e| Error::Build {
        spec: spec_name.to_string(),
        target: target.to_string(),
        stderr: e.to_string(),
    })?;

    if !output.status.success() {
        return Err(Error::Build {
            spec: spec_name.to_string(),
            target: target.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }
    Ok(())
}

/// Move the `output/` directory a successful build left in `clone_dir` to
/// its durable destination. Rename, not copy: the destination is expected to
/// live on the same filesystem as the workspace.
pub fn relocate_output(clone_dir: &Path, spec_name: &str, dest: &Path) -> Result<()> {
    let produced = clone_dir.join("output");
    if !produced.is_dir() {
        return Err(Error::OutputMissing {
            spec: spec_name.to_string(),
            path: produced,
        });
    }
    info!("[{}] moving output/ to {}", spec_name, dest.display());
    fs::rename(&produced, dest)?;
    Ok(())
}

/// Build one release end to end: checkout, clean, docs build, then move the
/// produced `output/` directory to `dest`.
pub fn build_release(clone_dir: &Path, spec_name: &str, target: &str, dest: &Path) -> Result<()> {
    git::checkout_force(clone_dir, target)?;
    git::clean_force(clone_dir, target)?;
    run_build(clone_dir, spec_name, target)?;
    relocate_output(clone_dir, spec_name, dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_selection_special_cases() {
        assert_eq!(BuildStrategy::for_spec("image"), BuildStrategy::Image);
        assert_eq!(
            BuildStrategy::for_spec("distribution"),
            BuildStrategy::Distribution
        );
        assert_eq!(BuildStrategy::for_spec("runtime"), BuildStrategy::Runtime);
    }

    #[test]
    fn test_strategy_selection_generic_for_anything_else() {
        assert_eq!(BuildStrategy::for_spec("selinux"), BuildStrategy::Generic);
        assert_eq!(BuildStrategy::for_spec(""), BuildStrategy::Generic);
        assert_eq!(BuildStrategy::for_spec("Image"), BuildStrategy::Generic);
    }

    #[test]
    fn test_generic_command_is_make_docs() {
        let cmd = BuildStrategy::Generic.command("v1.0.0");
        assert_eq!(cmd.program, "make");
        assert_eq!(cmd.args, vec!["docs"]);
    }

    #[test]
    fn test_image_command_pins_target_and_patches_makefile() {
        let cmd = BuildStrategy::Image.command("v1.0.1");
        assert_eq!(cmd.program, "sh");
        assert_eq!(cmd.args[0], "-c");
        let script = &cmd.args[1];
        assert!(script.contains("sed 's/-it/-i/g'"));
        assert!(script.contains("Image Format Specification"));
        assert!(script.contains("image-spec/specs-go@v1.0.1"));
        assert!(script.contains("make -f Makefile.new docs"));
    }

    #[test]
    fn test_distribution_command_removes_gitkeep() {
        let cmd = BuildStrategy::Distribution.command("v1.0.0");
        let script = &cmd.args[1];
        assert!(script.contains("Distribution Specification"));
        assert!(script.contains("distribution-spec/specs-go@v1.0.0"));
        assert!(script.ends_with("rm -f output/.gitkeep"));
        assert!(script.contains(r"go mod init main"));
    }

    #[test]
    fn test_runtime_command_rewrites_mod_init() {
        let cmd = BuildStrategy::Runtime.command("abc123");
        let script = &cmd.args[1];
        assert!(script.contains(r"sed 's/go mod init \\/go mod init main \\/g'"));
        assert!(script.contains("runtime-spec/specs-go@abc123"));
    }

    #[test]
    fn test_relocate_output_missing_directory_is_fatal() {
        let temp = tempfile::TempDir::new().unwrap();
        let dest = temp.path().join("dest");

        let err = relocate_output(temp.path(), "stub", &dest).unwrap_err();
        assert!(matches!(err, Error::OutputMissing { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_relocate_output_moves_not_copies() {
        let temp = tempfile::TempDir::new().unwrap();
        let produced = temp.path().join("output");
        std::fs::create_dir_all(&produced).unwrap();
        std::fs::write(produced.join("index.html"), "<html></html>").unwrap();

        let dest = temp.path().join("specs").join("v1.0.0");
        std::fs::create_dir_all(dest.parent().unwrap()).unwrap();
        relocate_output(temp.path(), "stub", &dest).unwrap();

        assert!(!produced.exists());
        assert!(dest.join("index.html").exists());
    }

    #[test]
    fn test_run_build_failure_is_fatal_and_cleans_patched_makefile() {
        let temp = tempfile::TempDir::new().unwrap();
        // No Makefile at all: the image pipeline writes Makefile.new from an
        // empty cat (sh reports the missing file) and the build fails.
        let err = run_build(temp.path(), "image", "v1.0.0").unwrap_err();
        assert!(matches!(err, Error::Build { .. }));
        assert!(!temp.path().join(PATCHED_MAKEFILE).exists());
    }

    #[test]
    fn test_run_build_generic_success_with_stub_makefile() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("Makefile"),
            "docs:\n\tmkdir -p output && echo ok > output/index.html\n",
        )
        .unwrap();
        run_build(temp.path(), "custom-spec", "v2").unwrap();
        assert!(temp.path().join("output/index.html").exists());
    }
}
