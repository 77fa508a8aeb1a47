//! # Generation Pipeline
//!
//! The orchestration loop: materialize each spec's clone, walk its releases
//! newest-first, build the ones whose durable output directory does not
//! exist yet, and accumulate the index page fragments.
//!
//! Two idempotence rules shape every run:
//!
//! - a clone is created at most once per workspace; an existing clone is
//!   reused as-is, however stale,
//! - a release is built at most once ever; an existing destination directory
//!   skips checkout, clean, and build entirely, but still gets its index
//!   entry.
//!
//! Everything else is fail-fast: the first error anywhere aborts the whole
//! run and nothing already on disk is rolled back. All paths are explicit
//! via [`Layout`]; the process working directory is never changed.

use std::fs;

use log::info;

use crate::build;
use crate::config::{Spec, SpecsConfig};
use crate::error::{Error, Result};
use crate::git;
use crate::layout::Layout;
use crate::site;

/// Process one spec: ensure its clone and output parent exist, build missing
/// releases newest-first, and return the spec's index fragment.
pub fn process_spec(spec: &Spec, layout: &Layout) -> Result<String> {
    let mut fragment = site::spec_heading(&spec.name);
    info!("[{}] begin processing, git remote: {}", spec.name, spec.remote);

    let clone_dir = layout.clone_dir(&spec.remote);
    git::ensure_cloned(&spec.remote, &clone_dir)?;

    let output_parent = layout.spec_output_parent(&spec.name);
    fs::create_dir_all(&output_parent)?;

    fragment.push_str("<ul>");
    // Config declares releases oldest-first; walk them in reverse so the
    // newest release is built and listed first.
    for (index, release) in spec.releases.iter().enumerate().rev() {
        info!(
            "[{}] count:{} tag:{} branch:{} commit:{}",
            spec.name,
            index + 1,
            release.tag,
            release.branch,
            release.commit
        );
        let target = release
            .checkout_target()
            .ok_or_else(|| Error::ReleaseUnresolvable {
                spec: spec.name.clone(),
                index,
            })?;
        // The entry goes into the index whether or not a build happens.
        fragment.push_str(&site::release_item(target));

        let dest = layout.release_output(&spec.name, target);
        if dest.exists() {
            info!("[{}] output folder {} exists, skipping", spec.name, dest.display());
            continue;
        }

        build::build_release(&clone_dir, &spec.name, target, &dest)?;
    }
    fragment.push_str("</ul>");

    info!("[{}] end processing", spec.name);
    Ok(fragment)
}

/// Run the full generation: every spec in declared order, then write the
/// aggregate index page.
pub fn run(config: &SpecsConfig, layout: &Layout) -> Result<()> {
    let workspace = layout.git_workspace();
    info!("ensuring git workspace directory {}", workspace.display());
    fs::create_dir_all(&workspace)?;

    let mut body = String::new();
    for spec in &config.specs {
        body.push_str(&process_spec(spec, layout)?);
    }

    let index_file = layout.index_file();
    info!("writing index to {}", index_file.display());
    fs::write(&index_file, site::page(&body))?;
    Ok(())
}
