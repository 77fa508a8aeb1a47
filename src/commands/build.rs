//! # Build Command Implementation
//!
//! The `build` subcommand runs the whole generation pipeline: for every spec
//! in the configuration, ensure a clone exists, build every release whose
//! output directory is missing, and write the aggregate index page.
//!
//! The command is idempotent by construction: re-running it with an
//! unchanged configuration and filesystem performs no git or build work and
//! rewrites an identical index.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;

use specs_site::config::{self, DEFAULT_CONFIG_FILENAME};
use specs_site::layout::Layout;
use specs_site::output::{emoji, OutputConfig};
use specs_site::pipeline;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the specs.yaml configuration file
    #[arg(short, long, value_name = "PATH", env = "SPECS_SITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root directory for the workspace and generated site
    /// (defaults to the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the build command
pub fn execute(args: BuildArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let start_time = Instant::now();

    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));
    if !config_path.exists() {
        anyhow::bail!("Configuration file not found: {}", config_path.display());
    }

    let layout = match args.root {
        Some(root) => Layout::new(root),
        None => Layout::from_current_dir()?,
    };

    if !args.quiet {
        println!(
            "{} Building specs site at {}",
            emoji(&out, "🏗️", "[BUILD]"),
            layout.root().display()
        );
    }

    let specs_config = config::from_file(&config_path)?;
    pipeline::run(&specs_config, &layout)?;

    if !args.quiet {
        let duration = start_time.elapsed();
        println!(
            "{} Wrote {} ({} specs, {:.1}s)",
            emoji(&out, "✅", "[OK]"),
            layout.index_file().display(),
            specs_config.specs.len(),
            duration.as_secs_f64()
        );
    }

    Ok(())
}
