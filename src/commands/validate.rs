//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which parses the
//! `specs.yaml` configuration file and reports structural problems without
//! cloning or building anything.
//!
//! This command is a safe, read-only operation that does not modify any
//! files and never touches the network.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use specs_site::config::{self, DEFAULT_CONFIG_FILENAME};
use specs_site::output::{emoji, OutputConfig};

/// Validate a specs.yaml configuration file
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the specs.yaml configuration file to validate
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    println!(
        "{} Validating configuration: {}",
        emoji(&out, "🔍", "[SCAN]"),
        args.config.display()
    );

    let specs_config = match config::from_file(&args.config) {
        Ok(c) => {
            println!(
                "{} Configuration file parsed successfully",
                emoji(&out, "✅", "[OK]")
            );
            c
        }
        Err(e) => {
            println!(
                "{} Configuration parsing failed: {}",
                emoji(&out, "❌", "[ERR]"),
                e
            );
            return Err(anyhow::anyhow!("Configuration parsing failed: {}", e));
        }
    };

    let releases: usize = specs_config.specs.iter().map(|s| s.releases.len()).sum();
    println!("   Specs: {}", specs_config.specs.len());
    println!("   Releases: {}", releases);

    let issues = config::validate(&specs_config);
    if issues.is_empty() {
        println!("{} Configuration is valid", emoji(&out, "✅", "[OK]"));
        Ok(())
    } else {
        for issue in &issues {
            println!("{} {}", emoji(&out, "❌", "[ERR]"), issue);
        }
        Err(anyhow::anyhow!(
            "Configuration has {} problem(s)",
            issues.len()
        ))
    }
}
