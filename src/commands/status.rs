//! # Status Command Implementation
//!
//! This module implements the `status` subcommand, a read-only report of a
//! repository's logical state and the state of its `.sources` file. Unlike
//! `ensure`, a name missing from extrepo's catalog is not an error here; it
//! is reported as `definition-not-found`.

use anyhow::{Context, Result};
use clap::Args;

use extrepo_repository::config::Settings;
use extrepo_repository::output::{format_status, status_json, OutputConfig};
use extrepo_repository::reconcile::Reconciler;

use super::OutputFormat;

/// Show the current state of a repository without changing anything
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Repository name as listed by `extrepo search`
    #[arg(value_name = "REPOSITORY_NAME")]
    pub repository_name: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the `status` command.
pub fn execute(args: StatusArgs, settings: Settings, output: &OutputConfig) -> Result<()> {
    let reconciler = Reconciler::new(settings);
    let status = reconciler
        .status(&args.repository_name)
        .with_context(|| format!("Failed to inspect repository {}", args.repository_name))?;

    match args.format {
        OutputFormat::Text => println!("{}", format_status(output, &status)),
        OutputFormat::Json => println!("{}", status_json(&status)?),
    }

    Ok(())
}
