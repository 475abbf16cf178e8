//! # Ensure Command Implementation
//!
//! This module implements the `ensure` subcommand, which converges one
//! extrepo repository to the requested state.
//!
//! ## Functionality
//!
//! - Looks the repository up in extrepo's catalog and fails if it is unknown.
//! - Classifies its `.sources` file and decides on at most one action.
//! - Runs `extrepo enable` or `extrepo disable` when needed. With `--check`
//!   nothing is run, but the would-be change is still reported.
//!
//! The result is printed as a status line, or with `--format json` as the
//! `{"changed": .., "msg": ..}` object an automation layer expects. Failures
//! print `{"failed": true, "msg": ..}` in JSON mode and always exit with
//! status 1.

use anyhow::Result;
use clap::{Args, ValueEnum};

use extrepo_repository::config::Settings;
use extrepo_repository::output::{failure_json, format_outcome, outcome_json, OutputConfig};
use extrepo_repository::reconcile::Reconciler;
use extrepo_repository::state::DesiredState;

use super::OutputFormat;

/// Desired repository state
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StateArg {
    /// The repository's source file exists and is enabled
    Enabled,
    /// The repository's source file, if any, is disabled
    Disabled,
}

impl From<StateArg> for DesiredState {
    fn from(state: StateArg) -> Self {
        match state {
            StateArg::Enabled => DesiredState::Enabled,
            StateArg::Disabled => DesiredState::Disabled,
        }
    }
}

/// Enable or disable a repository, changing the host only when needed
#[derive(Args, Debug)]
pub struct EnsureArgs {
    /// Repository name as listed by `extrepo search`
    #[arg(value_name = "REPOSITORY_NAME")]
    pub repository_name: String,

    /// State the repository should be in
    #[arg(short, long, value_enum, default_value_t = StateArg::Enabled)]
    pub state: StateArg,

    /// Report what would change without running extrepo enable/disable
    #[arg(long, visible_alias = "dry-run")]
    pub check: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the `ensure` command.
pub fn execute(args: EnsureArgs, settings: Settings, output: &OutputConfig) -> Result<()> {
    let reconciler = Reconciler::new(settings.with_check_mode(args.check));

    match reconciler.reconcile(&args.repository_name, args.state.into()) {
        Ok(report) => {
            match args.format {
                OutputFormat::Text => println!("{}", format_outcome(output, &report.outcome)),
                OutputFormat::Json => println!("{}", outcome_json(&report.outcome)?),
            }
            Ok(())
        }
        Err(e) => {
            if args.format == OutputFormat::Json {
                println!("{}", failure_json(&e.to_string())?);
            }
            Err(e.into())
        }
    }
}
