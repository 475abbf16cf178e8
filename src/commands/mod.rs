//! # CLI Command Implementations
//!
//! Each subcommand of `extrepo-repository` lives in its own file with:
//! - an `Args` struct deriving `clap::Args`;
//! - an `execute` function that calls into the `extrepo_repository` library
//!   and prints the result.

pub mod completions;
pub mod ensure;
pub mod status;

use clap::ValueEnum;

/// Output format shared by the reporting commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// A single JSON object on stdout
    Json,
}
