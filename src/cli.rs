//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use extrepo_repository::config::Settings;
use extrepo_repository::defaults::{APT_SOURCES_LIST_D, EXTREPO_EXECUTABLE};
use extrepo_repository::output::OutputConfig;

use crate::commands;

/// extrepo-repository - Keep extrepo APT repositories enabled or disabled
#[derive(Parser, Debug)]
#[command(name = "extrepo-repository")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Directory holding extrepo's .sources files
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "EXTREPO_SOURCES_DIR",
        default_value = APT_SOURCES_LIST_D
    )]
    sources_dir: PathBuf,

    /// extrepo program to invoke
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "EXTREPO_BIN",
        default_value = EXTREPO_EXECUTABLE
    )]
    extrepo_bin: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enable or disable a repository, changing the host only when needed
    Ensure(commands::ensure::EnsureArgs),

    /// Show the current state of a repository without changing anything
    Status(commands::status::StatusArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let output = OutputConfig::from_env_and_flag(&self.color);
        let settings = Settings::default()
            .with_sources_dir(self.sources_dir)
            .with_extrepo_bin(self.extrepo_bin);

        match self.command {
            Commands::Ensure(args) => commands::ensure::execute(args, settings, &output),
            Commands::Status(args) => commands::status::execute(args, settings, &output),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Log to stderr at `level`, unless `RUST_LOG` says otherwise.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
