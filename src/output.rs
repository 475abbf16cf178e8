//! # Output Rendering
//!
//! Turns reconciliation results into what the CLI prints.
//!
//! Two formats exist:
//! - **text** for people, optionally colored;
//! - **json** for the calling automation layer, one object per run:
//!   `{"changed": bool, "msg": str}` on success and
//!   `{"failed": true, "msg": str}` on failure.
//!
//! Color follows `--color=never|always|auto`. In auto mode it is disabled
//! by `NO_COLOR`, `CLICOLOR=0`, `TERM=dumb` or a non-TTY stdout, and forced by
//! `CLICOLOR_FORCE=1`.

use console::style;
use serde::Serialize;
use std::env;

use crate::error::Result;
use crate::executor::Outcome;
use crate::resolver::RepositoryStatus;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in text output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `color_flag` is the value of `--color`: "always", "never" or "auto".
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR, even empty, disables colors.
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// JSON body printed when a run fails.
#[derive(Debug, Serialize)]
pub struct Failure<'a> {
    pub failed: bool,
    pub msg: &'a str,
}

/// Render a successful outcome as a single text line.
///
/// ```
/// use extrepo_repository::executor::Outcome;
/// use extrepo_repository::output::{format_outcome, OutputConfig};
///
/// let outcome = Outcome { changed: false, msg: "Repository i2pd already in desired state".into() };
/// let config = OutputConfig { use_color: false };
/// assert_eq!(format_outcome(&config, &outcome), "ok: Repository i2pd already in desired state");
/// ```
pub fn format_outcome(config: &OutputConfig, outcome: &Outcome) -> String {
    let label = if outcome.changed { "changed" } else { "ok" };
    let label = if !config.use_color {
        label.to_string()
    } else if outcome.changed {
        style(label).yellow().bold().force_styling(true).to_string()
    } else {
        style(label).green().force_styling(true).to_string()
    };
    format!("{}: {}", label, outcome.msg)
}

/// Render a status report as aligned `key: value` lines.
pub fn format_status(config: &OutputConfig, status: &RepositoryStatus) -> String {
    let state = status.state.to_string();
    let state = if config.use_color {
        style(state).cyan().force_styling(true).to_string()
    } else {
        state
    };
    let source_state = status
        .source_state
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "repository:   {}\nstate:        {}\nsource state: {}\nsource file:  {}",
        status.name,
        state,
        source_state,
        status.source_path.display()
    )
}

/// Render a successful outcome as a JSON object.
pub fn outcome_json(outcome: &Outcome) -> Result<String> {
    Ok(serde_json::to_string(outcome)?)
}

/// Render a failure message as a JSON object.
pub fn failure_json(msg: &str) -> Result<String> {
    Ok(serde_json::to_string(&Failure { failed: true, msg })?)
}

/// Render a status report as a JSON object.
pub fn status_json(status: &RepositoryStatus) -> Result<String> {
    Ok(serde_json::to_string(status)?)
}
