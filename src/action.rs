//! # Action Decision
//!
//! The pure decision step of a reconciliation: given what the caller wants
//! and what the resolver found, pick the single corrective action.
//!
//! | desired    | current                  | source file | action        |
//! |------------|--------------------------|-------------|---------------|
//! | enabled    | enabled                  | broken      | `EnableRepo`  |
//! | enabled    | disabled / not-installed | any         | `EnableRepo`  |
//! | disabled   | enabled                  | any         | `DisableRepo` |
//! | otherwise  |                          |             | `None`        |

use serde::Serialize;
use std::fmt;

use crate::state::{CurrentState, DesiredState, SourceFileState};

/// The corrective action chosen for one repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Already in the desired state.
    None,
    /// Run `extrepo enable`, which also rewrites a broken file.
    EnableRepo,
    /// Run `extrepo disable`.
    DisableRepo,
}

impl Action {
    /// The extrepo sub-command implementing this action, if any.
    pub fn subcommand(self) -> Option<&'static str> {
        match self {
            Action::None => None,
            Action::EnableRepo => Some("enable"),
            Action::DisableRepo => Some("disable"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::None => "none",
            Action::EnableRepo => "enable-repo",
            Action::DisableRepo => "disable-repo",
        })
    }
}

/// Decide which action converges `current` towards `desired`.
pub fn decide(desired: DesiredState, current: CurrentState, source: SourceFileState) -> Action {
    match (desired, current) {
        // Rewrite a file that is enabled but inconsistent.
        (DesiredState::Enabled, CurrentState::Enabled) if source == SourceFileState::Broken => {
            Action::EnableRepo
        }
        (DesiredState::Enabled, CurrentState::Disabled | CurrentState::NotInstalled) => {
            Action::EnableRepo
        }
        (DesiredState::Disabled, CurrentState::Enabled) => Action::DisableRepo,
        _ => Action::None,
    }
}
