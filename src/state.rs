//! # Repository States
//!
//! The closed set of states the reconciliation pipeline works with.
//!
//! - [`SourceFileState`] is the literal condition of one `.sources` file.
//! - [`RepositoryState`] is the logical state reported to callers.
//! - [`CurrentState`] is the part of [`RepositoryState`] that can actually be
//!   reconciled. [`crate::action::decide`] only accepts this type, so a
//!   repository missing from the catalog can never reach the decision step.
//! - [`DesiredState`] is what a caller may ask for.
//!
//! Every state serializes in kebab-case and displays the same way, which is
//! also the spelling used on the command line and in JSON results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition of a repository's source-definition file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFileState {
    /// The file is missing or cannot be read.
    NotPresent,
    /// No `Enabled:` line, which apt treats as enabled.
    EnabledImplicit,
    /// A single `Enabled: yes` line.
    EnabledExplicit,
    /// A single `Enabled: no` line.
    Disabled,
    /// Several `Enabled:` lines, or one with a value other than `yes`/`no`.
    Broken,
}

impl SourceFileState {
    /// Every variant, in declaration order.
    pub const ALL: [SourceFileState; 5] = [
        SourceFileState::NotPresent,
        SourceFileState::EnabledImplicit,
        SourceFileState::EnabledExplicit,
        SourceFileState::Disabled,
        SourceFileState::Broken,
    ];

    /// Logical state implied by this file state.
    ///
    /// A broken file still counts as enabled: it exists and is not
    /// explicitly disabled. The decision step repairs it when needed.
    pub fn current_state(self) -> CurrentState {
        match self {
            SourceFileState::EnabledImplicit
            | SourceFileState::EnabledExplicit
            | SourceFileState::Broken => CurrentState::Enabled,
            SourceFileState::Disabled => CurrentState::Disabled,
            SourceFileState::NotPresent => CurrentState::NotInstalled,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            SourceFileState::NotPresent => "not-present",
            SourceFileState::EnabledImplicit => "enabled-implicit",
            SourceFileState::EnabledExplicit => "enabled-explicit",
            SourceFileState::Disabled => "disabled",
            SourceFileState::Broken => "broken",
        }
    }
}

impl fmt::Display for SourceFileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical state of a repository on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepositoryState {
    NotInstalled,
    Enabled,
    Disabled,
    /// The name is unknown to extrepo's catalog.
    DefinitionNotFound,
}

impl RepositoryState {
    fn as_str(self) -> &'static str {
        match self {
            RepositoryState::NotInstalled => "not-installed",
            RepositoryState::Enabled => "enabled",
            RepositoryState::Disabled => "disabled",
            RepositoryState::DefinitionNotFound => "definition-not-found",
        }
    }
}

impl fmt::Display for RepositoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reconcilable state of a repository that exists in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurrentState {
    NotInstalled,
    Enabled,
    Disabled,
}

impl CurrentState {
    /// Every variant, in declaration order.
    pub const ALL: [CurrentState; 3] = [
        CurrentState::NotInstalled,
        CurrentState::Enabled,
        CurrentState::Disabled,
    ];
}

impl From<CurrentState> for RepositoryState {
    fn from(state: CurrentState) -> Self {
        match state {
            CurrentState::NotInstalled => RepositoryState::NotInstalled,
            CurrentState::Enabled => RepositoryState::Enabled,
            CurrentState::Disabled => RepositoryState::Disabled,
        }
    }
}

impl fmt::Display for CurrentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        RepositoryState::from(*self).fmt(f)
    }
}

/// State a caller asks a repository to converge to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesiredState {
    #[default]
    Enabled,
    Disabled,
}

impl From<DesiredState> for RepositoryState {
    fn from(state: DesiredState) -> Self {
        match state {
            DesiredState::Enabled => RepositoryState::Enabled,
            DesiredState::Disabled => RepositoryState::Disabled,
        }
    }
}

impl fmt::Display for DesiredState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        RepositoryState::from(*self).fmt(f)
    }
}

/// What the resolver learned about one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDetails {
    pub name: String,
    pub state: CurrentState,
    pub source_state: SourceFileState,
}

impl RepositoryDetails {
    /// Builds the details for a catalogued repository from its file state.
    pub fn from_source_state(name: impl Into<String>, source_state: SourceFileState) -> Self {
        Self {
            name: name.into(),
            state: source_state.current_state(),
            source_state,
        }
    }

    /// The logical state, as reported to callers.
    pub fn repository_state(&self) -> RepositoryState {
        self.state.into()
    }
}
