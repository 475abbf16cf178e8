//! # Reconciliation
//!
//! The `Reconciler` runs the full pipeline for one repository:
//!
//! 1.  **Resolve**: confirm the name is in extrepo's catalog and classify its
//!     source file ([`crate::resolver`]).
//! 2.  **Decide**: compute the single corrective action
//!     ([`crate::action::decide`]).
//! 3.  **Execute**: run `extrepo enable|disable`, or nothing
//!     ([`crate::executor`]).
//!
//! The first error stops the pipeline; later stages never run. Nothing is
//! retried and nothing is cached between runs.
//!
//! Like the other components, the reconciler reaches extrepo through the
//! [`CommandRunner`] trait, so tests can swap in a mock runner with
//! [`Reconciler::with_runner`].

use log::info;
use serde::Serialize;

use crate::action::{decide, Action};
use crate::config::Settings;
use crate::error::Result;
use crate::executor::{ActionExecutor, Outcome};
use crate::extrepo::{CommandRunner, ExtrepoClient};
use crate::resolver::{RepositoryResolver, RepositoryStatus};
use crate::state::{DesiredState, RepositoryDetails};

/// Everything a successful reconciliation learned and did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub details: RepositoryDetails,
    pub action: Action,
    pub outcome: Outcome,
}

/// Drives resolve, decide and execute for one repository at a time.
pub struct Reconciler {
    settings: Settings,
    client: ExtrepoClient,
}

impl Reconciler {
    /// Creates a reconciler that spawns the configured extrepo program.
    pub fn new(settings: Settings) -> Self {
        let client = ExtrepoClient::new(settings.extrepo_bin.clone());
        Self { settings, client }
    }

    /// Creates a reconciler with a custom `CommandRunner`.
    ///
    /// This is primarily used for testing to inject a mock runner.
    pub fn with_runner(settings: Settings, runner: Box<dyn CommandRunner>) -> Self {
        let client = ExtrepoClient::with_runner(settings.extrepo_bin.clone(), runner);
        Self { settings, client }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn resolver(&self) -> RepositoryResolver<'_> {
        RepositoryResolver::new(&self.client, &self.settings.sources_dir)
    }

    /// Converge `repository_name` to `desired`.
    pub fn reconcile(&self, repository_name: &str, desired: DesiredState) -> Result<Report> {
        let details = self.resolver().resolve(repository_name)?;

        let action = decide(desired, details.state, details.source_state);
        info!(
            "repository {}: desired {}, current {} ({}), action {}",
            repository_name, desired, details.state, details.source_state, action
        );

        let outcome = ActionExecutor::new(&self.client, self.settings.check_mode)
            .execute(repository_name, action)?;

        Ok(Report {
            details,
            action,
            outcome,
        })
    }

    /// Report the current state of `repository_name` without changing it.
    pub fn status(&self, repository_name: &str) -> Result<RepositoryStatus> {
        self.resolver().inspect(repository_name)
    }
}
