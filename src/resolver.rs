//! # Repository-State Resolver
//!
//! Works out the current state of one repository:
//!
//! 1. Ask extrepo's catalog whether the name exists (`extrepo search`). The
//!    search is fuzzy, so the output is scanned for an exact `Found <name>:`
//!    line; `tor` must not match `Found torproject:`.
//! 2. Classify `extrepo_<name>.sources` in the sources directory.
//! 3. Map the file state to a [`CurrentState`].
//!
//! A failing search and an unknown name are both errors for
//! [`RepositoryResolver::resolve`]. [`RepositoryResolver::inspect`] reports an
//! unknown name as `definition-not-found` instead, for read-only queries.

use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::defaults::sources_filename;
use crate::error::{Error, Result};
use crate::extrepo::ExtrepoClient;
use crate::source_file::classify_source_file;
use crate::state::{RepositoryDetails, RepositoryState, SourceFileState};

/// Whether `search_output` lists `repository_name` exactly.
pub fn is_in_catalog(search_output: &str, repository_name: &str) -> bool {
    let expected = format!("Found {repository_name}:");
    search_output
        .lines()
        .filter(|line| line.starts_with("Found "))
        .any(|line| line == expected)
}

/// Read-only view of a repository, including names unknown to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryStatus {
    pub name: String,
    pub state: RepositoryState,
    /// `None` when the name is not in the catalog.
    pub source_state: Option<SourceFileState>,
    pub source_path: PathBuf,
}

/// Resolves repository names to their current state on this host.
pub struct RepositoryResolver<'a> {
    client: &'a ExtrepoClient,
    sources_dir: &'a Path,
}

impl<'a> RepositoryResolver<'a> {
    pub fn new(client: &'a ExtrepoClient, sources_dir: &'a Path) -> Self {
        Self {
            client,
            sources_dir,
        }
    }

    /// Path of the source file extrepo maintains for `repository_name`.
    pub fn source_path(&self, repository_name: &str) -> PathBuf {
        self.sources_dir.join(sources_filename(repository_name))
    }

    /// Checks the catalog for an exact match of `repository_name`.
    pub fn is_known(&self, repository_name: &str) -> Result<bool> {
        let invocation = self.client.search(repository_name)?;
        if !invocation.output.success() {
            return Err(Error::SearchFailed {
                command: invocation.command,
                code: invocation.output.code,
                output: invocation.output.combined(),
            });
        }

        let found = is_in_catalog(&invocation.output.stdout, repository_name);
        debug!(
            "repository {} {} extrepo's catalog",
            repository_name,
            if found { "found in" } else { "missing from" }
        );
        Ok(found)
    }

    /// Resolves a repository that must exist in the catalog.
    pub fn resolve(&self, repository_name: &str) -> Result<RepositoryDetails> {
        if !self.is_known(repository_name)? {
            return Err(Error::UnknownRepository {
                name: repository_name.to_string(),
            });
        }

        let source_state = classify_source_file(&self.source_path(repository_name));
        let details = RepositoryDetails::from_source_state(repository_name, source_state);
        info!(
            "repository {} is {} (source file: {})",
            details.name, details.state, details.source_state
        );
        Ok(details)
    }

    /// Like [`resolve`](Self::resolve), but reports an unknown name as
    /// [`RepositoryState::DefinitionNotFound`] instead of failing.
    pub fn inspect(&self, repository_name: &str) -> Result<RepositoryStatus> {
        let source_path = self.source_path(repository_name);

        if !self.is_known(repository_name)? {
            return Ok(RepositoryStatus {
                name: repository_name.to_string(),
                state: RepositoryState::DefinitionNotFound,
                source_state: None,
                source_path,
            });
        }

        let source_state = classify_source_file(&source_path);
        Ok(RepositoryStatus {
            name: repository_name.to_string(),
            state: source_state.current_state().into(),
            source_state: Some(source_state),
            source_path,
        })
    }
}
