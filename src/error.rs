//! # Error Handling
//!
//! This module defines the error type for the `extrepo-repository` library.
//! It uses `thiserror` to describe every way a reconciliation can fail.
//!
//! Only invocation-level failures are errors. A missing or inconsistent
//! source file is a detected state (see [`crate::source_file`]) and never
//! surfaces here.
//!
//! The messages of the subprocess variants carry the failing command line,
//! its exit code and the combined output, so that the calling automation
//! layer can show them to an operator verbatim.

use thiserror::Error;

/// Main error type for extrepo-repository operations
#[derive(Error, Debug)]
pub enum Error {
    /// `extrepo search` exited with a non-zero status.
    #[error("Error attempting to search for repository [command: {command}]: ({code}) {output}")]
    SearchFailed {
        command: String,
        code: i32,
        output: String,
    },

    /// The repository name is not part of extrepo's metadata catalog.
    ///
    /// This is a usage error rather than a state that can be reconciled.
    #[error("Repository {name} is not present in extrepo's metadata")]
    UnknownRepository { name: String },

    /// `extrepo enable` or `extrepo disable` exited with a non-zero status.
    #[error("Error attempting to {verb} repository {name} [command: {command}]: ({code}) {output}")]
    ActionFailed {
        verb: String,
        name: String,
        command: String,
        code: i32,
        output: String,
    },

    /// The external program could not be started at all.
    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A result could not be rendered as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
