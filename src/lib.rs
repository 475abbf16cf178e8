//! # extrepo-repository Library
//!
//! This library decides whether an [extrepo](https://salsa.debian.org/extrepo-team/extrepo)
//! managed APT repository needs to be enabled or disabled on a host, and
//! applies the change only when necessary. It is used by the
//! `extrepo-repository` command-line tool, which an automation layer calls
//! once per repository and desired state.
//!
//! ## Quick Example
//!
//! ```
//! use extrepo_repository::action::{decide, Action};
//! use extrepo_repository::source_file::classify_source;
//! use extrepo_repository::state::DesiredState;
//!
//! let source_state = classify_source("Types: deb\nEnabled: no\n".as_bytes());
//! let action = decide(DesiredState::Enabled, source_state.current_state(), source_state);
//! assert_eq!(action, Action::EnableRepo);
//! ```
//!
//! ## Core Concepts
//!
//! - **States (`state`)**: closed enums for the on-disk file state, the
//!   logical repository state, and the desired state.
//! - **Classifier (`source_file`)**: reads a `.sources` file and classifies
//!   its `Enabled:` marker.
//! - **Resolver (`resolver`)**: checks extrepo's catalog and derives the
//!   current state.
//! - **Decision (`action`)**: the pure function picking the corrective
//!   action.
//! - **Executor (`executor`)**: runs `extrepo enable|disable`, honoring check
//!   mode.
//! - **Reconciler (`reconcile`)**: the pipeline tying the above together.
//!
//! All process execution goes through the `extrepo::CommandRunner` trait so
//! that every stage can be tested without extrepo installed.

pub mod action;
pub mod config;
pub mod defaults;
pub mod error;
pub mod executor;
pub mod extrepo;
pub mod output;
pub mod reconcile;
pub mod resolver;
pub mod source_file;
pub mod state;

#[cfg(test)]
mod action_proptest;
