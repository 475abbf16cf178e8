//! # Action Executor
//!
//! Applies a decided [`Action`] to one repository. This is the only step of
//! a reconciliation with side effects, and it runs at most one extrepo
//! command. In check mode it reports what would change without running
//! anything.

use log::info;
use serde::Serialize;

use crate::action::Action;
use crate::error::{Error, Result};
use crate::extrepo::ExtrepoClient;

/// Successful result of a reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub changed: bool,
    pub msg: String,
}

impl Outcome {
    fn unchanged(msg: String) -> Self {
        Self {
            changed: false,
            msg,
        }
    }

    fn changed(msg: String) -> Self {
        Self { changed: true, msg }
    }
}

/// Runs the extrepo command for an action, unless in check mode.
pub struct ActionExecutor<'a> {
    client: &'a ExtrepoClient,
    check_mode: bool,
}

impl<'a> ActionExecutor<'a> {
    pub fn new(client: &'a ExtrepoClient, check_mode: bool) -> Self {
        Self { client, check_mode }
    }

    /// Apply `action` to `repository_name` and describe the result.
    pub fn execute(&self, repository_name: &str, action: Action) -> Result<Outcome> {
        let Some(verb) = action.subcommand() else {
            info!("repository {} already in desired state", repository_name);
            return Ok(Outcome::unchanged(format!(
                "Repository {} already in desired state",
                repository_name
            )));
        };

        if self.check_mode {
            info!(
                "check mode: skipping `{} {} {}`",
                self.client.program(),
                verb,
                repository_name
            );
        } else {
            let invocation = match action {
                Action::DisableRepo => self.client.disable(repository_name)?,
                _ => self.client.enable(repository_name)?,
            };
            if !invocation.output.success() {
                return Err(Error::ActionFailed {
                    verb: verb.to_string(),
                    name: repository_name.to_string(),
                    command: invocation.command,
                    code: invocation.output.code,
                    output: invocation.output.combined(),
                });
            }
            info!("`{}` succeeded", invocation.command);
        }

        let msg = match action {
            Action::DisableRepo => format!("Repository {} was disabled", repository_name),
            _ => format!("Repository {} was (re-)enabled", repository_name),
        };
        Ok(Outcome::changed(msg))
    }
}
