//! # extrepo Invocation
//!
//! This module is the only place where external processes are started. It is
//! built around the [`CommandRunner`] trait, the capability "run a command and
//! observe its exit code and output". The rest of the crate talks to extrepo
//! through an [`ExtrepoClient`], which owns a boxed runner.
//!
//! In the binary, [`SystemRunner`] spawns real processes. In tests, a
//! recording mock is injected instead, so that the resolver and the executor
//! can be exercised without extrepo being installed.

use log::debug;
use std::process::Command;

use crate::defaults::EXTREPO_EXECUTABLE;
use crate::error::{Error, Result};

/// Exit status and captured output of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `-1` if the process was terminated by a signal.
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the process exited with status zero.
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Standard output followed by standard error.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Trait for running external commands - allows mocking in tests
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` to completion.
    ///
    /// A non-zero exit is not an error at this level; only failing to start
    /// the process is.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// The default implementation of `CommandRunner`, which spawns real
/// processes with `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| Error::Spawn {
                command: command_line(program, args),
                source,
            })?;

        Ok(CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Render a program and its arguments the way a shell user would type them.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A finished extrepo invocation together with the command line that ran.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: String,
    pub output: CommandOutput,
}

/// Typed access to the extrepo sub-commands used by the reconciler.
pub struct ExtrepoClient {
    program: String,
    runner: Box<dyn CommandRunner>,
}

impl ExtrepoClient {
    /// Creates a client that spawns `program` as a real process.
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_runner(program, Box::new(SystemRunner))
    }

    /// Creates a client backed by a custom `CommandRunner`.
    ///
    /// This is primarily used by tests to inject a mock runner.
    pub fn with_runner(program: impl Into<String>, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    /// The program this client invokes.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// `extrepo search <repository_name>`
    pub fn search(&self, repository_name: &str) -> Result<Invocation> {
        self.invoke("search", repository_name)
    }

    /// `extrepo enable <repository_name>`
    pub fn enable(&self, repository_name: &str) -> Result<Invocation> {
        self.invoke("enable", repository_name)
    }

    /// `extrepo disable <repository_name>`
    pub fn disable(&self, repository_name: &str) -> Result<Invocation> {
        self.invoke("disable", repository_name)
    }

    fn invoke(&self, subcommand: &str, repository_name: &str) -> Result<Invocation> {
        let args = [subcommand, repository_name];
        let command = command_line(&self.program, &args);
        debug!("running `{}`", command);

        let output = self.runner.run(&self.program, &args)?;
        debug!("`{}` exited with {}", command, output.code);

        Ok(Invocation { command, output })
    }
}

impl Default for ExtrepoClient {
    fn default() -> Self {
        Self::new(EXTREPO_EXECUTABLE)
    }
}
