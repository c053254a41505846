//! External process invocation
//!
//! Pipelines describe what to run as [`ExternalCommand`] values and hand them
//! to a [`CommandRunner`]. The real runner spawns through tokio and lets the
//! child write straight to the terminal; tests substitute a recording runner.

use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command as TokioCommand;

/// A single program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; `None` runs in the caller's directory
    pub cwd: Option<PathBuf>,
    /// Text written to the child's stdin before it is closed
    pub stdin: Option<String>,
}

impl ExternalCommand {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            stdin: None,
        }
    }

    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn with_stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Shell-like rendering for logs and messages
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Why an external command did not succeed
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("could not start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with status {}", code.map(|c| c.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    Status { command: String, code: Option<i32> },
}

/// Runs external commands to completion
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn run(&self, command: &ExternalCommand) -> Result<(), ProcessError>;
}

/// Runner backed by real processes; output is inherited so the user sees npm/git progress
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &ExternalCommand) -> Result<(), ProcessError> {
        log::debug!("running `{}` in {:?}", command, command.cwd);
        println!("{} {}", "Running:".dimmed(), command.display().yellow());

        let mut cmd = TokioCommand::new(&command.program);
        cmd.args(&command.args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .stdin(if command.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::inherit()
            });
        if let Some(dir) = &command.cwd {
            cmd.current_dir(dir);
        }

        let spawn_error = |source| ProcessError::Spawn {
            command: command.display(),
            source,
        };

        let mut child = cmd.spawn().map_err(spawn_error)?;

        if let (Some(input), Some(mut stdin)) = (&command.stdin, child.stdin.take()) {
            // a child that exits without reading its input is not an error on our side
            if let Err(e) = stdin.write_all(input.as_bytes()).await {
                log::debug!("stdin for `{}` closed early: {}", command, e);
            }
            drop(stdin);
        }

        let status = child.wait().await.map_err(spawn_error)?;

        if status.success() {
            Ok(())
        } else {
            Err(ProcessError::Status {
                command: command.display(),
                code: status.code(),
            })
        }
    }
}
