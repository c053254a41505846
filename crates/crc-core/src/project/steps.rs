//! Sequential step execution with per-step failure policy

use crate::error::{Error, Result};
use crate::runtime::process::{CommandRunner, ExternalCommand, ProcessError};
use colored::Colorize;

/// What happens when a step's command fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the pipeline
    Fatal,
    /// Print a warning and keep going
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: String,
    pub command: ExternalCommand,
    pub policy: FailurePolicy,
}

impl Step {
    pub fn fatal(label: impl Into<String>, command: ExternalCommand) -> Self {
        Self {
            label: label.into(),
            command,
            policy: FailurePolicy::Fatal,
        }
    }

    pub fn warn(label: impl Into<String>, command: ExternalCommand) -> Self {
        Self {
            label: label.into(),
            command,
            policy: FailurePolicy::Warn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    /// A `Warn` step failed and the pipeline continued
    Skipped,
}

impl StepOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, StepOutcome::Succeeded)
    }
}

/// Print a recoverable problem the way every pipeline step does
pub fn warning(message: &str) {
    log::warn!("{}", message);
    eprintln!("{} {}", "⚠️  Warning:".yellow(), message);
}

pub struct StepRunner<'a, R: CommandRunner> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> StepRunner<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    pub async fn run(&self, step: &Step) -> Result<StepOutcome> {
        println!("{} {}", "📦".blue(), step.label.bold());

        match self.runner.run(&step.command).await {
            Ok(()) => {
                println!("{} {}", "✅".green(), step.label.green());
                Ok(StepOutcome::Succeeded)
            }
            Err(source) => self.fail(step, source),
        }
    }

    fn fail(&self, step: &Step, source: ProcessError) -> Result<StepOutcome> {
        match step.policy {
            FailurePolicy::Fatal => Err(Error::StepFailed {
                step: step.label.clone(),
                source,
            }),
            FailurePolicy::Warn => {
                warning(&format!("{} failed: {}", step.label, source));
                Ok(StepOutcome::Skipped)
            }
        }
    }

    /// Run steps in order until the first one that does not succeed.
    ///
    /// Steps after a skipped one are not attempted.
    pub async fn run_chain(&self, steps: &[Step]) -> Result<StepOutcome> {
        for (i, step) in steps.iter().enumerate() {
            if !self.run(step).await?.succeeded() {
                let rest = &steps[i + 1..];
                if !rest.is_empty() {
                    log::warn!(
                        "skipping {}",
                        rest.iter().map(|s| s.label.as_str()).collect::<Vec<_>>().join(", ")
                    );
                }
                return Ok(StepOutcome::Skipped);
            }
        }
        Ok(StepOutcome::Succeeded)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Records every command; fails the ones whose display string was registered
    #[derive(Default)]
    pub struct RecordingRunner {
        pub calls: Mutex<Vec<ExternalCommand>>,
        failing: HashSet<String>,
        on_run: Option<Box<dyn Fn(&ExternalCommand) + Send + Sync>>,
    }

    impl RecordingRunner {
        pub fn failing(mut self, command: &str) -> Self {
            self.failing.insert(command.to_string());
            self
        }

        /// Side effect applied when a command runs (e.g. creating the project directory)
        pub fn on_run(mut self, f: impl Fn(&ExternalCommand) + Send + Sync + 'static) -> Self {
            self.on_run = Some(Box::new(f));
            self
        }

        pub fn displayed(&self) -> Vec<String> {
            self.calls.lock().unwrap().iter().map(|c| c.display()).collect()
        }
    }

    impl CommandRunner for RecordingRunner {
        async fn run(&self, command: &ExternalCommand) -> std::result::Result<(), ProcessError> {
            self.calls.lock().unwrap().push(command.clone());
            if let Some(f) = &self.on_run {
                f(command);
            }
            if self.failing.contains(&command.display()) {
                Err(ProcessError::Status {
                    command: command.display(),
                    code: Some(1),
                })
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingRunner;
    use super::*;

    fn git(args: &[&str]) -> ExternalCommand {
        ExternalCommand::new("git", args.iter().copied())
    }

    #[tokio::test]
    async fn test_fatal_failure_is_an_error() {
        let runner = RecordingRunner::default().failing("npm install");
        let steps = StepRunner::new(&runner);
        let err = steps
            .run(&Step::fatal("Installing dependencies", ExternalCommand::new("npm", ["install"])))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::StepFailed { ref step, .. } if step == "Installing dependencies"));
        assert_eq!(err.exit_code(), crate::error::EXIT_EXTERNAL);
    }

    #[tokio::test]
    async fn test_warn_failure_is_skipped() {
        let runner = RecordingRunner::default().failing("npm install zod");
        let steps = StepRunner::new(&runner);
        let outcome = steps
            .run(&Step::warn("Extra packages", ExternalCommand::new("npm", ["install", "zod"])))
            .await
            .unwrap();
        assert_eq!(outcome, StepOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_chain_stops_at_first_failure() {
        let runner = RecordingRunner::default().failing("git add .");
        let steps = StepRunner::new(&runner);
        let chain = vec![
            Step::warn("git init", git(&["init"])),
            Step::warn("git add", git(&["add", "."])),
            Step::warn("git commit", git(&["commit", "-m", "Initial commit"])),
        ];
        let outcome = steps.run_chain(&chain).await.unwrap();
        assert_eq!(outcome, StepOutcome::Skipped);
        assert_eq!(runner.displayed(), vec!["git init", "git add ."]);
    }

    #[tokio::test]
    async fn test_chain_success() {
        let runner = RecordingRunner::default();
        let steps = StepRunner::new(&runner);
        let chain = vec![
            Step::warn("git init", git(&["init"])),
            Step::warn("git add", git(&["add", "."])),
        ];
        assert!(steps.run_chain(&chain).await.unwrap().succeeded());
        assert_eq!(runner.calls.lock().unwrap().len(), 2);
    }
}
