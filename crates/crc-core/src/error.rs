//! Error type shared by the scaffolding engine, the project pipelines and the prompts

use crate::runtime::process::ProcessError;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for invalid input (bad name, bad path, conflicting flags, existing target)
pub const EXIT_VALIDATION: i32 = 1;
/// Exit code for a fatal external tool failure
pub const EXIT_EXTERNAL: i32 = 2;
/// Exit code for filesystem or terminal failures
pub const EXIT_IO: i32 = 3;
/// Exit code used when the user cancels (mirrors SIGINT)
pub const EXIT_CANCELLED: i32 = 130;

#[derive(Debug, Error)]
pub enum Error {
    #[error("a name is required")]
    MissingName,

    #[error("invalid name '{0}': it must start with an uppercase letter and contain only letters and numbers")]
    InvalidName(String),

    #[error("invalid path '{0}': use relative paths starting with \"./\"")]
    InvalidPath(String),

    #[error("invalid project name '{0}': use only lowercase letters, numbers and hyphens")]
    InvalidProjectName(String),

    #[error("styled and emotion cannot be used together, pick a single styling option")]
    StyleConflict,

    #[error("a {0} is not built from component answers")]
    NotAUnit(&'static str),

    #[error("the directory '{}' already exists", .0.display())]
    TargetExists(PathBuf),

    #[error("{step} failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: ProcessError,
    },

    #[error("missing required runtime: {0}")]
    MissingRuntime(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("terminal interaction failed: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure class
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingName
            | Error::InvalidName(_)
            | Error::InvalidPath(_)
            | Error::InvalidProjectName(_)
            | Error::StyleConflict
            | Error::NotAUnit(_)
            | Error::TargetExists(_) => EXIT_VALIDATION,
            Error::StepFailed { .. } | Error::MissingRuntime(_) => EXIT_EXTERNAL,
            Error::Io { .. } | Error::Parse { .. } | Error::Prompt(_) => EXIT_IO,
            Error::Cancelled => EXIT_CANCELLED,
        }
    }
}

impl From<std::io::Error> for Error {
    /// Terminal errors from cliclack; an interrupted prompt means the user pressed Esc/Ctrl+C
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::Interrupted {
            Error::Cancelled
        } else {
            Error::Prompt(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_class() {
        assert_eq!(Error::StyleConflict.exit_code(), EXIT_VALIDATION);
        assert_eq!(Error::TargetExists(PathBuf::from("app")).exit_code(), EXIT_VALIDATION);
        assert_eq!(
            Error::StepFailed {
                step: "npm install".to_string(),
                source: ProcessError::Status {
                    command: "npm install".to_string(),
                    code: Some(1),
                },
            }
            .exit_code(),
            EXIT_EXTERNAL
        );
        assert_eq!(
            Error::io("Foo/Foo.jsx", std::io::Error::other("disk full")).exit_code(),
            EXIT_IO
        );
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            Error::Parse {
                path: PathBuf::from("package.json"),
                source: parse,
            }
            .exit_code(),
            EXIT_IO
        );
        assert_eq!(Error::NotAUnit("project").exit_code(), EXIT_VALIDATION);
        assert_eq!(Error::Cancelled.exit_code(), EXIT_CANCELLED);
    }

    #[test]
    fn test_interrupted_prompt_is_cancellation() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::Interrupted, "esc").into();
        assert!(matches!(err, Error::Cancelled));

        let err: Error = std::io::Error::other("broken tty").into();
        assert!(matches!(err, Error::Prompt(_)));
    }
}
