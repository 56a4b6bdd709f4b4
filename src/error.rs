//! Error types for task execution.
//!
//! Every failure inside a task is one of [`Error`]'s variants. The task
//! entrypoints wrap it in a [`TaskError`] naming the task that failed, and
//! nothing is retried or recovered along the way.

use std::path::PathBuf;

use thiserror::Error;

use crate::cli::Task;

/// Boxed error returned across port boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Convenience alias for results inside a task.
pub type Result<T> = std::result::Result<T, Error>;

/// A failure raised by one step of a task.
#[derive(Debug, Error)]
pub enum Error {
    /// An external program ran and exited non-zero.
    ///
    /// `stderr` is the tool's own error text, passed through untouched. It
    /// is empty when the tool's output was streamed to the terminal.
    #[error(
        "running \"{program} {}\" failed with exit code {exit_code}{}",
        .args.join(" "),
        tool_text(.stderr)
    )]
    ExternalTool {
        /// Program name as invoked.
        program: String,
        /// Argument list as invoked.
        args: Vec<String>,
        /// Exit status reported by the process (`-1` if killed by a signal).
        exit_code: i32,
        /// Captured standard error of the tool.
        stderr: String,
    },

    /// An external program could not be started at all.
    #[error("could not start \"{program}\": {source}")]
    Spawn {
        /// Program name as invoked.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: BoxError,
    },

    /// A path could not be listed, opened, read, or written.
    #[error("could not {action} {}: {source}", .path.display())]
    Filesystem {
        /// What was being attempted ("list", "read", "write", "stat").
        action: &'static str,
        /// The path involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: BoxError,
    },

    /// The per-directory callback failed during a tree walk.
    #[error("walk aborted at {}: {source}", .path.display())]
    Traversal {
        /// Directory the callback was invoked for.
        path: PathBuf,
        /// The callback's error.
        #[source]
        source: Box<Error>,
    },
}

fn tool_text(stderr: &str) -> String {
    let trimmed = stderr.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

impl Error {
    /// Builds a [`Error::Filesystem`] for `path`.
    pub(crate) fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: BoxError,
    ) -> Self {
        Self::Filesystem { action, path: path.into(), source }
    }
}

/// A failed task: the task's name plus the step that failed.
#[derive(Debug, Error)]
#[error("{task}: {source}")]
pub struct TaskError {
    /// The task that was running.
    pub task: Task,
    /// What went wrong.
    #[source]
    pub source: Error,
}

impl TaskError {
    /// Wraps `source` as a failure of `task`.
    #[must_use]
    pub fn new(task: Task, source: Error) -> Self {
        Self { task, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_tool_message_includes_tool_text() {
        let err = Error::ExternalTool {
            program: "protoc".into(),
            args: vec!["--go_out=.".into(), "record.proto".into()],
            exit_code: 1,
            stderr: "record.proto: No such file or directory\n".into(),
        };
        assert_eq!(
            err.to_string(),
            "running \"protoc --go_out=. record.proto\" failed with exit code 1: \
             record.proto: No such file or directory"
        );
    }

    #[test]
    fn external_tool_message_without_stderr() {
        let err = Error::ExternalTool {
            program: "go".into(),
            args: vec!["run".into(), "main.go".into()],
            exit_code: 2,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "running \"go run main.go\" failed with exit code 2");
    }

    #[test]
    fn task_error_names_the_task() {
        let err = TaskError::new(
            Task::Race,
            Error::filesystem("read", "/srv/coverage.out", "not found".into()),
        );
        assert_eq!(err.to_string(), "race: could not read /srv/coverage.out: not found");
    }

    #[test]
    fn traversal_error_identifies_directory() {
        let inner = Error::ExternalTool {
            program: "mockery".into(),
            args: vec!["--all".into()],
            exit_code: 1,
            stderr: "boom".into(),
        };
        let err =
            Error::Traversal { path: PathBuf::from("/x/internal/db"), source: Box::new(inner) };
        let msg = err.to_string();
        assert!(msg.starts_with("walk aborted at /x/internal/db"));
        assert!(msg.contains("boom"));
    }
}
