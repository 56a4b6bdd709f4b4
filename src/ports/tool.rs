//! External tool port: runs another program and reports how it exited.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::BoxError;

/// What happens to a tool's standard output and error streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Collect both streams into the returned [`ToolOutput`].
    Captured,
    /// Stream both straight to this process's terminal.
    Inherited,
}

/// One invocation of an external program.
///
/// The working directory is part of the invocation; nothing in this crate
/// changes the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Program to run, resolved through `PATH`.
    pub program: String,
    /// Arguments, in order.
    pub args: Vec<String>,
    /// Directory the program runs in.
    pub working_dir: PathBuf,
    /// How the program's output is handled.
    pub output: OutputMode,
}

impl ToolInvocation {
    /// Builds a captured-output invocation of `program` in `working_dir`.
    pub fn new<I, S>(program: impl Into<String>, args: I, working_dir: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: working_dir.to_path_buf(),
            output: OutputMode::Captured,
        }
    }

    /// Streams the program's output to the terminal instead of capturing it.
    #[must_use]
    pub fn inherit_output(mut self) -> Self {
        self.output = OutputMode::Inherited;
        self
    }

    /// The command line as a single display string.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How an external program finished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolOutput {
    /// The exit code of the process (`-1` when terminated by a signal).
    pub exit_code: i32,
    /// Captured standard output (empty for inherited output).
    pub stdout: String,
    /// Captured standard error (empty for inherited output).
    pub stderr: String,
}

impl ToolOutput {
    /// Returns `true` when the process exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs external programs.
///
/// Blocks until the program exits. A non-zero exit is not an error at this
/// level; it is reported through [`ToolOutput::exit_code`].
pub trait ToolRunner: Send + Sync {
    /// Runs `invocation` to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned or waited on.
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, BoxError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_joins_program_and_args() {
        let inv = ToolInvocation::new("mockery", ["--all", "--case", "underscore"], Path::new("/"));
        assert_eq!(inv.command_line(), "mockery --all --case underscore");
        assert_eq!(inv.output, OutputMode::Captured);
    }

    #[test]
    fn inherit_output_switches_mode() {
        let inv = ToolInvocation::new("go", ["run", "main.go"], Path::new("/srv")).inherit_output();
        assert_eq!(inv.output, OutputMode::Inherited);
        assert_eq!(inv.working_dir, PathBuf::from("/srv"));
    }
}
