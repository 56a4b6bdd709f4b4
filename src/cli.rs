//! CLI argument definitions.

use std::fmt;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `vinyl-tasks`.
#[derive(Debug, Parser)]
#[command(name = "vinyl-tasks", version, about = "Development tasks for the vinyl server")]
pub struct Cli {
    /// The task to run.
    #[command(subcommand)]
    pub task: Task,
}

/// The user-invocable tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Task {
    /// Start the vinyl server (`go run main.go` in cmd/server).
    Start,
    /// Regenerate gRPC boilerplate from the protobuf definitions.
    Proto,
    /// Run race-enabled tests with coverage, minus generated code.
    Race,
    /// Generate mocks for the interfaces under internal/.
    Mock,
}

impl Task {
    /// The task's command-line name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Proto => "proto",
            Self::Race => "race",
            Self::Mock => "mock",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
