//! Project layout: every path a task touches, derived from the task root.
//!
//! ```text
//! <parent>/
//!   ├── protobuf/<group>/*.proto    definition groups
//!   └── <root>/                     task root (process cwd at startup)
//!         ├── cmd/server/main.go    server entrypoint
//!         ├── internal/             source tree for tests and mocks
//!         └── coverage.out          coverage artifact
//! ```

use std::path::{Path, PathBuf};

/// Definition groups regenerated by the `proto` task.
pub const PROTO_GROUPS: &[&str] = &["record"];

/// File-name suffix of protocol definition files.
pub const PROTO_SUFFIX: &str = ".proto";

/// Substring marking a coverage line as belonging to generated protobuf code.
pub const GENERATED_MARKER: &str = ".pb.";

/// File name of the coverage artifact, relative to the task root.
pub const COVERAGE_FILE: &str = "coverage.out";

/// Immutable set of paths derived from one task root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLayout {
    root: PathBuf,
}

impl TaskLayout {
    /// Layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at the process's current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// The task root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Root of the internal source tree (`<root>/internal`).
    #[must_use]
    pub fn internal_dir(&self) -> PathBuf {
        self.root.join("internal")
    }

    /// Directory holding the server's `main.go`.
    #[must_use]
    pub fn server_dir(&self) -> PathBuf {
        self.root.join("cmd").join("server")
    }

    /// Source directory of a definition group (`<root>/../protobuf/<group>`).
    #[must_use]
    pub fn proto_group_dir(&self, group: &str) -> PathBuf {
        self.root.join("..").join("protobuf").join(group)
    }

    /// Path of the coverage artifact.
    #[must_use]
    pub fn coverage_file(&self) -> PathBuf {
        self.root.join(COVERAGE_FILE)
    }
}
