//! Filesystem port for file and directory I/O.

use std::ffi::OsString;
use std::path::Path;

use serde::Deserialize;

use crate::error::BoxError;

/// What a directory entry is, as far as a tree walk cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A real directory.
    Directory,
    /// A symlink whose target is a directory.
    LinkedDirectory,
    /// Anything else, including dangling symlinks.
    Other,
}

impl EntryKind {
    /// Returns `true` for real and linked directories alike.
    #[must_use]
    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory | Self::LinkedDirectory)
    }
}

/// Provides filesystem access for the tasks.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read.
    fn read(&self, path: &Path) -> Result<Vec<u8>, BoxError>;

    /// Writes `contents` to a file, creating it or truncating what was there.
    ///
    /// Newly created files get mode `0o755` on unix.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), BoxError>;

    /// Lists the names of the immediate entries of a directory, sorted.
    ///
    /// Names are returned as-is, whether or not they are valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn list_dir(&self, path: &Path) -> Result<Vec<OsString>, BoxError>;

    /// Classifies `path`, following a symlink only to see what it points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or cannot be inspected.
    fn entry_kind(&self, path: &Path) -> Result<EntryKind, BoxError>;
}
