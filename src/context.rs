//! Service context bundling the port trait objects.

use std::path::Path;

use crate::adapters::live::{LiveFileSystem, LiveToolRunner};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingToolRunner};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::CassetteError;
use crate::ports::filesystem::FileSystem;
use crate::ports::tool::ToolRunner;

/// Bundles the port trait objects every task runs against.
///
/// Constructors wire up different adapter implementations (live or
/// replaying).
pub struct ServiceContext {
    /// Filesystem for listing, reading, and writing.
    pub fs: Box<dyn FileSystem>,
    /// Runner for external programs.
    pub tool: Box<dyn ToolRunner>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(fs: Box<dyn FileSystem>, tool: Box<dyn ToolRunner>) -> Self {
        Self { fs, tool }
    }

    /// Creates a live context: real disk, real processes.
    #[must_use]
    pub fn live() -> Self {
        Self::new(Box::new(LiveFileSystem), Box::new(LiveToolRunner))
    }

    /// Creates a replaying context from a single cassette holding every port.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, CassetteError> {
        let cassette = Cassette::load(path)?;

        // Separate replayers so that per-port cursors are independent.
        Ok(Self::new(
            Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
            Box::new(ReplayingToolRunner::new(CassetteReplayer::new(&cassette))),
        ))
    }
}
