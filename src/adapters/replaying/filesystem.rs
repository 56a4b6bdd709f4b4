//! Replaying adapter for the `FileSystem` port.

use std::ffi::OsString;
use std::path::Path;
use std::sync::Mutex;

use super::extract_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::BoxError;
use crate::ports::filesystem::{EntryKind, FileSystem};

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_output(&self, method: &str) -> serde_json::Value {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer.next_interaction("fs", method).output.clone()
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read(&self, _path: &Path) -> Result<Vec<u8>, BoxError> {
        let text: String = extract_result(&self.next_output("read"), "fs::read")?;
        Ok(text.into_bytes())
    }

    fn write(&self, _path: &Path, _contents: &[u8]) -> Result<(), BoxError> {
        let output = self.next_output("write");
        if let Some(err) = output.get("err") {
            let msg = err.as_str().unwrap_or("unknown error").to_string();
            return Err(msg.into());
        }
        Ok(())
    }

    fn list_dir(&self, _path: &Path) -> Result<Vec<OsString>, BoxError> {
        let names: Vec<String> = extract_result(&self.next_output("list_dir"), "fs::list_dir")?;
        Ok(names.into_iter().map(OsString::from).collect())
    }

    fn entry_kind(&self, _path: &Path) -> Result<EntryKind, BoxError> {
        extract_result(&self.next_output("entry_kind"), "fs::entry_kind")
    }
}
