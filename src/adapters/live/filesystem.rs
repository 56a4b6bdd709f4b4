//! Live filesystem adapter using `std::fs`.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::BoxError;
use crate::ports::filesystem::{EntryKind, FileSystem};

/// Mode given to files this adapter creates.
#[cfg(unix)]
const CREATE_MODE: u32 = 0o755;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>, BoxError> {
        Ok(std::fs::read(path)?)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), BoxError> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(CREATE_MODE);
        }
        let mut file = options.open(path)?;
        file.write_all(contents)?;
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<OsString>, BoxError> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            entries.push(entry?.file_name());
        }
        entries.sort();
        Ok(entries)
    }

    fn entry_kind(&self, path: &Path) -> Result<EntryKind, BoxError> {
        let meta = std::fs::symlink_metadata(path)?;
        if meta.is_dir() {
            return Ok(EntryKind::Directory);
        }
        if meta.file_type().is_symlink() {
            // A dangling link has no target to classify.
            let target_is_dir = std::fs::metadata(path).is_ok_and(|m| m.is_dir());
            if target_is_dir {
                return Ok(EntryKind::LinkedDirectory);
            }
        }
        Ok(EntryKind::Other)
    }
}
