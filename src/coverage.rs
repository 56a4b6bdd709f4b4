//! Coverage profile sanitizing.
//!
//! A Go coverage profile is line oriented: a `mode:` header followed by one
//! line per covered block. Lines for generated protobuf code are noise in
//! coverage reports, so they are dropped before the profile is uploaded.
//!
//! Profiles are handled as raw bytes. File names inside them are whatever
//! the toolchain wrote, so nothing here assumes UTF-8.

use std::path::Path;

use crate::error::{Error, Result};
use crate::ports::FileSystem;

/// A profile with its marked lines taken out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    /// Kept lines joined with `\n`, without a trailing newline.
    pub content: Vec<u8>,
    /// How many lines were dropped.
    pub removed: usize,
}

/// Returns `profile` without the lines that contain `marker`.
///
/// Lines are split the way Go's `bufio.ScanLines` splits them: on `\n`, with
/// one trailing `\r` removed from each line, including a final unterminated
/// one. The kept lines are rejoined with `\n` in their original order; no
/// trailing newline is added. An input with no kept lines yields nothing.
#[must_use]
pub fn strip_marked_lines(profile: &[u8], marker: &str) -> Stripped {
    let marker = marker.as_bytes();
    let mut content = Vec::with_capacity(profile.len());
    let mut removed = 0;
    let mut kept = 0usize;

    for line in scan_lines(profile) {
        if contains(line, marker) {
            removed += 1;
            continue;
        }
        if kept > 0 {
            content.push(b'\n');
        }
        content.extend_from_slice(line);
        kept += 1;
    }

    Stripped { content, removed }
}

/// Rewrites the coverage profile at `path` in place without marked lines.
///
/// Returns the number of lines removed.
///
/// # Errors
///
/// Returns [`Error::Filesystem`] if the profile cannot be read or written.
pub fn sanitize_file(fs: &dyn FileSystem, path: &Path, marker: &str) -> Result<usize> {
    let profile = fs.read(path).map_err(|e| Error::filesystem("read", path, e))?;
    let Stripped { content, removed } = strip_marked_lines(&profile, marker);

    fs.write(path, &content).map_err(|e| Error::filesystem("write", path, e))?;
    Ok(removed)
}

/// Splits `data` into lines like `bufio.ScanLines`.
fn scan_lines(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = data.strip_suffix(b"\n").unwrap_or(data);
    let lines = (!data.is_empty()).then(|| body.split(|&b| b == b'\n'));
    lines.into_iter().flatten().map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}
