//! Depth-first directory walker.
//!
//! Visits every directory below a root, at any depth, exactly once and
//! hands each one to a callback. The root itself is never visited and
//! non-directories are skipped. A symlink to a directory is visited like any
//! other directory but never descended into, so a link cycle cannot make the
//! walk revisit a directory. Dangling links are skipped.
//!
//! The first failure stops the walk: a callback error comes back as
//! [`Error::Traversal`] carrying the directory it failed on.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::ports::{EntryKind, FileSystem};

/// Walks the tree under `root`, calling `visit` for each directory below it.
///
/// Siblings are visited in name order, parents before their children.
/// Returns the visited directories in visit order.
///
/// # Errors
///
/// - [`Error::Filesystem`] if `root` is missing or not a directory, or if a
///   directory cannot be listed or an entry cannot be inspected.
/// - [`Error::Traversal`] wrapping the first error returned by `visit`.
pub fn walk<F>(fs: &dyn FileSystem, root: &Path, mut visit: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(&Path) -> Result<()>,
{
    let kind = fs.entry_kind(root).map_err(|e| Error::filesystem("stat", root, e))?;
    if !kind.is_dir() {
        return Err(Error::filesystem("walk", root, "not a directory".into()));
    }

    let mut visited = Vec::new();
    let mut pending = children(fs, root)?;

    while let Some(path) = pending.pop() {
        let kind = fs.entry_kind(&path).map_err(|e| Error::filesystem("stat", &path, e))?;
        if !kind.is_dir() {
            continue;
        }

        debug!(dir = %path.display(), "visiting");
        if let Err(source) = visit(&path) {
            return Err(Error::Traversal { path, source: Box::new(source) });
        }

        if kind == EntryKind::Directory {
            pending.extend(children(fs, &path)?);
        }
        visited.push(path);
    }

    Ok(visited)
}

/// Entries of `dir`, reversed so that popping yields them in name order.
fn children(fs: &dyn FileSystem, dir: &Path) -> Result<Vec<PathBuf>> {
    let names = fs.list_dir(dir).map_err(|e| Error::filesystem("list", dir, e))?;
    Ok(names.iter().rev().map(|name| dir.join(name)).collect())
}
