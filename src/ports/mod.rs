//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the task logic and the outside
//! world (external programs, the filesystem). Implementations live in
//! `src/adapters/`.

pub mod filesystem;
pub mod tool;

pub use filesystem::{EntryKind, FileSystem};
pub use tool::{OutputMode, ToolInvocation, ToolOutput, ToolRunner};
