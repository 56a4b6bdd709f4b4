//! Live adapters for real external interactions.

pub mod filesystem;
pub mod tool;

pub use filesystem::LiveFileSystem;
pub use tool::LiveToolRunner;
