//! Cassettes: recorded port interactions for deterministic replay.
//!
//! A cassette is a YAML file holding the ordered calls made through the
//! `fs` and `tool` ports during one task run. Replaying one backs the
//! integration tests.

pub mod format;
pub mod recorder;
pub mod replayer;

use std::path::PathBuf;

use thiserror::Error;

/// Failures loading or writing cassettes.
#[derive(Debug, Error)]
pub enum CassetteError {
    /// The cassette file or directory could not be read or written.
    #[error("cassette I/O on {}: {source}", .path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The cassette file is not valid cassette YAML.
    #[error("failed to parse cassette {}: {source}", .path.display())]
    Parse {
        /// File involved.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}
