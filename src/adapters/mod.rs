//! Port implementations.
//!
//! - `live`: real processes and real disk.
//! - `replaying`: serves previously recorded results from a cassette.

pub mod live;
pub mod replaying;

#[cfg(test)]
pub(crate) mod scripted;
