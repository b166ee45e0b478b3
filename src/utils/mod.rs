//! Utilities: file system helpers, path expansion and progress output.
//!
//! - [`fs`] - atomic writes, tolerant reads, metadata
//! - [`platform`] - home directory and `~`/`$VAR` expansion
//! - [`progress`] - spinners for long-running operations

pub mod fs;
pub mod platform;
pub mod progress;

