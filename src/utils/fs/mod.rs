//! File system helpers.
//!
//! Every helper reports failures as [`FileOperationError`](crate::core::FileOperationError)
//! so the path and purpose of the failed operation reach the user.

pub mod atomic;
pub mod dirs;
pub mod formats;
pub mod metadata;

// Atomic write operations
pub use atomic::{AtomicFileWriter, safe_write};

// Directory operations
pub use dirs::ensure_dir;

// Text I/O
pub use formats::{read_optional_text_file, read_text_file};

// Metadata operations
pub use metadata::{get_modified_time, is_existing_dir};
