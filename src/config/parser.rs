//! Generic TOML configuration parsing.
//!
//! Works with any `DeserializeOwned` type and reports failures with the file
//! path attached:
//!
//! ```text
//! Configuration error: Failed to parse /home/me/.repoman/settings.toml: invalid type ...
//! ```

use crate::core::{RepomanError, Result};
use crate::utils::fs::read_text_file;
use std::path::Path;

/// Reads and deserializes a TOML file.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = read_text_file(path, "loading settings")?;

    toml::from_str(&content).map_err(|e| RepomanError::ConfigError {
        message: format!("Failed to parse {}: {}", path.display(), e.message()),
    })
}
