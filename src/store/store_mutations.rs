//! Appending and removing user config entries.

use crate::constants::{COMMENT_MARKER, ENTRY_SEPARATOR};
use crate::core::{RepomanError, Result};
use crate::store::{ConfigEntry, ConfigOption, ConfigStore};
use tracing::{debug, info};

impl ConfigStore {
    /// Append `option = value` as a new line.
    ///
    /// Surrounding whitespace is trimmed from `value`. Existing entries are
    /// not checked for duplicates.
    ///
    /// # Errors
    ///
    /// [`RepomanError::InvalidEntry`] if the value is empty or contains `#` or
    /// a line break; [`RepomanError::FileOperation`] if the file cannot be
    /// read or written.
    pub fn add_entry(&self, option: ConfigOption, value: &str) -> Result<()> {
        let value = validate_value(option, value)?;

        let mut document = self.load()?;
        document.push(ConfigEntry::option(option, value));
        self.save(&document)?;

        info!("Added '{option} {ENTRY_SEPARATOR} {value}' to {}", self.path.display());
        Ok(())
    }

    /// Blank the first `option = value` line, keeping its trailing comment.
    ///
    /// The value is matched literally (after trimming). Later duplicates are
    /// left alone.
    ///
    /// # Errors
    ///
    /// [`RepomanError::EntryNotFound`] if no line matches;
    /// [`RepomanError::FileOperation`] if the file cannot be read or written.
    pub fn remove_entry(&self, option: ConfigOption, value: &str) -> Result<()> {
        let value = value.trim();
        let mut document = self.load()?;

        let Some(index) = document.blank_first(option, value) else {
            return Err(RepomanError::EntryNotFound {
                key: option.to_string(),
                value: value.to_string(),
            });
        };

        debug!("Blanking line {} of {}", index + 1, self.path.display());
        self.save(&document)?;

        info!("Removed '{option} {ENTRY_SEPARATOR} {value}' from {}", self.path.display());
        Ok(())
    }
}

fn validate_value(option: ConfigOption, value: &str) -> Result<&str> {
    let value = value.trim();
    let reason = if value.is_empty() {
        Some("value may not be empty".to_string())
    } else if value.contains(COMMENT_MARKER) {
        Some(format!("value '{value}' contains the comment marker '{COMMENT_MARKER}'"))
    } else if value.contains(['\n', '\r']) {
        Some("value may not contain a line break".to_string())
    } else {
        None
    };

    match reason {
        Some(reason) => Err(RepomanError::InvalidEntry {
            key: option.to_string(),
            reason,
        }),
        None => Ok(value),
    }
}
