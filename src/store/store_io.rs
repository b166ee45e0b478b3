//! Loading and saving the user config file.

use crate::core::Result;
use crate::store::{ConfigDocument, ConfigStore};
use crate::utils::fs::{read_optional_text_file, safe_write};
use tracing::debug;

impl ConfigStore {
    /// Read the config file into a document. A missing file is an empty
    /// document.
    pub fn load(&self) -> Result<ConfigDocument> {
        match read_optional_text_file(&self.path, "reading user config")? {
            Some(text) => Ok(ConfigDocument::parse(&text)),
            None => {
                debug!("User config {} does not exist, treating as empty", self.path.display());
                Ok(ConfigDocument::new())
            }
        }
    }

    /// Write the document back, replacing the file atomically. Parent
    /// directories are created as needed.
    pub fn save(&self, document: &ConfigDocument) -> Result<()> {
        debug!("Writing user config {} ({} lines)", self.path.display(), document.len());
        safe_write(&self.path, &document.to_string())?;
        Ok(())
    }
}
