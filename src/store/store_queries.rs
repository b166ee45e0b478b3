//! Read-only queries over the user config file.

use crate::core::Result;
use crate::store::{ConfigOption, ConfigStore};
use std::collections::BTreeSet;

impl ConfigStore {
    /// Values of every `option = value` line, in file order.
    ///
    /// Commented-out entries are ignored. A missing file yields an empty list.
    pub fn list_entries(&self, option: ConfigOption) -> Result<Vec<String>> {
        let document = self.load()?;
        Ok(document
            .entries()
            .filter(|entry| entry.key == option.as_str())
            .filter_map(|entry| entry.value.clone())
            .collect())
    }

    /// Keys of every entry that is not a reserved option, deduplicated.
    ///
    /// These are the installed-package markers.
    pub fn list_bare_keys(&self) -> Result<BTreeSet<String>> {
        let document = self.load()?;
        Ok(document
            .entries()
            .filter(|entry| entry.reserved_option().is_none())
            .map(|entry| entry.key.clone())
            .collect())
    }
}
