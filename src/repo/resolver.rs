//! Repository identifier resolution.
//!
//! A repository is named either by an absolute path or by a short symbolic
//! name. Absolute paths resolve to themselves; names are substituted into the
//! unstable-repository [`RepoTemplate`]. Resolution is a pure string
//! transform and never touches the filesystem.

use crate::constants::TEMPLATE_PLACEHOLDER;
use crate::core::{RepomanError, Result};
use std::path::PathBuf;

/// Path pattern for user-scoped unstable repositories.
///
/// Holds the text before and after the single `{name}` placeholder. A
/// trailing `/` is dropped on parse so substituted paths never end in one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTemplate {
    prefix: String,
    suffix: String,
}

impl RepoTemplate {
    /// Parse a template such as `/home/{name}/repoman`.
    ///
    /// # Errors
    ///
    /// [`RepomanError::InvalidTemplate`] unless the pattern contains exactly
    /// one `{name}` placeholder.
    pub fn parse(template: &str) -> Result<Self> {
        let trimmed = match template.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => template,
        };

        let Some((prefix, suffix)) = trimmed.split_once(TEMPLATE_PLACEHOLDER) else {
            return Err(RepomanError::InvalidTemplate {
                template: template.to_string(),
                reason: format!("missing the {TEMPLATE_PLACEHOLDER} placeholder"),
            });
        };

        if suffix.contains(TEMPLATE_PLACEHOLDER) {
            return Err(RepomanError::InvalidTemplate {
                template: template.to_string(),
                reason: format!("{TEMPLATE_PLACEHOLDER} may appear only once"),
            });
        }

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// Substitute `name` into the template.
    pub fn substitute(&self, name: &str) -> String {
        format!("{}{name}{}", self.prefix, self.suffix)
    }
}

impl std::fmt::Display for RepoTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{TEMPLATE_PLACEHOLDER}{}", self.prefix, self.suffix)
    }
}

/// Maps repository identifiers to filesystem paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoResolver {
    stable: String,
    template: RepoTemplate,
}

impl RepoResolver {
    /// Create a resolver for the given stable repository and template.
    pub fn new(stable: impl Into<String>, template: RepoTemplate) -> Self {
        Self {
            stable: stable.into(),
            template,
        }
    }

    /// Identifier of the always-subscribed stable repository.
    pub fn stable_identifier(&self) -> &str {
        &self.stable
    }

    /// Whether `identifier` names the stable repository.
    pub fn is_stable(&self, identifier: &str) -> bool {
        identifier == self.stable
    }

    /// Resolve a repository identifier to a path.
    ///
    /// - `/abs/path/` resolves to `/abs/path`; exactly one trailing `/` is
    ///   removed and a bare `/` stays `/`.
    /// - The empty identifier resolves to the stable repository path.
    /// - Anything else is substituted into the template.
    pub fn resolve(&self, identifier: &str) -> PathBuf {
        if identifier.is_empty() {
            return self.resolve(&self.stable);
        }

        if identifier.starts_with('/') {
            let path = match identifier.strip_suffix('/') {
                Some(stripped) if !stripped.is_empty() => stripped,
                _ => identifier,
            };
            return PathBuf::from(path);
        }

        PathBuf::from(self.template.substitute(identifier))
    }
}
