//! Package addressing: `[repo:]name` tokens.

use crate::constants::PACKAGE_PREFIX_SEPARATOR;
use crate::repo::RepoResolver;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A package reference parsed from a `[repo:]name` token.
///
/// An empty `repo` means the stable repository. The prefix consists of word
/// characters only (ASCII or Unicode alphanumerics and `_`); the name may be
/// anything, including `/`-separated paths.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PackageRef {
    pub repo: String,
    pub name: String,
}

impl PackageRef {
    /// Parse a package token. Never fails: without a valid prefix the whole
    /// token is the name.
    ///
    /// ```
    /// use repoman_cli::repo::PackageRef;
    ///
    /// let qualified = PackageRef::parse("acme:tools/grep");
    /// assert_eq!(qualified.repo, "acme");
    /// assert_eq!(qualified.name, "tools/grep");
    ///
    /// let bare = PackageRef::parse("/abs:odd");
    /// assert_eq!(bare.repo, "");
    /// assert_eq!(bare.name, "/abs:odd");
    /// ```
    pub fn parse(token: &str) -> Self {
        if let Some((prefix, name)) = token.split_once(PACKAGE_PREFIX_SEPARATOR)
            && Self::is_valid_prefix(prefix)
        {
            return Self {
                repo: prefix.to_string(),
                name: name.to_string(),
            };
        }

        Self {
            repo: String::new(),
            name: token.to_string(),
        }
    }

    /// Whether `repo` can be written as a token prefix: a non-empty run of
    /// word characters.
    pub fn is_valid_prefix(repo: &str) -> bool {
        !repo.is_empty() && repo.chars().all(|c| c.is_alphanumeric() || c == '_')
    }

    /// Whether the package lives in the stable repository.
    pub fn is_stable(&self) -> bool {
        self.repo.is_empty()
    }

    /// The repository directory this package belongs to.
    pub fn repo_path(&self, resolver: &RepoResolver) -> PathBuf {
        if self.repo.is_empty() {
            resolver.resolve(resolver.stable_identifier())
        } else {
            resolver.resolve(&self.repo)
        }
    }

    /// Full path of the package directory.
    pub fn to_path(&self, resolver: &RepoResolver) -> PathBuf {
        self.repo_path(resolver).join(&self.name)
    }

    /// The token form: `repo:name`, or `name` for the stable repository.
    pub fn qualified(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repo.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}{PACKAGE_PREFIX_SEPARATOR}{}", self.repo, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::RepoTemplate;

    fn resolver() -> RepoResolver {
        RepoResolver::new("/opt/stable", RepoTemplate::parse("/home/{name}/repoman").unwrap())
    }

    #[test]
    fn test_parse_prefixed() {
        let r = PackageRef::parse("acme:foo");
        assert_eq!(r.repo, "acme");
        assert_eq!(r.name, "foo");
        assert!(!r.is_stable());
    }

    #[test]
    fn test_parse_bare() {
        let r = PackageRef::parse("foo");
        assert_eq!(r.repo, "");
        assert_eq!(r.name, "foo");
        assert!(r.is_stable());
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let r = PackageRef::parse("acme:foo:bar");
        assert_eq!(r.repo, "acme");
        assert_eq!(r.name, "foo:bar");
    }

    #[test]
    fn test_parse_non_word_prefix_is_not_a_repo() {
        for token in ["a-b:foo", ":foo", "tools/x:y", "a b:c"] {
            let r = PackageRef::parse(token);
            assert_eq!(r.repo, "", "token {token}");
            assert_eq!(r.name, token);
        }
    }

    #[test]
    fn test_to_path_composes_with_resolve() {
        let resolver = resolver();
        let r = PackageRef::parse("alice:net/curl");
        assert_eq!(r.to_path(&resolver), resolver.resolve("alice").join("net/curl"));
        assert_eq!(r.to_path(&resolver), PathBuf::from("/home/alice/repoman/net/curl"));

        let stable = PackageRef::parse("vim");
        assert_eq!(stable.to_path(&resolver), PathBuf::from("/opt/stable/vim"));
    }

    #[test]
    fn test_qualified_round_trips_token() {
        for token in ["acme:foo", "foo", "x_1:a/b"] {
            assert_eq!(PackageRef::parse(token).qualified(), token);
        }
    }
}
