//! Platform helpers: home directory lookup and path expansion.

use crate::core::{RepomanError, Result};
use std::path::PathBuf;

/// Returns the user's home directory.
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| RepomanError::ConfigError {
        message: "Could not determine home directory. Check that the HOME environment variable is set"
            .to_string(),
    })
}

/// Expands a leading `~/` and `$VAR` / `${VAR}` references in a path.
///
/// Only `~/` (the current user's home) is supported; `~user` forms are
/// rejected.
pub fn resolve_path(path: &str) -> Result<String> {
    let expanded = if let Some(stripped) = path.strip_prefix("~/") {
        get_home_dir()?.join(stripped).to_string_lossy().into_owned()
    } else if path == "~" {
        get_home_dir()?.to_string_lossy().into_owned()
    } else if path.starts_with('~') {
        return Err(RepomanError::ConfigError {
            message: format!(
                "Invalid path: {path}. Tilde expansion only supports '~/' for the home directory"
            ),
        });
    } else {
        path.to_string()
    };

    shellexpand::env(&expanded).map(|s| s.into_owned()).map_err(|e| RepomanError::ConfigError {
        message: format!("Failed to expand environment variables in path '{path}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_plain() {
        assert_eq!(resolve_path("/opt/repoman/stable").unwrap(), "/opt/repoman/stable");
    }

    #[test]
    fn test_resolve_path_home() {
        let home = get_home_dir().unwrap();
        let expected = home.join(".repoman/config");
        assert_eq!(resolve_path("~/.repoman/config").unwrap(), expected.to_string_lossy());
    }

    #[test]
    fn test_resolve_path_rejects_other_user() {
        assert!(resolve_path("~bob/config").is_err());
    }

    #[test]
    fn test_resolve_path_undefined_var() {
        assert!(resolve_path("/x/$REPOMAN_SURELY_UNDEFINED_VARIABLE/y").is_err());
    }
}
