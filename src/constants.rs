//! Constants shared across the repoman codebase.
//!
//! File names, markers and default locations live here so the settings
//! defaults and the tests agree on them.

/// Separator between key and value in the user config file.
pub const ENTRY_SEPARATOR: char = '=';

/// Start of a comment in the user config file and the trusted-repos list.
pub const COMMENT_MARKER: char = '#';

/// Placeholder substituted with the repository name in the unstable template.
pub const TEMPLATE_PLACEHOLDER: &str = "{name}";

/// Separator between a repository prefix and a package name.
pub const PACKAGE_PREFIX_SEPARATOR: char = ':';

/// Default stable repository identifier (an absolute path).
pub const DEFAULT_STABLE_REPO: &str = "/opt/repoman/stable";

/// Default template for user-scoped unstable repositories.
pub const DEFAULT_UNSTABLE_TEMPLATE: &str = "/home/{name}/repoman";

/// Default location of the trusted-repos list.
pub const DEFAULT_TRUSTED_REPOS_FILE: &str = "/opt/repoman/trusted-repos";

/// Default name of the per-repository index file.
pub const DEFAULT_INDEX_FILE: &str = ".repoman-index";

/// Default package marker file (the package's environment-setup script).
pub const DEFAULT_MARKER_FILE: &str = "env.sh";

/// Default package readme file.
pub const DEFAULT_README_FILE: &str = "README";

/// Directory under the home directory holding the user config and settings.
pub const USER_DIR: &str = ".repoman";

/// Name of the user config file inside [`USER_DIR`].
pub const USER_CONFIG_FILE: &str = "config";

/// Name of the settings file inside [`USER_DIR`].
pub const SETTINGS_FILE: &str = "settings.toml";

/// Environment variable overriding the user config file path.
pub const CONFIG_ENV_VAR: &str = "REPOMAN_CONFIG";

/// Environment variable overriding the settings file path.
pub const SETTINGS_ENV_VAR: &str = "REPOMAN_SETTINGS";

/// Environment variable disabling progress spinners.
pub const NO_PROGRESS_ENV_VAR: &str = "REPOMAN_NO_PROGRESS";
