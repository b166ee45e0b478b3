//! Repositories and package addressing.
//!
//! - [`resolver`] - [`RepoTemplate`] and [`RepoResolver`], identifier to path
//! - [`package`] - [`PackageRef`], `[repo:]name` tokens to package paths

pub mod package;
pub mod resolver;

pub use package::PackageRef;
pub use resolver::{RepoResolver, RepoTemplate};
