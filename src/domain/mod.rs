//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod forest;
pub mod hierarchy;
pub mod lookup;
pub mod path;
pub mod validate;

pub use entities::{Folder, OrgId};
pub use error::{DomainError, DomainResult};
pub use forest::build_forest;
pub use hierarchy::{list_descendants, move_subtree};
pub use lookup::{filter_by_org, find_by_name, position_by_name};
pub use path::PathMatch;
pub use validate::validate_folders;

/// Expand environment variables and `~` in a path string.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
