//! Structural checks for a folder collection.

use std::collections::HashSet;

use tracing::instrument;

use crate::domain::path;
use crate::domain::{DomainError, DomainResult, Folder, OrgId};

/// Check the path invariants and per-org name uniqueness.
///
/// Reports the first violation in collection order.
#[instrument(level = "debug", skip_all, fields(total = folders.len()))]
pub fn validate_folders(folders: &[Folder]) -> DomainResult<()> {
    let known_paths: HashSet<(OrgId, &str)> =
        folders.iter().map(|f| (f.org_id, f.path.as_str())).collect();
    let mut seen_names: HashSet<(OrgId, &str)> = HashSet::new();

    for folder in folders {
        if folder.name.is_empty() || path::segments(&folder.path).any(str::is_empty) {
            return Err(DomainError::EmptyName {
                path: folder.path.clone(),
            });
        }
        if path::leaf(&folder.path) != folder.name {
            return Err(DomainError::PathNameMismatch {
                name: folder.name.clone(),
                path: folder.path.clone(),
            });
        }
        if let Some(parent) = folder.parent_path() {
            if !known_paths.contains(&(folder.org_id, parent)) {
                return Err(DomainError::MissingParent {
                    path: folder.path.clone(),
                    parent: parent.to_string(),
                    org_id: folder.org_id,
                });
            }
        }
        if !seen_names.insert((folder.org_id, folder.name.as_str())) {
            return Err(DomainError::DuplicateName {
                name: folder.name.clone(),
                org_id: folder.org_id,
            });
        }
    }
    Ok(())
}
