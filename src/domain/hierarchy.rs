//! Subtree queries and relocation over path-encoded folders.

use tracing::{debug, instrument};

use crate::domain::lookup::{filter_by_org, find_by_name, position_by_name};
use crate::domain::path::{self, PathMatch};
use crate::domain::{DomainError, DomainResult, Folder, OrgId};

/// All strict descendants of the folder called `name` within `org_id`.
///
/// The target folder is resolved with first-match semantics and must live in
/// `org_id`. Results follow collection order, not tree order.
#[instrument(level = "debug", skip(folders, matcher), fields(total = folders.len()))]
pub fn list_descendants(
    folders: &[Folder],
    org_id: OrgId,
    name: &str,
    matcher: PathMatch,
) -> DomainResult<Vec<Folder>> {
    if org_id.is_nil() {
        return Err(DomainError::InvalidOrg);
    }

    let target = find_by_name(folders, name).ok_or(DomainError::InvalidFolder)?;
    if target.org_id != org_id {
        return Err(DomainError::FolderInvalidOrg);
    }

    let descendants: Vec<Folder> = filter_by_org(folders, org_id)
        .filter(|f| matcher.has_ancestor(&f.path, name))
        .cloned()
        .collect();
    debug!("found {} descendants of {}", descendants.len(), name);

    Ok(descendants)
}

/// Re-parent the subtree rooted at `src` below `dst`.
///
/// Returns a new collection of the same length and order; only `path`
/// values inside the moved subtree differ. The input is never modified.
#[instrument(level = "debug", skip(folders, matcher), fields(total = folders.len()))]
pub fn move_subtree(
    folders: &[Folder],
    src: &str,
    dst: &str,
    matcher: PathMatch,
) -> DomainResult<Vec<Folder>> {
    let src_idx = position_by_name(folders, src).ok_or(DomainError::InvalidSrcFolder)?;
    let dst_folder = find_by_name(folders, dst).ok_or(DomainError::InvalidDstFolder)?;
    let src_folder = &folders[src_idx];

    if src == dst {
        return Err(DomainError::MoveToSame);
    }
    if src_folder.org_id != dst_folder.org_id {
        return Err(DomainError::MoveToDiffOrg);
    }
    if matcher.is_within_subtree(&dst_folder.path, src_folder) {
        return Err(DomainError::MoveToChildOf);
    }

    let old_prefix = src_folder.path.as_str();
    let new_prefix = path::join(&dst_folder.path, &src_folder.name);
    debug!("moving {} -> {}", old_prefix, new_prefix);

    let moved = folders
        .iter()
        .enumerate()
        .map(|(idx, f)| {
            let mut f = f.clone();
            if idx == src_idx {
                f.path = new_prefix.clone();
            } else if f.org_id == src_folder.org_id && path::is_strictly_below(&f.path, old_prefix) {
                f.path = f.path.replacen(old_prefix, &new_prefix, 1);
            }
            f
        })
        .collect();

    Ok(moved)
}
