//! Read-only lookups over a flat folder collection.

use crate::domain::{Folder, OrgId};

/// Index of the first folder named `name` (exact, case-sensitive).
pub fn position_by_name(folders: &[Folder], name: &str) -> Option<usize> {
    folders.iter().position(|f| f.name == name)
}

/// First folder named `name` in collection order.
///
/// Names are not unique, so this is a first-match policy, not an identity lookup.
pub fn find_by_name<'a>(folders: &'a [Folder], name: &str) -> Option<&'a Folder> {
    position_by_name(folders, name).map(|idx| &folders[idx])
}

/// Folders belonging to `org_id`, in collection order.
pub fn filter_by_org(folders: &[Folder], org_id: OrgId) -> impl Iterator<Item = &Folder> {
    folders.iter().filter(move |f| f.org_id == org_id)
}
