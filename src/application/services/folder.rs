//! Folder hierarchy service
//!
//! Owns an in-memory folder collection and exposes the query and move operations.

use itertools::Itertools;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{self, Folder, OrgId, PathMatch};

/// Service over an externally supplied, ordered folder collection.
///
/// The backing collection is never modified; `move_folder` returns the
/// rewritten collection and leaves it to the caller to adopt it.
#[derive(Debug, Clone)]
pub struct FolderService {
    folders: Vec<Folder>,
    matcher: PathMatch,
}

impl FolderService {
    /// Create a service without checking the collection.
    ///
    /// Names are resolved first-match, so duplicates are tolerated.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self {
            folders,
            matcher: PathMatch::default(),
        }
    }

    /// Create a service after validating paths and per-org name uniqueness.
    pub fn strict(folders: Vec<Folder>) -> ApplicationResult<Self> {
        domain::validate_folders(&folders)?;
        Ok(Self::new(folders))
    }

    pub fn with_path_match(mut self, matcher: PathMatch) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn path_match(&self) -> PathMatch {
        self.matcher
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// The full collection, unfiltered.
    pub fn list_all_folders(&self) -> Vec<Folder> {
        self.folders.clone()
    }

    pub fn folders_by_org(&self, org_id: OrgId) -> Vec<Folder> {
        domain::filter_by_org(&self.folders, org_id).cloned().collect()
    }

    /// First folder named `name`.
    pub fn find(&self, name: &str) -> Option<&Folder> {
        domain::find_by_name(&self.folders, name)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn descendants_of(&self, org_id: OrgId, name: &str) -> ApplicationResult<Vec<Folder>> {
        let result = domain::list_descendants(&self.folders, org_id, name, self.matcher)?;
        Ok(result)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn move_folder(&self, src: &str, dst: &str) -> ApplicationResult<Vec<Folder>> {
        let result = domain::move_subtree(&self.folders, src, dst, self.matcher)?;
        debug!("move_folder: {} folders in result", result.len());
        Ok(result)
    }

    pub fn validate(&self) -> ApplicationResult<()> {
        domain::validate_folders(&self.folders)?;
        Ok(())
    }

    /// Display trees for one org, or for all orgs when `org_id` is `None`.
    pub fn forest(&self, org_id: Option<OrgId>) -> Vec<(OrgId, Tree<String>)> {
        match org_id {
            Some(org) => domain::build_forest(&self.folders_by_org(org)),
            None => domain::build_forest(&self.folders),
        }
    }

    /// Distinct org ids in order of first appearance.
    pub fn orgs(&self) -> Vec<OrgId> {
        self.folders.iter().map(|f| f.org_id).unique().collect()
    }
}
