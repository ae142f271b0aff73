//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::path;

/// Tenant identifier. Folders of different orgs live in disjoint forests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgId(Uuid);

impl OrgId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// The nil tenant, never a valid org for queries.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Random org id, used for sample data and tests.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for OrgId {
    fn default() -> Self {
        Self::nil()
    }
}

impl From<Uuid> for OrgId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for OrgId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named folder whose position is encoded in `path`.
///
/// `path` is the dot-separated chain of ancestor names ending with `name`;
/// a root folder's path is its own name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    #[serde(alias = "orgId")]
    pub org_id: OrgId,
    #[serde(rename = "paths", alias = "path")]
    pub path: String,
}

impl Folder {
    pub fn new(name: impl Into<String>, org_id: OrgId, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            org_id,
            path: path.into(),
        }
    }

    /// Root folder: path equals name.
    pub fn root(name: impl Into<String>, org_id: OrgId) -> Self {
        let name = name.into();
        let path = name.clone();
        Self { name, org_id, path }
    }

    /// Folder placed directly below `parent`.
    pub fn child_of(parent: &Folder, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = path::join(&parent.path, &name);
        Self {
            name,
            org_id: parent.org_id,
            path,
        }
    }

    pub fn is_root(&self) -> bool {
        path::parent(&self.path).is_none()
    }

    /// Path of the parent folder, `None` for roots.
    pub fn parent_path(&self) -> Option<&str> {
        path::parent(&self.path)
    }

    /// Number of segments in the path (roots have depth 1).
    pub fn depth(&self) -> usize {
        path::segments(&self.path).count()
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path, self.org_id)
    }
}
