//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::OrgId;

/// Domain errors represent rejected queries, rejected moves, and
/// collections that break the path invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("OrgId does not exist or is invalid")]
    InvalidOrg,

    #[error("Folder does not exist")]
    InvalidFolder,

    #[error("Folder does not exist in the given org")]
    FolderInvalidOrg,

    #[error("Source folder does not exist")]
    InvalidSrcFolder,

    #[error("Destination folder does not exist")]
    InvalidDstFolder,

    #[error("Cannot move a folder to itself")]
    MoveToSame,

    #[error("Cannot move a folder to a child of itself")]
    MoveToChildOf,

    #[error("Cannot move a folder to a different organization")]
    MoveToDiffOrg,

    #[error("folder with empty name or path segment: {path:?}")]
    EmptyName { path: String },

    #[error("path {path} does not end with folder name {name}")]
    PathNameMismatch { name: String, path: String },

    #[error("parent {parent} of {path} not found in org {org_id}")]
    MissingParent {
        path: String,
        parent: String,
        org_id: OrgId,
    },

    #[error("duplicate folder name {name} in org {org_id}")]
    DuplicateName { name: String, org_id: OrgId },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
