//! orgtree: multi-tenant folder hierarchies encoded as dot-delimited paths
//!
//! Architecture:
//! - `domain`: folders, path predicates, lookups, subtree queries and moves
//! - `application`: services over a loaded collection
//! - `infrastructure`: filesystem boundary, sample data, DI container
//! - `cli`: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::services::FolderService;
pub use domain::{DomainError, Folder, OrgId, PathMatch};
