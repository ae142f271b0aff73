//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::services::{FolderLoader, FolderService};
use crate::application::ApplicationError;
use crate::config::Settings;
use crate::domain::Folder;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::InfraResult;

/// Container holding application settings and I/O dependencies.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            settings: Arc::new(settings),
            fs,
        }
    }

    pub fn loader(&self) -> FolderLoader {
        FolderLoader::new(Arc::clone(&self.fs))
    }

    /// The data file to use: explicit argument first, then `data_file` from settings.
    pub fn data_file(&self, explicit: Option<&Path>) -> InfraResult<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.settings.data_file.clone())
            .ok_or_else(|| ApplicationError::NoDataSource.into())
    }

    /// Build a folder service from the resolved data file.
    pub fn folder_service(&self, explicit: Option<&Path>) -> InfraResult<FolderService> {
        let path = self.data_file(explicit)?;
        let folders = self.loader().load(&path)?;
        self.folder_service_from(folders)
    }

    /// Build a folder service over an already loaded collection, honoring `strict`
    /// and `path_match` from settings.
    pub fn folder_service_from(&self, folders: Vec<Folder>) -> InfraResult<FolderService> {
        debug!(
            "folder_service: {} folders, strict={}, path_match={:?}",
            folders.len(),
            self.settings.strict,
            self.settings.path_match
        );
        let service = if self.settings.strict {
            FolderService::strict(folders)?
        } else {
            FolderService::new(folders)
        };
        Ok(service.with_path_match(self.settings.path_match))
    }
}
