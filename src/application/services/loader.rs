//! Folder data loading
//!
//! Reads and writes folder collections as JSON arrays of records.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, PathContextExt};
use crate::domain::Folder;
use crate::infrastructure::traits::FileSystem;

/// Loads folder collections from JSON files.
pub struct FolderLoader {
    fs: Arc<dyn FileSystem>,
}

impl FolderLoader {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read an ordered folder collection from `path`.
    ///
    /// Record order in the file is the collection order.
    pub fn load(&self, path: &Path) -> ApplicationResult<Vec<Folder>> {
        debug!("load: path={}", path.display());
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read folder data", path)?;
        let folders = Self::parse(&content).map_err(|e| ApplicationError::InvalidData {
            context: path.display().to_string(),
            source: e,
        })?;
        debug!("load: {} folders", folders.len());
        Ok(folders)
    }

    /// Write `folders` to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path, folders: &[Folder]) -> ApplicationResult<()> {
        let content = Self::to_json(folders).with_path_context("serialize folder data", path)?;
        self.fs
            .ensure_parent(path)
            .with_path_context("create parent directory", path)?;
        self.fs
            .write(path, &content)
            .with_path_context("write folder data", path)?;
        Ok(())
    }

    pub fn parse(content: &str) -> Result<Vec<Folder>, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn to_json(folders: &[Folder]) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(folders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use crate::domain::OrgId;

    #[derive(Default)]
    struct MemoryFileSystem {
        files: Mutex<HashMap<PathBuf, String>>,
    }

    impl FileSystem for MemoryFileSystem {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }

        fn write(&self, path: &Path, content: &str) -> io::Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }

        fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn given_saved_folders_when_loading_then_order_is_preserved() {
        let fs = Arc::new(MemoryFileSystem::default());
        let loader = FolderLoader::new(fs.clone());
        let org = OrgId::random();
        let folders = vec![
            Folder::new("golf", org, "golf"),
            Folder::new("alpha", org, "alpha"),
            Folder::new("bravo", org, "alpha.bravo"),
        ];
        let path = Path::new("/data/folders.json");

        loader.save(path, &folders).unwrap();
        assert!(fs.exists(path));

        let loaded = loader.load(path).unwrap();
        assert_eq!(loaded, folders);
    }

    #[test]
    fn given_missing_file_when_loading_then_operation_failed_with_path() {
        let loader = FolderLoader::new(Arc::new(MemoryFileSystem::default()));
        let err = loader.load(Path::new("/nope.json")).unwrap_err();
        match err {
            ApplicationError::OperationFailed { context, .. } => {
                assert!(context.contains("/nope.json"), "context: {context}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn given_malformed_json_when_loading_then_invalid_data_with_path() {
        let fs = Arc::new(MemoryFileSystem::default());
        let path = Path::new("/data/bad.json");
        fs.write(path, "[{\"name\": 1}]").unwrap();
        let loader = FolderLoader::new(fs);

        match loader.load(path).unwrap_err() {
            ApplicationError::InvalidData { context, .. } => {
                assert_eq!(context, "/data/bad.json");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn given_malformed_json_when_parsing_then_error() {
        assert!(FolderLoader::parse("[{\"name\": 1}]").is_err());
        assert!(FolderLoader::parse("[]").unwrap().is_empty());
    }
}
