use crate::core::Storage;
use crate::utils::error::{ProjectorError, Result};
use std::path::PathBuf;

/// Filesystem storage rooted at `base_path`. Absolute paths are used as-is.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tokio::fs::read(&full_path)
            .await
            .map_err(|e| ProjectorError::io(full_path.display().to_string(), e))
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ProjectorError::io(parent.display().to_string(), e))?;
        }

        tokio::fs::write(&full_path, data)
            .await
            .map_err(|e| ProjectorError::io(full_path.display().to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_relative_and_absolute() {
        let storage = LocalStorage::new("/data");
        assert_eq!(storage.resolve("recipes.json"), PathBuf::from("/data/recipes.json"));
        assert_eq!(storage.resolve("/tmp/out.json"), PathBuf::from("/tmp/out.json"));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        tokio_test::block_on(storage.write_file("nested/dir/out.json", b"[]")).unwrap();
        let data = tokio_test::block_on(storage.read_file("nested/dir/out.json")).unwrap();

        assert_eq!(data, b"[]");
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let err = tokio_test::block_on(storage.read_file("recipes.json")).unwrap_err();

        match err {
            ProjectorError::IoError { path, source } => {
                assert!(path.ends_with("recipes.json"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
