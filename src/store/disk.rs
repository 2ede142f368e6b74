use super::SnapshotStore;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Cache file on disk holding the last response body as-is.
pub struct DiskStore {
    path: PathBuf,
}

impl DiskStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for DiskStore {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                debug!("Cache HIT at {}", self.path.display());
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Cache MISS at {}", self.path.display());
                Ok(None)
            }
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read cache file: {}", self.path.display())),
        }
    }

    fn write(&self, body: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&self.path, body)
            .with_context(|| format!("Could not write cache file: {}", self.path.display()))?;
        debug!("Cache PUT at {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_disk_store_read_write() {
        let dir = tempdir().unwrap();
        let store = DiskStore::new(dir.path().join("exchange.json"));

        // Initially, nothing is cached
        assert!(store.read().unwrap().is_none());

        store.write(b"{\"first\":1}").unwrap();
        assert_eq!(store.read().unwrap(), Some(b"{\"first\":1}".to_vec()));
    }

    #[test]
    fn test_disk_store_overwrites_previous_body() {
        let dir = tempdir().unwrap();
        let store = DiskStore::new(dir.path().join("exchange.json"));

        store.write(b"a much longer first body").unwrap();
        store.write(b"short").unwrap();

        assert_eq!(store.read().unwrap(), Some(b"short".to_vec()));
    }

    #[test]
    fn test_disk_store_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("exchange").join("exchange.json");
        let store = DiskStore::new(&path);

        store.write(b"{}").unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_disk_store_write_failure_is_an_error() {
        let dir = tempdir().unwrap();
        // A directory where the file should be cannot be written over
        let store = DiskStore::new(dir.path());

        let err = store.write(b"{}").unwrap_err();
        assert!(err.to_string().contains("Could not write cache file"));
    }
}
