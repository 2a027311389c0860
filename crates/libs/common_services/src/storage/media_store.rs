use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::warn;

/// Route prefix under which the media bucket is served.
pub const MEDIA_URL_PREFIX: &str = "/media";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid object path: {0}")]
    InvalidPath(String),

    #[error("object not found: {0}")]
    NotFound(String),

    #[error("storage I/O error")]
    Io(#[from] std::io::Error),
}

/// Disk-backed object storage for photo binaries.
///
/// Object paths are bucket-relative POSIX-style strings; paths that escape
/// the bucket root are rejected before any filesystem access.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Stores `bytes` under `object_path` and returns the public URL it
    /// will be served from.
    pub async fn put(&self, object_path: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let full = self.resolve(object_path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&full, bytes).await?;
        Ok(Self::public_url(object_path))
    }

    pub async fn read(&self, object_path: &str) -> Result<Vec<u8>, StorageError> {
        let full = self.resolve(object_path)?;
        match fs::read(&full).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(object_path.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the stored object. Deleting an already-missing object is not
    /// an error; the row referencing it is gone either way.
    pub async fn delete(&self, object_path: &str) -> Result<(), StorageError> {
        let full = self.resolve(object_path)?;
        match fs::remove_file(&full).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(object_path, "storage object already gone");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// The URL an object is served from by the static media route.
    #[must_use]
    pub fn public_url(object_path: &str) -> String {
        format!("{MEDIA_URL_PREFIX}/{object_path}")
    }

    /// Maps a bucket-relative path onto the bucket root, rejecting absolute
    /// paths and any traversal outside the root.
    fn resolve(&self, object_path: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(object_path);
        let valid = !object_path.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !valid {
            warn!(object_path, "rejecting object path escaping the bucket");
            return Err(StorageError::InvalidPath(object_path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, MediaStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[tokio::test]
    async fn put_read_delete_round_trip() {
        let (_dir, store) = store();
        let url = store.put("admin-uploads/a.jpg", b"bytes").await.unwrap();
        assert_eq!(url, "/media/admin-uploads/a.jpg");
        assert_eq!(store.read("admin-uploads/a.jpg").await.unwrap(), b"bytes");

        store.delete("admin-uploads/a.jpg").await.unwrap();
        assert!(matches!(
            store.read("admin-uploads/a.jpg").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn deleting_missing_object_is_not_an_error() {
        let (_dir, store) = store();
        store.delete("admin-uploads/never-existed.jpg").await.unwrap();
    }

    #[tokio::test]
    async fn traversal_and_absolute_paths_are_rejected() {
        let (_dir, store) = store();
        for path in ["../escape.jpg", "a/../../b.jpg", "/etc/passwd", ""] {
            assert!(
                matches!(store.put(path, b"x").await, Err(StorageError::InvalidPath(_))),
                "{path} should be rejected"
            );
        }
    }
}
