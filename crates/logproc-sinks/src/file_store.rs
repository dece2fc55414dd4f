//! Filesystem-backed object store.
//!
//! Objects land at `<root>/<bucket>/<key>`; `/` in a key becomes a directory
//! separator. Writing an existing key replaces the file.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SinkError};
use crate::traits::ObjectStore;

/// Object store rooted at a local directory.
#[derive(Debug, Clone)]
pub struct FileObjectStore {
    root: PathBuf,
}

impl FileObjectStore {
    /// Creates a store rooted at `root`, creating the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be created.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path an object would be written to.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::InvalidKey`] if the bucket or key is empty,
    /// absolute, or escapes the root.
    pub fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf> {
        validate_segment(bucket)?;
        validate_segment(key)?;
        Ok(self.root.join(bucket).join(key))
    }

    /// Reads an object back.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the file cannot be read.
    pub fn read(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.object_path(bucket, key)?)?)
    }
}

fn validate_segment(value: &str) -> Result<()> {
    let invalid = |reason| SinkError::InvalidKey {
        key: value.to_string(),
        reason,
    };

    if value.is_empty() {
        return Err(invalid("empty"));
    }
    if value.starts_with('/') {
        return Err(invalid("absolute path"));
    }
    for component in Path::new(value).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Err(invalid("parent directory component")),
            Component::RootDir | Component::Prefix(_) => return Err(invalid("absolute path")),
        }
    }
    Ok(())
}

impl ObjectStore for FileObjectStore {
    fn put(&self, bucket: &str, key: &str, body: &[u8], content_type: &str) -> Result<()> {
        let path = self.object_path(bucket, key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, body)?;

        debug!(
            bucket = %bucket,
            key = %key,
            bytes = body.len(),
            content_type = %content_type,
            path = %path.display(),
            "stored object"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use test_case::test_case;

    fn store() -> (TempDir, FileObjectStore) {
        let dir = TempDir::new().unwrap();
        let store = FileObjectStore::new(dir.path().join("objects")).unwrap();
        (dir, store)
    }

    #[test]
    fn new_creates_root() {
        let (_dir, store) = store();
        assert!(store.root().is_dir());
    }

    #[test]
    fn put_creates_nested_directories() {
        let (_dir, store) = store();
        store
            .put("logs", "processed/2024/05/06/stream.json", b"{}", "application/json")
            .unwrap();

        let path = store.root().join("logs/processed/2024/05/06/stream.json");
        assert!(path.is_file());
        assert_eq!(store.read("logs", "processed/2024/05/06/stream.json").unwrap(), b"{}");
    }

    #[test]
    fn put_overwrites_existing_object() {
        let (_dir, store) = store();
        store.put("b", "k.json", b"1", "application/json").unwrap();
        store.put("b", "k.json", b"2", "application/json").unwrap();

        assert_eq!(store.read("b", "k.json").unwrap(), b"2");
    }

    #[test_case("b", "" ; "empty key")]
    #[test_case("", "k" ; "empty bucket")]
    #[test_case("b", "/etc/passwd" ; "absolute key")]
    #[test_case("b", "a/../../escape" ; "parent dir in key")]
    #[test_case("..", "k" ; "parent dir bucket")]
    fn rejects_unsafe_paths(bucket: &str, key: &str) {
        let (_dir, store) = store();
        let err = store.put(bucket, key, b"", "text/plain").unwrap_err();
        assert!(matches!(err, SinkError::InvalidKey { .. }));
    }

    #[test]
    fn stream_names_with_slashes_nest() {
        let (_dir, store) = store();
        let path = store.object_path("b", "processed/2024/01/01/2024/01/01/[$LATEST]abc.json").unwrap();
        assert!(path.ends_with("2024/01/01/[$LATEST]abc.json"));
    }
}
