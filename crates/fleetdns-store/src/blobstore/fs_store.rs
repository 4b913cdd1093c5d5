//! Filesystem-backed blob store
//!
//! Stores each artifact under an opaque UUIDv4 id with atomic temp→rename
//! writes. Artifacts are immutable: an id is never reused and an object is
//! never rewritten.

use crate::blobstore::atomic::atomic_write;
use crate::blobstore::sharding::shard_path;
use crate::blobstore::Blobstore;
use crate::errors::{blob_missing, io_error, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Filesystem blob store rooted at a directory
pub struct FsBlobstore {
    root: PathBuf,
}

impl FsBlobstore {
    /// Create a new blob store at the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Blobstore for FsBlobstore {
    /// Write an artifact and return its freshly minted opaque id
    fn create(&self, content: &[u8]) -> Result<String> {
        let blobstore_id = Uuid::new_v4().to_string();
        let target_path = shard_path(&self.root, &blobstore_id);

        atomic_write(&target_path, content)?;

        tracing::debug!(
            blobstore_id = %blobstore_id,
            size_bytes = content.len(),
            "Stored artifact"
        );

        Ok(blobstore_id)
    }

    /// Read an artifact by id
    fn fetch(&self, blobstore_id: &str) -> Result<Vec<u8>> {
        let path = shard_path(&self.root, blobstore_id);
        if !path.exists() {
            return Err(blob_missing(blobstore_id));
        }

        fs::read(&path).map_err(|e| io_error("read_blob", e))
    }
}
