//! Sharding logic for the filesystem blob store
//!
//! Objects are placed in subdirectories keyed by the first 2 characters of
//! their id to avoid filesystem performance issues with too many files in a
//! single directory.

use std::path::{Path, PathBuf};

/// Compute the shard path for a given blobstore id
///
/// For id "ab12cd...", returns "<root>/ab/ab12cd....blob"
pub fn shard_path(root: &Path, blobstore_id: &str) -> PathBuf {
    let shard = &blobstore_id[..2.min(blobstore_id.len())];

    root.join(shard).join(format!("{}.blob", blobstore_id))
}
