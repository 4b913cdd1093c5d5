//! Blob store boundary
//!
//! Published artifacts live in an external content store reached through the
//! `Blobstore` trait. Ids are opaque: this subsystem stores and compares them
//! but never interprets them. A filesystem implementation with atomic writes
//! and sharded object directories is provided in-tree.

mod atomic;
mod fs_store;
mod sharding;

use crate::errors::Result;

pub use fs_store::FsBlobstore;

/// Immutable artifact store: create returns an opaque id, fetch resolves it.
pub trait Blobstore {
    /// Store an immutable artifact, returning its opaque id.
    ///
    /// # Errors
    ///
    /// Returns `FdErrorKind::ExternalService` or `FdErrorKind::Io` when the
    /// store cannot accept the artifact.
    fn create(&self, content: &[u8]) -> Result<String>;

    /// Retrieve an artifact by id.
    ///
    /// # Errors
    ///
    /// Returns `FdErrorKind::MissingBlob` when no artifact exists for the id.
    fn fetch(&self, blobstore_id: &str) -> Result<Vec<u8>>;
}
