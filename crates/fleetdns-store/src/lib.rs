//! FleetDNS Store - Persistence layer with SQLite and the blob store
//!
//! Provides:
//! - SQLite schema with migrations framework
//! - Blob store boundary (`Blobstore` trait) with a filesystem implementation
//! - Raw DNS record table access and YAML seed import
//! - Publication ledger (`dns_blobs`) and archive (`archived_blobs`) operations

pub mod blobs;
pub mod blobstore;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod records;

// Re-export key types
pub use blobstore::{Blobstore, FsBlobstore};
pub use errors::Result;
