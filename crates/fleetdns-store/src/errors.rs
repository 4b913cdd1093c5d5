//! Error handling for fleetdns-store
//!
//! Wraps the fleetdns-core FdError facility with store-specific helpers

use fleetdns_core::errors::{FdError, FdErrorKind};

/// Result type alias using FdError
pub type Result<T> = std::result::Result<T, FdError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> FdError {
    FdError::new(FdErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error for an already-applied migration
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> FdError {
    FdError::new(FdErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a missing-artifact error for a blobstore id with no backing object
pub fn blob_missing(blobstore_id: &str) -> FdError {
    FdError::new(FdErrorKind::MissingBlob)
        .with_op("blobstore_fetch")
        .with_entity_id(blobstore_id)
        .with_message("blob store artifact not found")
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> FdError {
    FdError::new(FdErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> FdError {
    FdError::new(FdErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> FdError {
    FdError::new(FdErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
