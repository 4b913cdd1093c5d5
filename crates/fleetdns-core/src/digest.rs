//! Digest computation for published artifacts.
//!
//! Provides deterministic SHA-256 digests over canonical record-set bytes.
//! The digest recorded alongside a publication is always computed over the
//! exact bytes handed to the blob store, so ledger rows and artifacts can be
//! cross-checked byte-for-byte.

use crate::errors::Result;
use crate::model::record_set::DnsRecordSet;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of raw bytes, hex-encoded (64 characters).
pub fn digest_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Compute the digest of a record set's canonical serialization.
///
/// Equal record sets always produce equal digests; any change to a pair,
/// the pair order, or the version changes the digest.
///
/// # Errors
///
/// Returns `FdErrorKind::Serialization` if canonical encoding fails.
pub fn digest_record_set(set: &DnsRecordSet) -> Result<String> {
    let canonical = set.to_canonical_bytes()?;
    Ok(digest_bytes(&canonical))
}
