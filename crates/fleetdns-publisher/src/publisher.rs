//! Snapshot publication.
//!
//! Turns a record set into an immutable blob-store artifact plus one ledger
//! row. The blob create and the ledger insert span two failure domains, so
//! no cross-system transaction is attempted; the ordering guarantee is
//! "blob succeeded ⇒ metadata recorded", never the reverse.

use fleetdns_core::digest::digest_bytes;
use fleetdns_core::{DnsRecordSet, Result};
use fleetdns_store::blobs::insert_blob_row;
use fleetdns_store::Blobstore;
use rusqlite::Connection;

/// Publish a record set, returning the new artifact's blobstore id.
///
/// Steps:
///
/// 1. Serialize to canonical bytes.
/// 2. Create the blob-store artifact (the only externally fallible step; on
///    failure nothing has been recorded).
/// 3. Compute the SHA-256 of the same canonical bytes.
/// 4. Insert the ledger row as a single atomic write.
///
/// If the ledger insert fails after a successful create, the orphaned
/// artifact is tolerated collateral: the id is logged at warn level and the
/// insert error propagates. Retention never touches it because it is not in
/// the ledger.
///
/// # Errors
///
/// - `FdErrorKind::Serialization` — canonical encoding failed
/// - `FdErrorKind::ExternalService` / `FdErrorKind::Io` — blob store create failed
/// - `FdErrorKind::Persistence` — ledger insert failed (artifact orphaned)
pub fn publish_record_set(
    conn: &Connection,
    blobstore: &dyn Blobstore,
    set: &DnsRecordSet,
) -> Result<String> {
    let canonical = set.to_canonical_bytes()?;

    let blobstore_id = blobstore.create(&canonical)?;
    let sha256 = digest_bytes(&canonical);
    let created_at = chrono::Utc::now().timestamp_millis();

    if let Err(err) = insert_blob_row(conn, &blobstore_id, &sha256, set.version, created_at) {
        tracing::warn!(
            blobstore_id = %blobstore_id,
            "Ledger insert failed after blob create; artifact is orphaned"
        );
        return Err(err);
    }

    tracing::info!(
        blobstore_id = %blobstore_id,
        sha256 = %sha256,
        version = set.version,
        records = set.len(),
        "Published record set"
    );

    Ok(blobstore_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdns_core::errors::{FdError, FdErrorKind};
    use fleetdns_store::blobs::{fetch_current_blob, list_blob_rows};
    use fleetdns_store::FsBlobstore;
    use tempfile::TempDir;

    fn setup() -> (Connection, FsBlobstore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mut conn = Connection::open_in_memory().unwrap();
        fleetdns_store::migrations::apply_migrations(&mut conn).unwrap();
        let blobstore = FsBlobstore::new(temp_dir.path().join("blobs"));
        (conn, blobstore, temp_dir)
    }

    fn sample() -> DnsRecordSet {
        DnsRecordSet::new(vec![("10.0.0.1".into(), "a.fleet".into())], 4)
    }

    /// Blob store that refuses every create
    struct UnavailableBlobstore;

    impl Blobstore for UnavailableBlobstore {
        fn create(&self, _content: &[u8]) -> fleetdns_store::Result<String> {
            Err(FdError::new(FdErrorKind::ExternalService)
                .with_op("blobstore_create")
                .with_message("store unavailable"))
        }

        fn fetch(&self, _blobstore_id: &str) -> fleetdns_store::Result<Vec<u8>> {
            Err(FdError::new(FdErrorKind::ExternalService)
                .with_op("blobstore_fetch")
                .with_message("store unavailable"))
        }
    }

    #[test]
    fn test_publish_records_ledger_row() {
        let (conn, blobstore, _dir) = setup();
        let set = sample();

        let blobstore_id = publish_record_set(&conn, &blobstore, &set).unwrap();

        let row = fetch_current_blob(&conn).unwrap().unwrap();
        assert_eq!(row.blobstore_id, blobstore_id);
        assert_eq!(row.version, 4);
        assert_eq!(
            row.sha256,
            digest_bytes(&set.to_canonical_bytes().unwrap())
        );
    }

    #[test]
    fn test_blob_failure_writes_no_metadata() {
        let (conn, _blobstore, _dir) = setup();

        let err = publish_record_set(&conn, &UnavailableBlobstore, &sample()).unwrap_err();
        assert_eq!(err.kind(), FdErrorKind::ExternalService);
        assert!(list_blob_rows(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_ledger_failure_surfaces_and_orphans_blob() {
        let (conn, blobstore, dir) = setup();

        // Simulate a metadata-store outage after the blob create succeeds
        conn.execute("DROP TABLE dns_blobs", []).unwrap();

        let err = publish_record_set(&conn, &blobstore, &sample()).unwrap_err();
        assert_eq!(err.kind(), FdErrorKind::Persistence);

        // The artifact stays behind in the blob store
        let orphans = count_blob_objects(dir.path().join("blobs").as_path());
        assert_eq!(orphans, 1);
    }

    fn count_blob_objects(root: &std::path::Path) -> usize {
        let mut count = 0;
        if let Ok(shards) = std::fs::read_dir(root) {
            for shard in shards.filter_map(|e| e.ok()) {
                if let Ok(objects) = std::fs::read_dir(shard.path()) {
                    count += objects.filter_map(|e| e.ok()).count();
                }
            }
        }
        count
    }
}
