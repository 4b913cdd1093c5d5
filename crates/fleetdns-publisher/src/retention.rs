//! Retention enforcement.
//!
//! Keeps exactly one publication active: the ledger row with the greatest
//! id. Everything else is demoted to `archived_blobs` and removed from the
//! active table in a single transaction, so concurrent broadcasts never see
//! a half-retired state. Archived artifacts stay in the blob store; physical
//! deletion is an external process.

use fleetdns_core::Result;
use fleetdns_store::blobs::{retire_superseded_blobs, RetireOutcome};
use rusqlite::Connection;

/// Demote every superseded publication.
///
/// The active row is selected by id, not by `version` — an export's version
/// can regress when raw rows are deleted between exports, so insertion order
/// is the only ordering key.
///
/// No-op (not an error) when the ledger holds 0 or 1 rows; idempotent when
/// called repeatedly with no intervening publish.
///
/// # Errors
///
/// Storage failures propagate unchanged; the transaction rolls back and the
/// ledger is untouched.
pub fn enforce_retention(conn: &mut Connection) -> Result<RetireOutcome> {
    let outcome = retire_superseded_blobs(conn)?;

    if outcome.archived == 0 {
        tracing::debug!(active_id = ?outcome.active_id, "No superseded publications to retire");
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdns_store::blobs::{insert_blob_row, list_archived_rows, list_blob_rows};

    fn setup() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        fleetdns_store::migrations::apply_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_empty_ledger_is_valid_state() {
        let mut conn = setup();
        let outcome = enforce_retention(&mut conn).unwrap();
        assert_eq!(outcome.archived, 0);
        assert_eq!(outcome.active_id, None);
    }

    #[test]
    fn test_superseded_rows_get_archived_with_provenance() {
        let mut conn = setup();
        insert_blob_row(&conn, "blob-old", "sha-old", 10, 111).unwrap();
        let keep = insert_blob_row(&conn, "blob-new", "sha-new", 8, 222).unwrap();

        let outcome = enforce_retention(&mut conn).unwrap();
        assert_eq!(outcome.archived, 1);
        assert_eq!(outcome.active_id, Some(keep));

        let active = list_blob_rows(&conn).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].blobstore_id, "blob-new");

        let archived = list_archived_rows(&conn).unwrap();
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].blobstore_id, "blob-old");
        assert_eq!(archived[0].sha256, "sha-old");
        assert_eq!(archived[0].created_at, 111);
    }
}
