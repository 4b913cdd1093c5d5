//! Publication ledger operations.
//!
//! The `dns_blobs` table is the single point of coordination between the
//! publisher, retention, and the broadcaster: the row with the greatest id is
//! the active publication. `version` is carried as payload only — it can
//! regress when raw rows are deleted between exports, so it is never used as
//! an ordering key.

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Transaction};

/// A row from the `dns_blobs` publication ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsBlobRow {
    /// Monotonically assigned ledger id (the canonical ordering key)
    pub id: i64,
    /// Opaque blob store handle
    pub blobstore_id: String,
    /// Hex SHA-256 of the canonical artifact bytes
    pub sha256: String,
    /// Record-set version carried by the artifact
    pub version: i64,
    /// Publication timestamp, milliseconds since epoch
    pub created_at: i64,
}

/// A row from the `archived_blobs` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedBlobRow {
    /// Opaque blob store handle of the demoted artifact
    pub blobstore_id: String,
    /// Hex SHA-256 of the demoted artifact bytes
    pub sha256: String,
    /// Original publication timestamp (not the demotion time)
    pub created_at: i64,
}

/// Outcome of a retention pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetireOutcome {
    /// Number of superseded rows demoted to `archived_blobs`
    pub archived: usize,
    /// Ledger id of the surviving active row, if any rows exist
    pub active_id: Option<i64>,
}

/// Insert a new publication row, returning its assigned ledger id.
///
/// Single atomic INSERT: a partially populated row is never observable.
pub fn insert_blob_row(
    conn: &Connection,
    blobstore_id: &str,
    sha256: &str,
    version: i64,
    created_at: i64,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO dns_blobs (blobstore_id, sha256, version, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![blobstore_id, sha256, version, created_at],
    )
    .map_err(from_rusqlite)?;

    let id = conn.last_insert_rowid();

    tracing::debug!(
        ledger_id = id,
        blobstore_id = %blobstore_id,
        version = version,
        "Recorded publication"
    );

    Ok(id)
}

/// List all publication rows ordered by id ascending
pub fn list_blob_rows(conn: &Connection) -> Result<Vec<DnsBlobRow>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, blobstore_id, sha256, version, created_at
             FROM dns_blobs
             ORDER BY id",
        )
        .map_err(from_rusqlite)?;
    let result: std::result::Result<Vec<_>, _> = stmt
        .query_map([], row_to_blob_row)
        .map_err(from_rusqlite)?
        .collect();
    result.map_err(from_rusqlite)
}

/// Fetch the active publication: the row with the greatest id.
///
/// Returns `None` when nothing has been published yet. Computed at read time
/// on every call — "which row is active" is never cached.
pub fn fetch_current_blob(conn: &Connection) -> Result<Option<DnsBlobRow>> {
    conn.query_row(
        "SELECT id, blobstore_id, sha256, version, created_at
         FROM dns_blobs
         ORDER BY id DESC
         LIMIT 1",
        [],
        row_to_blob_row,
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Demote every superseded publication in one transaction.
///
/// Archives all rows except the one with the greatest id (copying each row's
/// original `created_at`), then deletes them from `dns_blobs`. Archive and
/// delete commit together: a concurrent reader never observes a row that is
/// archived but still active, or removed but not archived.
///
/// With 0 or 1 ledger rows this is a no-op, not an error.
pub fn retire_superseded_blobs(conn: &mut Connection) -> Result<RetireOutcome> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    let rows = {
        let mut stmt = tx
            .prepare(
                "SELECT id, blobstore_id, sha256, version, created_at
                 FROM dns_blobs
                 ORDER BY id",
            )
            .map_err(from_rusqlite)?;
        let result: std::result::Result<Vec<_>, _> = stmt
            .query_map([], row_to_blob_row)
            .map_err(from_rusqlite)?
            .collect();
        result.map_err(from_rusqlite)?
    };

    let Some(active) = rows.last().cloned() else {
        return Ok(RetireOutcome {
            archived: 0,
            active_id: None,
        });
    };

    let retiring = &rows[..rows.len() - 1];
    if retiring.is_empty() {
        return Ok(RetireOutcome {
            archived: 0,
            active_id: Some(active.id),
        });
    }

    for row in retiring {
        archive_blob_row(&tx, row)?;
    }

    tx.execute("DELETE FROM dns_blobs WHERE id != ?1", [active.id])
        .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(
        archived = retiring.len(),
        active_id = active.id,
        "Retired superseded publications"
    );

    Ok(RetireOutcome {
        archived: retiring.len(),
        active_id: Some(active.id),
    })
}

/// Copy a superseded row into `archived_blobs`, preserving its creation time
fn archive_blob_row(tx: &Transaction, row: &DnsBlobRow) -> Result<()> {
    tx.execute(
        "INSERT INTO archived_blobs (blobstore_id, sha256, created_at)
         VALUES (?1, ?2, ?3)",
        rusqlite::params![row.blobstore_id, row.sha256, row.created_at],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// List all archived rows ordered by archive insertion
pub fn list_archived_rows(conn: &Connection) -> Result<Vec<ArchivedBlobRow>> {
    let mut stmt = conn
        .prepare(
            "SELECT blobstore_id, sha256, created_at
             FROM archived_blobs
             ORDER BY id",
        )
        .map_err(from_rusqlite)?;
    let result: std::result::Result<Vec<_>, _> = stmt
        .query_map([], |row| {
            Ok(ArchivedBlobRow {
                blobstore_id: row.get(0)?,
                sha256: row.get(1)?,
                created_at: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect();
    result.map_err(from_rusqlite)
}

fn row_to_blob_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<DnsBlobRow> {
    Ok(DnsBlobRow {
        id: row.get(0)?,
        blobstore_id: row.get(1)?,
        sha256: row.get(2)?,
        version: row.get(3)?,
        created_at: row.get(4)?,
    })
}
