//! Snapshot export.
//!
//! Reads the raw `dns_records` rows and produces an ordered, versioned
//! [`DnsRecordSet`]. Read-only: the exporter never writes.

use fleetdns_core::{DnsRecordSet, Result};
use fleetdns_store::records::list_dns_records;
use rusqlite::Connection;

/// Export the current name-resolution state as a record set.
///
/// Rows are read in id order, so a single export call is deterministic and
/// the resulting artifact hashes reproducibly. The version is the maximum
/// row id observed, or 0 when no rows exist — it is derived, never assigned,
/// and is not guaranteed monotonic across exports when rows get deleted in
/// between.
///
/// # Errors
///
/// Storage-read failures propagate unchanged (`FdErrorKind::Persistence`).
pub fn export_dns_records(conn: &Connection) -> Result<DnsRecordSet> {
    let rows = list_dns_records(conn)?;

    let version = rows.iter().map(|r| r.id).max().unwrap_or(0);
    let records = rows.into_iter().map(|r| (r.ip, r.name)).collect();

    let set = DnsRecordSet::new(records, version);

    tracing::debug!(
        records = set.len(),
        version = set.version,
        "Exported record set"
    );

    Ok(set)
}
