//! Raw DNS record table access.
//!
//! The `dns_records` table is owned by the record ingestion process; the
//! publishing subsystem reads it to build exports. Inserts exist for the seed
//! importer and test fixtures only.

use crate::errors::{from_rusqlite, seed_validation, Result};
use rusqlite::Connection;
use serde::Deserialize;

/// A raw row from the `dns_records` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecordRow {
    /// Monotonically assigned row id
    pub id: i64,
    /// Host address
    pub ip: String,
    /// Host name
    pub name: String,
}

/// One host entry in a YAML seed file
#[derive(Debug, Clone, Deserialize)]
pub struct SeedHost {
    pub ip: String,
    pub name: String,
}

/// List all raw records ordered by id ascending.
///
/// Id order makes a single export call deterministic, which is what keeps
/// the artifact digest reproducible.
pub fn list_dns_records(conn: &Connection) -> Result<Vec<DnsRecordRow>> {
    let mut stmt = conn
        .prepare("SELECT id, ip, name FROM dns_records ORDER BY id")
        .map_err(from_rusqlite)?;
    let result: std::result::Result<Vec<_>, _> = stmt
        .query_map([], |row| {
            Ok(DnsRecordRow {
                id: row.get(0)?,
                ip: row.get(1)?,
                name: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect();
    result.map_err(from_rusqlite)
}

/// Insert a single raw record, returning its assigned id
pub fn insert_dns_record(conn: &Connection, ip: &str, name: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO dns_records (ip, name) VALUES (?1, ?2)",
        rusqlite::params![ip, name],
    )
    .map_err(from_rusqlite)?;

    Ok(conn.last_insert_rowid())
}

/// Parse a YAML seed file into host entries.
///
/// Expected shape:
///
/// ```yaml
/// - ip: 10.0.0.1
///   name: host-1.fleet
/// - ip: 10.0.0.2
///   name: host-2.fleet
/// ```
///
/// # Errors
///
/// Returns `FdErrorKind::InvalidInput` for unparsable YAML or entries with an
/// empty `ip`/`name`.
pub fn parse_seed(yaml: &str) -> Result<Vec<SeedHost>> {
    let hosts: Vec<SeedHost> = serde_yaml::from_str(yaml)
        .map_err(|e| seed_validation(&format!("invalid seed file: {}", e)))?;

    for (idx, host) in hosts.iter().enumerate() {
        if host.ip.trim().is_empty() {
            return Err(seed_validation(&format!("entry {} has an empty ip", idx)));
        }
        if host.name.trim().is_empty() {
            return Err(seed_validation(&format!("entry {} has an empty name", idx)));
        }
    }

    Ok(hosts)
}

/// Import seed hosts into `dns_records` in one transaction.
///
/// Returns the number of rows inserted.
pub fn seed_records(conn: &mut Connection, hosts: &[SeedHost]) -> Result<usize> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    for host in hosts {
        tx.execute(
            "INSERT INTO dns_records (ip, name) VALUES (?1, ?2)",
            rusqlite::params![host.ip, host.name],
        )
        .map_err(from_rusqlite)?;
    }

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(count = hosts.len(), "Seeded dns_records");

    Ok(hosts.len())
}
