//! CLI subcommands

pub mod broadcast;
pub mod cleanup;
pub mod publish;
pub mod seed;

use rusqlite::Connection;

/// Open the metadata store, creating parent directories and applying
/// migrations as needed.
pub(crate) fn open_store(db_path: &str) -> Result<Connection, Box<dyn std::error::Error>> {
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut conn = fleetdns_store::db::open(db_path)?;
    fleetdns_store::db::configure(&conn)?;
    fleetdns_store::migrations::apply_migrations(&mut conn)?;

    Ok(conn)
}
