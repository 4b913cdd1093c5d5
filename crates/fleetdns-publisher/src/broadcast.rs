//! Change broadcast.
//!
//! Announces the active publication to the agent fleet through the
//! `AgentNotifier` boundary. Delivery is best-effort and unacknowledged;
//! agents are expected to be idempotent on identical blobstore ids, so a
//! redundant broadcast is harmless.

use fleetdns_core::Result;
use fleetdns_store::blobs::fetch_current_blob;
use rusqlite::Connection;
use serde::Serialize;

/// Notification sent to every agent on broadcast
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SyncDnsPayload {
    /// Opaque blob store handle of the active artifact
    pub blobstore_id: String,
    /// Hex SHA-256 of the artifact bytes
    pub sha256: String,
    /// Record-set version carried by the artifact
    pub version: i64,
}

/// Transport boundary for fanning a notification out to all known agents.
///
/// The agent set is discovered by the transport; this subsystem neither
/// tracks agents nor expects acknowledgements.
pub trait AgentNotifier: Send + Sync {
    /// Send the payload to every known agent.
    ///
    /// # Errors
    ///
    /// Returns `FdErrorKind::ExternalService` when the transport cannot
    /// accept the fan-out.
    fn notify_all(&self, payload: &SyncDnsPayload) -> Result<()>;
}

/// Discards every notification (for callers that don't broadcast, and tests
/// that don't assert delivery).
pub struct NoopAgentNotifier;

impl AgentNotifier for NoopAgentNotifier {
    fn notify_all(&self, _payload: &SyncDnsPayload) -> Result<()> {
        Ok(())
    }
}

/// Broadcast the active publication, returning the payload that was sent.
///
/// Selects the ledger row with the greatest id — insertion order, never
/// `version` order. With an empty ledger this is a silent no-op returning
/// `None`: a fleet with no published snapshot has nothing to tell agents.
/// Durable state is never mutated.
///
/// # Errors
///
/// Ledger-read and transport failures propagate unchanged.
pub fn broadcast_current_blob(
    conn: &Connection,
    notifier: &dyn AgentNotifier,
) -> Result<Option<SyncDnsPayload>> {
    let Some(row) = fetch_current_blob(conn)? else {
        tracing::debug!("No published snapshot; broadcast is a no-op");
        return Ok(None);
    };

    let payload = SyncDnsPayload {
        blobstore_id: row.blobstore_id,
        sha256: row.sha256,
        version: row.version,
    };

    notifier.notify_all(&payload)?;

    tracing::info!(
        blobstore_id = %payload.blobstore_id,
        version = payload.version,
        "Broadcast active publication"
    );

    Ok(Some(payload))
}
