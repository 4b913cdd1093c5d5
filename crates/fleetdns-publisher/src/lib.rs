//! FleetDNS Publisher - the publish cycle operations
//!
//! Composes the store and domain model into the four steps of a publish
//! cycle, in execution order:
//!
//! 1. **Export** — read raw rows into a versioned [`DnsRecordSet`]
//! 2. **Publish** — store the canonical artifact and record its ledger row
//! 3. **Retention** — demote every superseded publication to the archive
//! 4. **Broadcast** — announce the active publication to agents
//!
//! All four are safe under concurrent invocation against a shared store;
//! coordination happens through the `dns_blobs` ledger, never through shared
//! in-process state.
//!
//! [`DnsRecordSet`]: fleetdns_core::DnsRecordSet

pub mod broadcast;
pub mod exporter;
pub mod publisher;
pub mod retention;

// Re-export key types
pub use broadcast::{broadcast_current_blob, AgentNotifier, NoopAgentNotifier, SyncDnsPayload};
pub use exporter::export_dns_records;
pub use publisher::publish_record_set;
pub use retention::enforce_retention;
