//! FleetDNS Core - Domain model and shared facilities
//!
//! Provides:
//! - `DnsRecordSet` snapshot model with canonical serialization
//! - Deterministic SHA-256 digest computation
//! - Canonical structured error facility
//! - Logging facility (tracing subscriber profiles)

pub mod digest;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export key types
pub use errors::{FdError, FdErrorKind, Result};
pub use model::record_set::DnsRecordSet;
