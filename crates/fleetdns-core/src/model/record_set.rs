//! DNS record set snapshot model.
//!
//! A `DnsRecordSet` is the in-memory, point-in-time export of the fleet's
//! name-resolution state: an ordered list of `(address, name)` pairs plus a
//! derived version.
//!
//! ## Canonical Serialization
//!
//! The wire/artifact form is JSON with declaration-order fields:
//!
//! ```text
//! {"records":[["10.0.0.1","host-1.fleet"],...],"version":3}
//! ```
//!
//! Field order is stable across calls, so identical record sets always
//! serialize to identical bytes. This is what makes the published artifact's
//! digest a meaningful dedup/audit signal.

use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of host address/name pairs.
///
/// `version` is derived, not assigned: it equals the maximum raw-record id
/// among the rows used to build the set, or 0 when no rows exist. Two record
/// sets are equal iff their pair sequences and versions match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DnsRecordSet {
    /// Ordered `(address, name)` pairs
    pub records: Vec<(String, String)>,

    /// Maximum source row id at export time (0 for an empty export)
    pub version: i64,
}

impl DnsRecordSet {
    /// Create a record set from pairs and a derived version
    pub fn new(records: Vec<(String, String)>, version: i64) -> Self {
        Self { records, version }
    }

    /// Number of address/name pairs
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the set carries no pairs
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize to canonical bytes.
    ///
    /// Compact JSON with stable field order; the same record set always
    /// produces the same bytes.
    ///
    /// # Errors
    ///
    /// Returns `FdErrorKind::Serialization` if JSON encoding fails.
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize from canonical bytes (the inverse of `to_canonical_bytes`).
    ///
    /// # Errors
    ///
    /// Returns `FdErrorKind::Serialization` if the bytes are not a valid
    /// record set document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DnsRecordSet {
        DnsRecordSet::new(
            vec![
                ("10.0.0.1".into(), "host-1.fleet".into()),
                ("10.0.0.2".into(), "host-2.fleet".into()),
            ],
            7,
        )
    }

    #[test]
    fn test_canonical_bytes_shape() {
        let bytes = sample().to_canonical_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            r#"{"records":[["10.0.0.1","host-1.fleet"],["10.0.0.2","host-2.fleet"]],"version":7}"#
        );
    }

    #[test]
    fn test_canonical_bytes_stable() {
        let set = sample();
        assert_eq!(
            set.to_canonical_bytes().unwrap(),
            set.clone().to_canonical_bytes().unwrap()
        );
    }

    #[test]
    fn test_round_trip() {
        let set = sample();
        let bytes = set.to_canonical_bytes().unwrap();
        let restored = DnsRecordSet::from_slice(&bytes).unwrap();
        assert_eq!(restored, set);
    }

    #[test]
    fn test_empty_set() {
        let set = DnsRecordSet::default();
        assert!(set.is_empty());
        assert_eq!(set.version, 0);
        let bytes = set.to_canonical_bytes().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), r#"{"records":[],"version":0}"#);
    }

    #[test]
    fn test_order_is_significant_for_equality() {
        let a = DnsRecordSet::new(
            vec![("1.1.1.1".into(), "a".into()), ("2.2.2.2".into(), "b".into())],
            2,
        );
        let b = DnsRecordSet::new(
            vec![("2.2.2.2".into(), "b".into()), ("1.1.1.1".into(), "a".into())],
            2,
        );
        assert_ne!(a, b);
    }
}
