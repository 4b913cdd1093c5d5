// Property tests for canonical serialization determinism.
// The published artifact digest is only a meaningful audit signal if equal
// record sets always produce equal bytes.

use fleetdns_core::digest::digest_record_set;
use fleetdns_core::DnsRecordSet;
use proptest::prelude::*;

fn arb_record_set() -> impl Strategy<Value = DnsRecordSet> {
    (
        proptest::collection::vec(("[0-9]{1,3}\\.[0-9]{1,3}", "[a-z]{1,12}\\.fleet"), 0..16),
        0i64..100_000,
    )
        .prop_map(|(records, version)| DnsRecordSet::new(records, version))
}

proptest! {
    #[test]
    fn canonical_bytes_and_digest_are_deterministic(set in arb_record_set()) {
        let bytes1 = set.to_canonical_bytes().unwrap();
        let bytes2 = set.clone().to_canonical_bytes().unwrap();
        prop_assert_eq!(&bytes1, &bytes2);
        prop_assert_eq!(
            digest_record_set(&set).unwrap(),
            digest_record_set(&set.clone()).unwrap()
        );

        let restored = DnsRecordSet::from_slice(&bytes1).unwrap();
        prop_assert_eq!(restored, set);
    }

    #[test]
    fn version_always_participates_in_digest(set in arb_record_set()) {
        let mut bumped = set.clone();
        bumped.version += 1;
        prop_assert_ne!(
            digest_record_set(&set).unwrap(),
            digest_record_set(&bumped).unwrap()
        );
    }
}
