//! Property tests for the fixed-width share encoding

use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamir_bigint::codec::{SHARE_LEN, Share};
use shamir_bigint::domain::ShareIndex;

/// Wrapper for shares with any non-zero index and any value below 2^1024
#[derive(Clone, Debug)]
struct AnyShare(Share);

impl Arbitrary for AnyShare {
    fn arbitrary(g: &mut Gen) -> Self {
        let index = ShareIndex::new(u8::arbitrary(g).max(1)).unwrap();

        // Random width so short and full-width values both show up
        let width = usize::arbitrary(g) % (SHARE_LEN - 1) + 1;
        let bytes: Vec<u8> = (0..width).map(|_| u8::arbitrary(g)).collect();

        AnyShare(Share::new(index, BigUint::from_bytes_be(&bytes)).unwrap())
    }
}

#[quickcheck]
fn prop_marshal_round_trip(share: AnyShare) -> bool {
    let AnyShare(share) = share;
    Share::unmarshal(&share.marshal()).is_ok_and(|decoded| decoded == share)
}

#[quickcheck]
fn prop_hex_round_trip(share: AnyShare) -> bool {
    let AnyShare(share) = share;
    Share::from_hex(&share.to_hex()).is_ok_and(|decoded| decoded == share)
}

#[quickcheck]
fn prop_marshal_is_fixed_width(share: AnyShare) -> bool {
    let AnyShare(share) = share;
    let bytes = share.marshal();
    bytes.len() == SHARE_LEN && bytes[0] == *share.index()
}

#[quickcheck]
fn prop_unmarshal_rejects_other_lengths(bytes: Vec<u8>) -> bool {
    if bytes.len() == SHARE_LEN {
        return true;
    }
    Share::unmarshal(&bytes).is_err()
}

#[test]
fn test_every_index_round_trips() {
    for raw in 1..=u8::MAX {
        let share = Share::new(ShareIndex::new(raw).unwrap(), BigUint::from(raw)).unwrap();
        assert_eq!(Share::unmarshal(&share.marshal()).unwrap(), share);
    }
}
