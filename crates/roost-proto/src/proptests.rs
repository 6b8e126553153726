use proptest::prelude::*;
use prost::Message;

use crate::v1::AddressBookEntryV1;

proptest! {
    // Serialization fidelity: byte buffers in equal byte buffers out,
    // for arbitrary contents including non-UTF-8 bytes.
    #[test]
    fn entry_round_trip_is_byte_exact(
        serialized_endpoint in proptest::collection::vec(any::<u8>(), 0..2048),
        signature in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let entry = AddressBookEntryV1 { serialized_endpoint, signature };
        let decoded = AddressBookEntryV1::decode(entry.encode_to_vec().as_slice()).unwrap();
        prop_assert_eq!(decoded, entry);
    }

    // Encoding the same record twice yields identical bytes.
    #[test]
    fn entry_encoding_is_deterministic(
        serialized_endpoint in proptest::collection::vec(any::<u8>(), 0..2048),
        signature in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let entry = AddressBookEntryV1 { serialized_endpoint, signature };
        prop_assert_eq!(entry.encode_to_vec(), entry.encode_to_vec());
    }
}
