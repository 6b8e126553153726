#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::endpoint::{Endpoint, OwnEndpoint};
    use crate::entry::{create_address_book_entry, extract_endpoint, EntryError};
    use crate::settings::{CryptoSettings, SecurityLevel};
    use crate::wire::{decode_endpoint, encode_endpoint};

    fn security_level() -> impl Strategy<Value = SecurityLevel> {
        prop_oneof![
            Just(SecurityLevel::Minimum),
            Just(SecurityLevel::Maximum),
        ]
    }

    // Addresses up to the wire limit, arbitrary UTF-8.
    fn receiving_address() -> impl Strategy<Value = String> {
        proptest::string::string_regex(".{0,64}").unwrap()
    }

    proptest! {
        // Canonical codec: decode of encode is the identity.
        #[test]
        fn endpoint_codec_round_trip(
            encryption_public_key in any::<[u8; 32]>(),
            signing_public_key in any::<[u8; 32]>(),
            receiving_address in receiving_address(),
        ) {
            let endpoint = Endpoint {
                encryption_public_key,
                signing_public_key,
                receiving_address,
            };
            let encoded = encode_endpoint(&endpoint).unwrap();
            prop_assert_eq!(decode_endpoint(&encoded).unwrap(), endpoint);
        }

        // Round trip: extract(create(o, s), s) == o.public_endpoint(),
        // at every security level. The create/verify contract does not
        // depend on the level.
        #[test]
        fn entry_round_trip_any_level(
            sign_seed in any::<[u8; 32]>(),
            encryption_secret in any::<[u8; 32]>(),
            receiving_address in receiving_address(),
            level in security_level(),
        ) {
            let own = OwnEndpoint::from_key_bytes(
                &sign_seed,
                &encryption_secret,
                receiving_address,
            );
            let settings = CryptoSettings::for_security_level(level);

            let entry = create_address_book_entry(&own, &settings).unwrap();
            let endpoint = extract_endpoint(&entry, &settings).unwrap();
            prop_assert_eq!(&endpoint, own.public_endpoint());
        }

        // Tamper detection: any single-byte change anywhere in the
        // serialized endpoint fails verification.
        #[test]
        fn any_single_byte_mutation_is_rejected(
            sign_seed in any::<[u8; 32]>(),
            encryption_secret in any::<[u8; 32]>(),
            pos_seed in any::<prop::sample::Index>(),
            bit in 0u8..8,
            level in security_level(),
        ) {
            let own = OwnEndpoint::from_key_bytes(
                &sign_seed,
                &encryption_secret,
                "https://relay.example/inbox/prop",
            );
            let settings = CryptoSettings::for_security_level(level);
            let mut entry = create_address_book_entry(&own, &settings).unwrap();

            let pos = pos_seed.index(entry.serialized_endpoint.len());
            entry.serialized_endpoint[pos] ^= 1 << bit;

            prop_assert_eq!(
                extract_endpoint(&entry, &settings),
                Err(EntryError::BadEntry)
            );
        }

        // Cross-key rejection: swapping in another endpoint's bytes
        // without re-signing never verifies.
        #[test]
        fn substituted_endpoint_is_rejected(
            seed_a in any::<[u8; 32]>(),
            seed_b in any::<[u8; 32]>(),
            enc_a in any::<[u8; 32]>(),
            enc_b in any::<[u8; 32]>(),
            level in security_level(),
        ) {
            prop_assume!(seed_a != seed_b);

            let a = OwnEndpoint::from_key_bytes(&seed_a, &enc_a, "inbox/a");
            let b = OwnEndpoint::from_key_bytes(&seed_b, &enc_b, "inbox/b");
            let settings = CryptoSettings::for_security_level(level);

            let mut entry = create_address_book_entry(&a, &settings).unwrap();
            entry.serialized_endpoint = encode_endpoint(b.public_endpoint()).unwrap();

            prop_assert_eq!(
                extract_endpoint(&entry, &settings),
                Err(EntryError::BadEntry)
            );
        }
    }
}
