//! Address-book record signing and verification.
//!
//! A record is self-certifying: the signing public key is embedded in
//! the signed payload itself, so a recipient needs no external key
//! registry. Verification is an explicit decode-then-verify pipeline:
//! first the endpoint bytes are structurally decoded, then the
//! signature is checked with the key taken from the decoded endpoint.

use ed25519_dalek::{Signature, VerifyingKey};

use crate::endpoint::{Endpoint, OwnEndpoint};
use crate::settings::CryptoSettings;
use crate::transcript::{tags, Transcript};
use crate::wire::{decode_endpoint, encode_endpoint};
use roost_proto::v1::AddressBookEntryV1;
use roost_proto::validation::ValidationError;

/// Error type for address-book record operations.
///
/// Malformed endpoint bytes and signature mismatches collapse into the
/// single [`BadEntry`](EntryError::BadEntry) kind: a caller must treat
/// "cannot trust this record" uniformly, whatever the precise cause.
/// [`InvalidArgument`](EntryError::InvalidArgument) is the one
/// exception; it marks a caller defect (an unpopulated record, or an
/// endpoint the wire format cannot carry), never a security failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("address book entry failed verification")]
    BadEntry,
}

/// Compute the signing bytes for a serialized endpoint.
///
/// The transcript binds the digest algorithm id alongside the payload,
/// so a record signed under one security level can never verify under
/// another level's settings.
fn entry_sign_data(serialized_endpoint: &[u8], settings: &CryptoSettings) -> Vec<u8> {
    let mut t = Transcript::new("roost_abook_entry_v1");
    t.append_u64(tags::ALGORITHM, settings.hash_algorithm().id());
    t.append_bytes(tags::PAYLOAD, serialized_endpoint);
    settings.hash_algorithm().digest(t.as_bytes())
}

/// Sign an endpoint into a publishable address-book record.
///
/// Pure with respect to external state: the only inputs are the own
/// endpoint and the settings, and the returned record's
/// `serialized_endpoint` decodes exactly to `own.public_endpoint()`.
/// Public/private pairing is guaranteed by [`OwnEndpoint`]
/// construction; the only failure mode is an endpoint whose receiving
/// address exceeds the wire format's limit.
pub fn create_address_book_entry(
    own: &OwnEndpoint,
    settings: &CryptoSettings,
) -> Result<AddressBookEntryV1, EntryError> {
    let serialized_endpoint = encode_endpoint(own.public_endpoint())
        .map_err(|_| EntryError::InvalidArgument("receiving_address"))?;
    let sign_data = entry_sign_data(&serialized_endpoint, settings);
    let signature = own.sign(&sign_data);

    Ok(AddressBookEntryV1 {
        serialized_endpoint,
        signature: signature.to_vec(),
    })
}

/// Recover and authenticate the endpoint a record advertises.
///
/// Pipeline: structural guard, canonical decode, then signature
/// verification with the signing key taken from the decoded endpoint.
/// There is no partial-trust outcome; on success the returned
/// [`Endpoint`] may be treated as an authenticated public identity.
pub fn extract_endpoint(
    entry: &AddressBookEntryV1,
    settings: &CryptoSettings,
) -> Result<Endpoint, EntryError> {
    entry.validate().map_err(|e| match e {
        ValidationError::EmptyField { field } => EntryError::InvalidArgument(field),
        // Wrong sizes on a populated record mean damage, not caller error
        _ => EntryError::BadEntry,
    })?;

    let endpoint =
        decode_endpoint(&entry.serialized_endpoint).map_err(|_| EntryError::BadEntry)?;

    let verifying_key =
        VerifyingKey::from_bytes(&endpoint.signing_public_key).map_err(|_| EntryError::BadEntry)?;
    let sig_arr: [u8; 64] = entry
        .signature
        .as_slice()
        .try_into()
        .map_err(|_| EntryError::BadEntry)?;
    let signature = Signature::from_bytes(&sig_arr);

    let sign_data = entry_sign_data(&entry.serialized_endpoint, settings);
    verifying_key
        .verify_strict(&sign_data, &signature)
        .map_err(|_| EntryError::BadEntry)?;

    Ok(endpoint)
}
