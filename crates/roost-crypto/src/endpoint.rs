//! Endpoint value types.
//!
//! [`Endpoint`] is the public half of a party's identity: the key
//! material peers need to reach it, plus the address where its messages
//! are retrieved. [`OwnEndpoint`] pairs that with the private keys and
//! is the only value capable of signing records for its endpoint. Key
//! material is zeroized when an `OwnEndpoint` is dropped.

use ed25519_dalek::{Signature, Signer, SigningKey};
use rand_core::OsRng;
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::entry::EntryError;
use crate::hash::derive_id;
use crate::settings::CryptoSettings;
use crate::utils::constant_time_compare_array;
use roost_proto::v1::AddressBookEntryV1;

/// Error type for endpoint construction.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("private keys do not match the endpoint's public keys")]
    KeyMismatch,
}

/// A party's public identity: key material plus receiving address.
///
/// Equality is structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// X25519 public key for message confidentiality.
    pub encryption_public_key: [u8; 32],
    /// Ed25519 public key for record authenticity.
    pub signing_public_key: [u8; 32],
    /// Where messages for this party are retrieved (URL/URI).
    pub receiving_address: String,
}

impl Endpoint {
    /// Derive the endpoint's identity: id = SHA-256(signing_public_key).
    pub fn id(&self) -> [u8; 32] {
        derive_id(&self.signing_public_key)
    }
}

/// An endpoint together with its private keys.
///
/// Private key fields are read-only after construction, so a shared
/// `&OwnEndpoint` may sign from any number of threads without locking.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct OwnEndpoint {
    /// Ed25519 signing private key
    #[zeroize(skip)] // SigningKey implements Zeroize internally
    signing_key: SigningKey,
    /// X25519 decryption private key
    #[zeroize(skip)] // StaticSecret implements Zeroize internally
    encryption_key: StaticSecret,
    /// Public half; carries no secret material
    #[zeroize(skip)]
    public_endpoint: Endpoint,
}

impl OwnEndpoint {
    /// Generate a fresh endpoint with random keys.
    pub fn generate(receiving_address: impl Into<String>) -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        let encryption_key = StaticSecret::random_from_rng(OsRng);
        Self::assemble(signing_key, encryption_key, receiving_address.into())
    }

    /// Rebuild an endpoint from stored private key bytes.
    ///
    /// The public endpoint is re-derived from the private keys, so the
    /// pairing invariant holds by construction.
    pub fn from_key_bytes(
        signing_key_bytes: &[u8; 32],
        encryption_key_bytes: &[u8; 32],
        receiving_address: impl Into<String>,
    ) -> Self {
        let signing_key = SigningKey::from_bytes(signing_key_bytes);
        let encryption_key = StaticSecret::from(*encryption_key_bytes);
        Self::assemble(signing_key, encryption_key, receiving_address.into())
    }

    /// Adopt an existing public [`Endpoint`] alongside private keys.
    ///
    /// Fails with [`EndpointError::KeyMismatch`] unless the public keys
    /// derived from the private keys match the endpoint's. The compare
    /// is constant-time.
    pub fn from_parts(
        public_endpoint: Endpoint,
        signing_key_bytes: &[u8; 32],
        encryption_key_bytes: &[u8; 32],
    ) -> Result<Self, EndpointError> {
        let signing_key = SigningKey::from_bytes(signing_key_bytes);
        let encryption_key = StaticSecret::from(*encryption_key_bytes);

        let derived_sign_pub = signing_key.verifying_key().to_bytes();
        let derived_enc_pub = X25519PublicKey::from(&encryption_key).to_bytes();
        let sign_ok =
            constant_time_compare_array(&derived_sign_pub, &public_endpoint.signing_public_key);
        let enc_ok =
            constant_time_compare_array(&derived_enc_pub, &public_endpoint.encryption_public_key);
        if !(sign_ok & enc_ok) {
            return Err(EndpointError::KeyMismatch);
        }

        Ok(Self {
            signing_key,
            encryption_key,
            public_endpoint,
        })
    }

    fn assemble(
        signing_key: SigningKey,
        encryption_key: StaticSecret,
        receiving_address: String,
    ) -> Self {
        let public_endpoint = Endpoint {
            encryption_public_key: X25519PublicKey::from(&encryption_key).to_bytes(),
            signing_public_key: signing_key.verifying_key().to_bytes(),
            receiving_address,
        };
        Self {
            signing_key,
            encryption_key,
            public_endpoint,
        }
    }

    /// The public half of this endpoint.
    pub fn public_endpoint(&self) -> &Endpoint {
        &self.public_endpoint
    }

    /// Derive the endpoint's identity from its signing public key.
    pub fn id(&self) -> [u8; 32] {
        self.public_endpoint.id()
    }

    /// Sign a message with the endpoint's Ed25519 private key.
    ///
    /// Returns a 64-byte signature.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        let signature: Signature = self.signing_key.sign(message);
        signature.to_bytes()
    }

    /// Publish this endpoint as a signed address-book record.
    ///
    /// Convenience wrapper around
    /// [`create_address_book_entry`](crate::entry::create_address_book_entry).
    pub fn create_address_book_entry(
        &self,
        settings: &CryptoSettings,
    ) -> Result<AddressBookEntryV1, EntryError> {
        crate::entry::create_address_book_entry(self, settings)
    }
}

impl std::fmt::Debug for OwnEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never echo private key material
        f.debug_struct("OwnEndpoint")
            .field("public_endpoint", &self.public_endpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_endpoint_is_internally_consistent() {
        let own = OwnEndpoint::generate("https://relay.example/inbox/a");
        let endpoint = own.public_endpoint();

        assert_eq!(
            endpoint.signing_public_key,
            own.signing_key.verifying_key().to_bytes()
        );
        assert_eq!(
            endpoint.encryption_public_key,
            X25519PublicKey::from(&own.encryption_key).to_bytes()
        );
        assert_eq!(endpoint.receiving_address, "https://relay.example/inbox/a");
    }

    #[test]
    fn endpoint_equality_is_structural() {
        let own = OwnEndpoint::generate("https://relay.example/inbox/a");
        let a = own.public_endpoint().clone();
        let b = own.public_endpoint().clone();
        assert_eq!(a, b);

        let mut c = a.clone();
        c.receiving_address = "https://relay.example/inbox/b".into();
        assert_ne!(a, c);
    }

    #[test]
    fn from_key_bytes_round_trip() {
        let seed = [0x11u8; 32];
        let enc = [0x22u8; 32];
        let a = OwnEndpoint::from_key_bytes(&seed, &enc, "addr");
        let b = OwnEndpoint::from_key_bytes(&seed, &enc, "addr");
        assert_eq!(a.public_endpoint(), b.public_endpoint());
    }

    #[test]
    fn from_parts_accepts_matching_keys() {
        let seed = [0x11u8; 32];
        let enc = [0x22u8; 32];
        let own = OwnEndpoint::from_key_bytes(&seed, &enc, "addr");
        let endpoint = own.public_endpoint().clone();

        let rebuilt = OwnEndpoint::from_parts(endpoint.clone(), &seed, &enc).unwrap();
        assert_eq!(rebuilt.public_endpoint(), &endpoint);
    }

    #[test]
    fn from_parts_rejects_mismatched_keys() {
        let own = OwnEndpoint::generate("addr");
        let endpoint = own.public_endpoint().clone();

        // Wrong private keys for this public endpoint
        let result = OwnEndpoint::from_parts(endpoint, &[0x99u8; 32], &[0x88u8; 32]);
        assert!(matches!(result, Err(EndpointError::KeyMismatch)));
    }

    #[test]
    fn signature_verifies_under_own_public_key() {
        use ed25519_dalek::{Signature, Verifier, VerifyingKey};

        let own = OwnEndpoint::generate("addr");
        let message = b"record bytes";
        let signature = own.sign(message);

        let vk = VerifyingKey::from_bytes(&own.public_endpoint().signing_public_key).unwrap();
        assert!(vk
            .verify(message, &Signature::from_bytes(&signature))
            .is_ok());
    }

    #[test]
    fn distinct_endpoints_have_distinct_ids() {
        let a = OwnEndpoint::generate("addr");
        let b = OwnEndpoint::generate("addr");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id(), a.public_endpoint().id());
    }

    #[test]
    fn debug_output_redacts_private_keys() {
        let own = OwnEndpoint::generate("addr");
        let rendered = format!("{:?}", own);
        assert!(rendered.contains("public_endpoint"));
        assert!(!rendered.contains("signing_key"));
    }
}
