//! Security-level configuration for record signing.
//!
//! A [`SecurityLevel`] is the only knob callers get. Every algorithm
//! parameter is derived from it by a pure mapping, so no combination of
//! signature scheme, digest, and key length other than the vetted ones
//! can ever be assembled.

use sha2::{Digest, Sha256, Sha512};

use roost_proto::validation::sizes::ED25519_PUB_SIZE;

/// Named security tier, totally ordered by strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SecurityLevel {
    Minimum,
    Maximum,
}

/// Signature scheme identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    Ed25519,
}

/// Digest used over the record transcript before signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Stable identifier bound into the signing transcript so records
    /// signed under one digest never verify under another.
    pub fn id(&self) -> u64 {
        match self {
            Self::Sha256 => 1,
            Self::Sha512 => 2,
        }
    }

    /// Compute the digest of `data` under this algorithm.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

/// Algorithm parameters derived from a [`SecurityLevel`].
///
/// Fields are read-only: the per-level parameter sets are fixed, never
/// independently configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoSettings {
    security_level: SecurityLevel,
    signature_algorithm: SignatureAlgorithm,
    hash_algorithm: HashAlgorithm,
    minimum_key_length: usize,
}

impl CryptoSettings {
    /// The one valid parameter set for `level`.
    pub fn for_security_level(level: SecurityLevel) -> Self {
        match level {
            SecurityLevel::Minimum => Self {
                security_level: level,
                signature_algorithm: SignatureAlgorithm::Ed25519,
                hash_algorithm: HashAlgorithm::Sha256,
                minimum_key_length: ED25519_PUB_SIZE,
            },
            SecurityLevel::Maximum => Self {
                security_level: level,
                signature_algorithm: SignatureAlgorithm::Ed25519,
                hash_algorithm: HashAlgorithm::Sha512,
                minimum_key_length: ED25519_PUB_SIZE,
            },
        }
    }

    pub fn security_level(&self) -> SecurityLevel {
        self.security_level
    }

    pub fn signature_algorithm(&self) -> SignatureAlgorithm {
        self.signature_algorithm
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }

    pub fn minimum_key_length(&self) -> usize {
        self.minimum_key_length
    }
}
