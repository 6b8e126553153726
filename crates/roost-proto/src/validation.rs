//! Structural validation for wire messages.
//!
//! Validation here is purely structural (field presence and sizes); it
//! says nothing about whether a record is authentic. The crypto layer
//! runs these checks before spending any cycles on signature
//! verification.

use crate::v1::AddressBookEntryV1;

/// Validation error types for wire messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is empty.
    EmptyField { field: &'static str },
    /// Field has a size other than the one the protocol fixes.
    InvalidSize {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Field exceeds its maximum allowed size.
    TooLarge {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => {
                write!(f, "required field '{}' is empty", field)
            }
            Self::InvalidSize {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "field '{}' has invalid size: expected {}, got {}",
                    field, expected, actual
                )
            }
            Self::TooLarge { field, max, actual } => {
                write!(f, "field '{}' size {} exceeds maximum {}", field, actual, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field size constants.
pub mod sizes {
    /// Size of Ed25519 public keys.
    pub const ED25519_PUB_SIZE: usize = 32;
    /// Size of X25519 public keys.
    pub const X25519_PUB_SIZE: usize = 32;
    /// Size of Ed25519 signatures.
    pub const ED25519_SIG_SIZE: usize = 64;
    /// Maximum length in bytes of a receiving address.
    pub const MAX_ADDRESS_SIZE: usize = 1024;
    /// Fixed prefix of a canonical endpoint encoding:
    /// version byte + two public keys + address length word.
    pub const ENDPOINT_HEADER_SIZE: usize = 1 + X25519_PUB_SIZE + ED25519_PUB_SIZE + 4;
    /// Maximum size of a canonical endpoint encoding.
    pub const MAX_SERIALIZED_ENDPOINT_SIZE: usize = ENDPOINT_HEADER_SIZE + MAX_ADDRESS_SIZE;
}

fn validate_not_empty(field: &'static str, data: &[u8]) -> ValidationResult<()> {
    if data.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

fn validate_exact_size(field: &'static str, data: &[u8], expected: usize) -> ValidationResult<()> {
    if data.len() != expected {
        return Err(ValidationError::InvalidSize {
            field,
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

fn validate_max_size(field: &'static str, data: &[u8], max: usize) -> ValidationResult<()> {
    if data.len() > max {
        return Err(ValidationError::TooLarge {
            field,
            max,
            actual: data.len(),
        });
    }
    Ok(())
}

impl AddressBookEntryV1 {
    /// Validate the structural shape of a record.
    ///
    /// Empty-field errors are reported before size errors so that an
    /// unpopulated record is always distinguishable from a damaged one.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_not_empty("serialized_endpoint", &self.serialized_endpoint)?;
        validate_not_empty("signature", &self.signature)?;
        validate_max_size(
            "serialized_endpoint",
            &self.serialized_endpoint,
            sizes::MAX_SERIALIZED_ENDPOINT_SIZE,
        )?;
        validate_exact_size("signature", &self.signature, sizes::ED25519_SIG_SIZE)?;
        Ok(())
    }
}
