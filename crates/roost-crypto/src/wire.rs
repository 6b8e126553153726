//! Canonical endpoint encoding (layout v1).
//!
//! This layout is a compatibility contract: every published record
//! embeds it, so any change to field order, key encoding, or the
//! length prefix invalidates all previously issued entries. New layouts
//! get a new version byte; v1 is frozen.
//!
//! ```text
//! offset 0       u8       version (= 1)
//! offset 1..33   [u8;32]  encryption_public_key (X25519)
//! offset 33..65  [u8;32]  signing_public_key (Ed25519)
//! offset 65..69  u32 BE   receiving_address byte length (<= 1024)
//! offset 69..    bytes    receiving_address, UTF-8
//! ```
//!
//! The encoding is deterministic and injective: equal endpoints encode
//! to equal bytes and `decode(encode(e)) == e`.

use bytes::{Buf, BufMut};
use thiserror::Error;

use crate::endpoint::Endpoint;
use roost_proto::validation::sizes::{
    ED25519_PUB_SIZE, ENDPOINT_HEADER_SIZE, MAX_ADDRESS_SIZE, X25519_PUB_SIZE,
};

/// Wire format version emitted by [`encode_endpoint`].
pub const ENDPOINT_WIRE_VERSION: u8 = 1;

/// Structural decode failure for endpoint bytes.
///
/// Distinct from signature failure at the layer above: these variants
/// mean the byte layout itself is invalid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedEndpointError {
    #[error("unsupported endpoint wire version {0}")]
    UnsupportedVersion(u8),
    #[error("truncated endpoint encoding: need {needed} bytes, got {got}")]
    Truncated { needed: usize, got: usize },
    #[error("address length {0} exceeds maximum {MAX_ADDRESS_SIZE}")]
    AddressTooLong(usize),
    #[error("{0} trailing bytes after endpoint encoding")]
    TrailingBytes(usize),
    #[error("receiving address is not valid UTF-8")]
    InvalidUtf8,
}

/// Canonically encode an endpoint.
///
/// Fails only for addresses longer than the wire format allows; a
/// legitimate producer treats that as a caller defect, not a record to
/// publish.
pub fn encode_endpoint(endpoint: &Endpoint) -> Result<Vec<u8>, MalformedEndpointError> {
    let address = endpoint.receiving_address.as_bytes();
    if address.len() > MAX_ADDRESS_SIZE {
        return Err(MalformedEndpointError::AddressTooLong(address.len()));
    }

    let mut out = Vec::with_capacity(ENDPOINT_HEADER_SIZE + address.len());
    out.put_u8(ENDPOINT_WIRE_VERSION);
    out.extend_from_slice(&endpoint.encryption_public_key);
    out.extend_from_slice(&endpoint.signing_public_key);
    out.put_u32(address.len() as u32);
    out.extend_from_slice(address);
    Ok(out)
}

/// Decode a canonical endpoint encoding.
pub fn decode_endpoint(data: &[u8]) -> Result<Endpoint, MalformedEndpointError> {
    if data.len() < ENDPOINT_HEADER_SIZE {
        return Err(MalformedEndpointError::Truncated {
            needed: ENDPOINT_HEADER_SIZE,
            got: data.len(),
        });
    }

    let mut buf = data;
    let version = buf.get_u8();
    if version != ENDPOINT_WIRE_VERSION {
        return Err(MalformedEndpointError::UnsupportedVersion(version));
    }

    let mut encryption_public_key = [0u8; X25519_PUB_SIZE];
    buf.copy_to_slice(&mut encryption_public_key);
    let mut signing_public_key = [0u8; ED25519_PUB_SIZE];
    buf.copy_to_slice(&mut signing_public_key);

    let address_len = buf.get_u32() as usize;
    if address_len > MAX_ADDRESS_SIZE {
        return Err(MalformedEndpointError::AddressTooLong(address_len));
    }
    if buf.remaining() < address_len {
        return Err(MalformedEndpointError::Truncated {
            needed: ENDPOINT_HEADER_SIZE + address_len,
            got: data.len(),
        });
    }
    if buf.remaining() > address_len {
        return Err(MalformedEndpointError::TrailingBytes(
            buf.remaining() - address_len,
        ));
    }

    let receiving_address = std::str::from_utf8(&buf[..address_len])
        .map_err(|_| MalformedEndpointError::InvalidUtf8)?
        .to_owned();

    Ok(Endpoint {
        encryption_public_key,
        signing_public_key,
        receiving_address,
    })
}
