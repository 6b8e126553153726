#![forbid(unsafe_code)]

//! Trust core for a decentralized address book.
//!
//! A party publishes a signed record advertising its public key
//! material and receiving address; any recipient can recover the
//! endpoint from the record and verify, with no external key registry,
//! that it was produced by the holder of the matching private key and
//! has not been altered in transit.

pub mod hash;
pub mod transcript;
pub mod endpoint;
pub mod wire;
pub mod settings;
pub mod entry;
pub mod utils;

pub use endpoint::{Endpoint, OwnEndpoint};
pub use entry::{create_address_book_entry, extract_endpoint, EntryError};
pub use settings::{CryptoSettings, HashAlgorithm, SecurityLevel, SignatureAlgorithm};

#[cfg(test)]
mod proptests;
