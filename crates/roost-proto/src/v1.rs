//! Version 1 wire messages.
//!
//! Field numbers are frozen: previously published records must keep
//! decoding, so renumbering or retyping a field is a breaking protocol
//! change.

/// A signed address-book record as it is persisted and transmitted.
///
/// `serialized_endpoint` is the canonical endpoint encoding produced by
/// the crypto layer; `signature` is an Ed25519 signature over the
/// signing bytes derived from it. A freshly constructed record has both
/// fields empty and is not yet usable; the signing operation populates
/// it.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AddressBookEntryV1 {
    /// Canonical byte encoding of the published endpoint.
    #[prost(bytes = "vec", tag = "1")]
    pub serialized_endpoint: ::prost::alloc::vec::Vec<u8>,
    /// Ed25519 signature over the signing bytes for `serialized_endpoint`.
    #[prost(bytes = "vec", tag = "2")]
    pub signature: ::prost::alloc::vec::Vec<u8>,
}
