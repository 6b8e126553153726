#![forbid(unsafe_code)]

//! Wire format definitions for Roost signed address-book records.
//!
//! The only message that crosses a trust boundary is
//! [`v1::AddressBookEntryV1`]; everything else in the system treats it
//! as an opaque pair of byte buffers.

pub mod v1;
pub mod validation;

#[cfg(test)]
mod proptests;
