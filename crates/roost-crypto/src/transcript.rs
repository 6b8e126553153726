//! Deterministic tagged transcript for signing bytes.
//!
//! The bytes a record signature covers are built by appending
//! (tag, length, value) tuples to a domain-separated buffer, so the
//! same logical record produces the same signing bytes everywhere and
//! records from different protocol contexts can never collide.

use bytes::{BufMut, BytesMut};

/// Tag constants for transcript fields.
pub mod tags {
    pub const DOMAIN: u32 = 0;
    pub const PAYLOAD: u32 = 1;
    pub const ALGORITHM: u32 = 2;
}

/// A minimal deterministic transcript builder.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    buf: BytesMut,
}

impl Transcript {
    /// Create a new transcript with the given domain separator.
    pub fn new(domain: &'static str) -> Self {
        let mut t = Self {
            buf: BytesMut::with_capacity(256),
        };
        t.append_str(tags::DOMAIN, domain);
        t
    }

    /// Append raw bytes with a tag: tag (u32 BE) + len (u32 BE) + data.
    pub fn append_bytes(&mut self, tag: u32, data: &[u8]) -> &mut Self {
        self.buf.put_u32(tag);
        self.buf.put_u32(data.len() as u32);
        self.buf.extend_from_slice(data);
        self
    }

    /// Append a u64 value with a tag.
    pub fn append_u64(&mut self, tag: u32, v: u64) -> &mut Self {
        self.buf.put_u32(tag);
        self.buf.put_u32(8);
        self.buf.put_u64(v);
        self
    }

    /// Append a string with a tag (UTF-8 bytes).
    pub fn append_str(&mut self, tag: u32, s: &str) -> &mut Self {
        self.append_bytes(tag, s.as_bytes())
    }

    /// Get the raw transcript bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}
