//! Constant-time comparison utilities.
//!
//! Byte comparisons of key material must not leak, through timing, how
//! much of the two buffers matched.

use constant_time_eq::constant_time_eq;

/// Compare two byte slices in constant time.
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    constant_time_eq(a, b)
}

/// Compare two fixed-size arrays in constant time.
pub fn constant_time_compare_array<const N: usize>(a: &[u8; N], b: &[u8; N]) -> bool {
    constant_time_eq(a, b)
}
