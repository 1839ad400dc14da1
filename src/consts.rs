//! # Constants
//!
//! Purpose bytes from RFC 7292 Appendix B.3 and the defaults used by
//! [`Pkcs12KdfBuilder`](crate::Pkcs12KdfBuilder).

/// Purpose byte for cipher key material.
pub const PKCS12_KEY_ID: u8 = 1;

/// Purpose byte for initialization vectors.
pub const PKCS12_IV_ID: u8 = 2;

/// Purpose byte for integrity (MAC) keys.
pub const PKCS12_MAC_ID: u8 = 3;

/// Minimum allowed iteration count.
pub const PKCS12_MIN_ITER: u32 = 1;

/// Default iteration count, matching OpenSSL's `PKCS12_DEFAULT_ITER`.
pub const DEFAULT_PKCS12_ITERATIONS: u32 = 2048;

/// Default derived key length (32 bytes = 256-bit key).
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Default salt size for freshly generated salts (8 bytes, as OpenSSL writes them).
pub const DEFAULT_SALT_SIZE: usize = 8;

/// Length of the two-byte NUL terminator appended to a non-empty BMP password.
pub const BMP_TERMINATOR_LEN: usize = 2;
