//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, Pkcs12KdfError>`](Pkcs12KdfError).

use thiserror::Error;

/// The error type for all PKCS#12 key derivation operations.
///
/// Derivation is pure and deterministic, so every error is terminal: retrying
/// with the same arguments yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Pkcs12KdfError {
    /// A caller-supplied argument is outside the accepted domain.
    ///
    /// Raised for:
    /// - an iteration count of zero
    /// - a hash primitive reporting a zero digest or block size
    /// - a hash primitive returning a digest of the wrong length
    /// - a block-adjustment window outside its buffer
    /// - an unknown hash algorithm name
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A buffer-size computation would overflow `usize`.
    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    /// A lower-level cryptographic primitive rejected its input.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Unsupported BKS keystore version.
    ///
    /// Only versions 1 and 2 define MAC key parameters.
    #[error("Unsupported version: {0}")]
    UnsupportedVersion(u32),

    /// The computed integrity MAC does not match the stored one.
    #[error("MAC verification failed")]
    MacMismatch,
}
