// src/lib.rs

//! PKCS#12 password-based key derivation (RFC 7292 Appendix B).
//!
//! Derives cipher keys, IVs and MAC keys from a password, a salt, a purpose byte
//! and an iteration count over any hash exposing its digest and block sizes.

#![forbid(unsafe_code)]

pub mod aliases;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod utils;

pub use builders::pkcs12_builder::Pkcs12KdfBuilder;
pub use error::Pkcs12KdfError;

pub use crypto::hash::{DigestHash, HashAlgorithm, Pkcs12Hash};
pub use crypto::kdf::pkcs12::{
    adjust_block, derive_pkcs12_key, derive_secure_pkcs12_key, KeyPurpose,
};
pub use crypto::mac::{
    bks_mac_key_len, compute_bks_mac, compute_pkcs12_mac, derive_mac_key, verify_bks_mac,
    verify_pkcs12_mac,
};

pub use utils::password_to_bmp;
