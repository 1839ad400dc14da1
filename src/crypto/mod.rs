// src/crypto/mod.rs

//! Low-level crypto primitives: hash adapters, the PKCS#12 KDF and keystore MACs.
//!
//! See crate root for re-exports. HMAC types are defined in `aliases.rs`.

pub mod hash;
pub mod kdf;
pub mod mac;
#[cfg(feature = "rand")]
pub mod rng;
