//! # Secure-Gate Type Aliases
//!
//! Type aliases for secret material built on [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Secrets are only reachable through `.expose_secret()` / `.expose_secret_mut()`.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha1`] - HMAC-SHA1, the PKCS#12 and BKS integrity default
//! - [`HmacSha224`], [`HmacSha256`], [`HmacSha384`], [`HmacSha512`] - SHA-2 integrity MACs
//!
//! ### Dynamic Secrets
//! - [`PasswordString`] - Secure password string wrapper
//! - [`DerivedKey`] - Derived key material returned to callers
//! - [`SecretBytes`] - Internal buffers holding password-derived bytes

use secure_gate::dynamic_alias;

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitives
// ─────────────────────────────────────────────────────────────────────────────
use hmac::Hmac;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

pub type HmacSha1 = Hmac<Sha1>;
pub type HmacSha224 = Hmac<Sha224>;
pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha384 = Hmac<Sha384>;
pub type HmacSha512 = Hmac<Sha512>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(pub PasswordString, String);
dynamic_alias!(pub DerivedKey, Vec<u8>); // KDF output handed to callers
dynamic_alias!(pub SecretBytes, Vec<u8>); // BMP password, working buffer I
