//! # Key Derivation Functions (KDF)
//!
//! - [`pkcs12`] - PKCS#12 password-based KDF (RFC 7292 Appendix B)
//!
//! Most callers go through [`Pkcs12KdfBuilder`](crate::Pkcs12KdfBuilder) or the
//! crate-root re-exports; this module holds the primitive itself.

pub mod pkcs12;
