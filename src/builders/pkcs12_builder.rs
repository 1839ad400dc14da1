//! src/builders/pkcs12_builder.rs
//! PKCS#12 KDF builder: hash, purpose, iterations, salt and key length

use crate::aliases::{DerivedKey, PasswordString};
use crate::consts::{
    DEFAULT_KEY_LENGTH, DEFAULT_PKCS12_ITERATIONS, PKCS12_KEY_ID, PKCS12_MIN_ITER,
};
use crate::crypto::hash::HashAlgorithm;
use crate::crypto::kdf::pkcs12::derive_secure_pkcs12_key;
use crate::error::Pkcs12KdfError;

/// PKCS#12 key derivation builder
///
/// Defaults: SHA-1, key purpose (ID 1), [`DEFAULT_PKCS12_ITERATIONS`] iterations,
/// [`DEFAULT_KEY_LENGTH`]-byte output and an empty salt.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). Derivation borrows the builder
/// immutably, so one configured builder can serve many threads.
///
/// # Example
///
/// ```
/// use pkcs12_kdf_rs::aliases::PasswordString;
/// use pkcs12_kdf_rs::{HashAlgorithm, KeyPurpose, Pkcs12KdfBuilder};
///
/// let password = PasswordString::new("smeg".to_string());
/// let builder = Pkcs12KdfBuilder::new()
///     .with_hash(HashAlgorithm::Sha1)
///     .with_iterations(1)
///     .with_salt([0x0Au8, 0x58, 0xCF, 0x64, 0x53, 0x0D, 0x82, 0x3F]);
///
/// let key = builder.clone().with_key_len(24).derive_secure_new(&password)?;
/// let iv = builder
///     .with_purpose(KeyPurpose::Iv)
///     .with_key_len(8)
///     .derive_secure_new(&password)?;
///
/// assert_eq!(&key.expose_secret()[..4], &[0x8Au8, 0xAA, 0xE6, 0x29]);
/// assert_eq!(&iv.expose_secret()[..4], &[0x79u8, 0x99, 0x3D, 0xFE]);
/// # Ok::<(), pkcs12_kdf_rs::Pkcs12KdfError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pkcs12KdfBuilder {
    hash: HashAlgorithm,
    purpose: u8,
    iterations: u32,
    key_len: usize,
    salt: Vec<u8>,
}

impl Pkcs12KdfBuilder {
    /// Create builder with the PKCS#12 defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            hash: HashAlgorithm::default(),
            purpose: PKCS12_KEY_ID,
            iterations: DEFAULT_PKCS12_ITERATIONS,
            key_len: DEFAULT_KEY_LENGTH,
            salt: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    /// Set the purpose; accepts [`KeyPurpose`](crate::KeyPurpose) or a raw byte
    #[must_use]
    pub fn with_purpose(mut self, purpose: impl Into<u8>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// Set custom iteration count (minimum 1)
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(PKCS12_MIN_ITER);
        self
    }

    #[must_use]
    pub fn with_key_len(mut self, key_len: usize) -> Self {
        self.key_len = key_len;
        self
    }

    /// Set custom salt; accepts `Vec<u8>`, `&[u8]`, `[u8; N]`, …
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Replace the salt with `len` fresh bytes from the OS RNG
    #[cfg(feature = "rand")]
    pub fn with_random_salt(mut self, len: usize) -> Result<Self, Pkcs12KdfError> {
        self.salt = crate::crypto::rng::random_salt(len)?;
        Ok(self)
    }

    #[must_use]
    pub const fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    #[must_use]
    pub const fn purpose(&self) -> u8 {
        self.purpose
    }

    /// Current iteration count
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub const fn key_len(&self) -> usize {
        self.key_len
    }

    /// Current salt (for serialization alongside the protected data)
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Derive directly into caller-provided buffer (**preferred**)
    ///
    /// The buffer length, not [`Self::key_len`], sets the output size.
    #[inline]
    pub fn derive_secure(
        &self,
        password: &PasswordString,
        out_key: &mut [u8],
    ) -> Result<(), Pkcs12KdfError> {
        derive_secure_pkcs12_key(
            &self.hash,
            self.purpose,
            password,
            &self.salt,
            self.iterations,
            out_key,
        )
    }

    /// Convenience: derive and return a fresh [`DerivedKey`] of [`Self::key_len`] bytes
    #[inline]
    pub fn derive_secure_new(
        &self,
        password: &PasswordString,
    ) -> Result<DerivedKey, Pkcs12KdfError> {
        let mut key = DerivedKey::new(vec![0u8; self.key_len]);
        self.derive_secure(password, key.expose_secret_mut())?;
        Ok(key)
    }
}

impl Default for Pkcs12KdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}
