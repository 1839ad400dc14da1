//! src/crypto/hash.rs
//! Hash primitives the PKCS#12 KDF is parameterised over.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use digest::core_api::BlockSizeUser;
use digest::{Digest, FixedOutputReset, Output};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::aliases::SecretBytes;
use crate::error::Pkcs12KdfError;

/// A hash function as seen by the PKCS#12 KDF: digest size `u`, block size `v`
/// and a one-shot digest.
///
/// Implementations must be pure. `digest` must always return exactly
/// `digest_size()` bytes.
pub trait Pkcs12Hash {
    /// Output length `u` in bytes.
    fn digest_size(&self) -> usize;

    /// Internal block width `v` in bytes.
    fn block_size(&self) -> usize;

    /// One-shot digest of `data`.
    fn digest(&self, data: &[u8]) -> Vec<u8>;

    /// Computes `H(prefix || data)` and then re-hashes the result until the
    /// hash has been applied `iterations` times in total. An `iterations` of 0
    /// is treated as 1.
    ///
    /// The provided implementation concatenates and calls [`Pkcs12Hash::digest`];
    /// incremental hashers override it to avoid the copies. The concatenated input
    /// and every link of the chain are held in [`SecretBytes`].
    fn digest_iterated(&self, prefix: &[u8], data: &[u8], iterations: u32) -> SecretBytes {
        let mut input = SecretBytes::new(Vec::with_capacity(prefix.len() + data.len()));
        input.expose_secret_mut().extend_from_slice(prefix);
        input.expose_secret_mut().extend_from_slice(data);

        let mut hash = SecretBytes::new(self.digest(input.expose_secret()));
        for _ in 1..iterations {
            hash = SecretBytes::new(self.digest(hash.expose_secret()));
        }
        hash
    }
}

impl<H: Pkcs12Hash + ?Sized> Pkcs12Hash for &H {
    fn digest_size(&self) -> usize {
        (**self).digest_size()
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        (**self).digest(data)
    }

    fn digest_iterated(&self, prefix: &[u8], data: &[u8], iterations: u32) -> SecretBytes {
        (**self).digest_iterated(prefix, data, iterations)
    }
}

/// Adapter exposing any RustCrypto hasher as a [`Pkcs12Hash`].
///
/// The iterated chain reuses one hasher through `finalize_reset`.
pub struct DigestHash<D>(PhantomData<fn() -> D>);

impl<D> DigestHash<D> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<D> Default for DigestHash<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for DigestHash<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DigestHash<D> {}

impl<D> fmt::Debug for DigestHash<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DigestHash")
            .field(&std::any::type_name::<D>())
            .finish()
    }
}

impl<D> Pkcs12Hash for DigestHash<D>
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    #[inline]
    fn digest_size(&self) -> usize {
        <D as Digest>::output_size()
    }

    #[inline]
    fn block_size(&self) -> usize {
        <D as BlockSizeUser>::block_size()
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        <D as Digest>::digest(data).to_vec()
    }

    fn digest_iterated(&self, prefix: &[u8], data: &[u8], iterations: u32) -> SecretBytes {
        let mut hasher = <D as Digest>::new();
        Digest::update(&mut hasher, prefix);
        Digest::update(&mut hasher, data);

        // Each link is finalized straight into the secret buffer.
        let mut hash = SecretBytes::new(vec![0u8; <D as Digest>::output_size()]);
        Digest::finalize_into_reset(
            &mut hasher,
            Output::<D>::from_mut_slice(hash.expose_secret_mut()),
        );

        for _ in 1..iterations {
            Digest::update(&mut hasher, hash.expose_secret());
            Digest::finalize_into_reset(
                &mut hasher,
                Output::<D>::from_mut_slice(hash.expose_secret_mut()),
            );
        }

        hash
    }
}

/// The hash functions PKCS#12 and BKS keystores are written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// SHA-1 (u = 20, v = 64), the PKCS#12 and BKS default.
    #[default]
    Sha1,
    /// SHA-224 (u = 28, v = 64).
    Sha224,
    /// SHA-256 (u = 32, v = 64).
    Sha256,
    /// SHA-384 (u = 48, v = 128).
    Sha384,
    /// SHA-512 (u = 64, v = 128).
    Sha512,
}

impl HashAlgorithm {
    /// Every supported algorithm, weakest first.
    pub const ALL: [Self; 5] = [
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// Canonical name, e.g. `"SHA-256"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }
}

impl Pkcs12Hash for HashAlgorithm {
    fn digest_size(&self) -> usize {
        match self {
            Self::Sha1 => DigestHash::<Sha1>::new().digest_size(),
            Self::Sha224 => DigestHash::<Sha224>::new().digest_size(),
            Self::Sha256 => DigestHash::<Sha256>::new().digest_size(),
            Self::Sha384 => DigestHash::<Sha384>::new().digest_size(),
            Self::Sha512 => DigestHash::<Sha512>::new().digest_size(),
        }
    }

    fn block_size(&self) -> usize {
        match self {
            Self::Sha1 => DigestHash::<Sha1>::new().block_size(),
            Self::Sha224 => DigestHash::<Sha224>::new().block_size(),
            Self::Sha256 => DigestHash::<Sha256>::new().block_size(),
            Self::Sha384 => DigestHash::<Sha384>::new().block_size(),
            Self::Sha512 => DigestHash::<Sha512>::new().block_size(),
        }
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha1 => DigestHash::<Sha1>::new().digest(data),
            Self::Sha224 => DigestHash::<Sha224>::new().digest(data),
            Self::Sha256 => DigestHash::<Sha256>::new().digest(data),
            Self::Sha384 => DigestHash::<Sha384>::new().digest(data),
            Self::Sha512 => DigestHash::<Sha512>::new().digest(data),
        }
    }

    fn digest_iterated(&self, prefix: &[u8], data: &[u8], iterations: u32) -> SecretBytes {
        match self {
            Self::Sha1 => DigestHash::<Sha1>::new().digest_iterated(prefix, data, iterations),
            Self::Sha224 => DigestHash::<Sha224>::new().digest_iterated(prefix, data, iterations),
            Self::Sha256 => DigestHash::<Sha256>::new().digest_iterated(prefix, data, iterations),
            Self::Sha384 => DigestHash::<Sha384>::new().digest_iterated(prefix, data, iterations),
            Self::Sha512 => DigestHash::<Sha512>::new().digest_iterated(prefix, data, iterations),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Pkcs12KdfError;

    /// Accepts `sha1`, `SHA-1`, `sha-256`, `SHA256`, … (case-insensitive, dash optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(Pkcs12KdfError::InvalidArgument(format!(
                "unknown hash algorithm: {s}"
            ))),
        }
    }
}
