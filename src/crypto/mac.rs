//! src/crypto/mac.rs
//! Keystore integrity MACs keyed with PKCS#12 MAC-purpose material (ID 3).
//!
//! PKCS#12 `MacData` derives a key of `digest_size` bytes; BouncyCastle BKS
//! keystores always use HMAC-SHA1 and, for version 1, a key of only
//! `digest_size / 8` bytes. Parsing the keystores is left to the caller: these
//! functions take the exact bytes the MAC covers.

use hmac::digest::KeyInit;
use hmac::Mac;

use crate::aliases::{
    DerivedKey, HmacSha1, HmacSha224, HmacSha256, HmacSha384, HmacSha512, PasswordString,
};
use crate::consts::PKCS12_MAC_ID;
use crate::crypto::hash::{HashAlgorithm, Pkcs12Hash};
use crate::crypto::kdf::pkcs12::derive_pkcs12_key;
use crate::Pkcs12KdfError;

/// Derive a MAC key of `key_len` bytes (purpose byte 3).
pub fn derive_mac_key(
    algorithm: HashAlgorithm,
    password: &PasswordString,
    salt: &[u8],
    iterations: u32,
    key_len: usize,
) -> Result<DerivedKey, Pkcs12KdfError> {
    derive_pkcs12_key(
        &algorithm,
        PKCS12_MAC_ID,
        password,
        salt,
        iterations,
        key_len,
    )
}

/// Compute the PKCS#12 integrity MAC: HMAC-`algorithm` over `data`, keyed with
/// a `digest_size`-byte MAC key derived from the password.
pub fn compute_pkcs12_mac(
    algorithm: HashAlgorithm,
    password: &PasswordString,
    salt: &[u8],
    iterations: u32,
    data: &[u8],
) -> Result<Vec<u8>, Pkcs12KdfError> {
    let key = derive_mac_key(
        algorithm,
        password,
        salt,
        iterations,
        algorithm.digest_size(),
    )?;
    hmac_for(algorithm, key.expose_secret(), data)
}

/// Verify a PKCS#12 integrity MAC in constant time.
///
/// # Errors
///
/// - [`Pkcs12KdfError::MacMismatch`] - wrong password, tampered data or wrong MAC
/// - any error of [`derive_mac_key`]
pub fn verify_pkcs12_mac(
    algorithm: HashAlgorithm,
    password: &PasswordString,
    salt: &[u8],
    iterations: u32,
    data: &[u8],
    expected: &[u8],
) -> Result<(), Pkcs12KdfError> {
    let key = derive_mac_key(
        algorithm,
        password,
        salt,
        iterations,
        algorithm.digest_size(),
    )?;
    hmac_verify_for(algorithm, key.expose_secret(), data, expected)
}

/// MAC key length used by a BKS keystore of the given version.
///
/// Version 1 passes the SHA-1 digest size in bits where bytes were meant,
/// leaving a 2-byte key; version 2 uses the full 20 bytes.
pub fn bks_mac_key_len(version: u32) -> Result<usize, Pkcs12KdfError> {
    let digest_size = HashAlgorithm::Sha1.digest_size();
    match version {
        1 => Ok(digest_size / 8),
        2 => Ok(digest_size),
        other => Err(Pkcs12KdfError::UnsupportedVersion(other)),
    }
}

/// Compute the HMAC-SHA1 trailer of a BKS keystore body.
pub fn compute_bks_mac(
    version: u32,
    password: &PasswordString,
    salt: &[u8],
    iterations: u32,
    data: &[u8],
) -> Result<Vec<u8>, Pkcs12KdfError> {
    let key = derive_mac_key(
        HashAlgorithm::Sha1,
        password,
        salt,
        iterations,
        bks_mac_key_len(version)?,
    )?;
    hmac_for(HashAlgorithm::Sha1, key.expose_secret(), data)
}

/// Verify the HMAC-SHA1 trailer of a BKS keystore body in constant time.
pub fn verify_bks_mac(
    version: u32,
    password: &PasswordString,
    salt: &[u8],
    iterations: u32,
    data: &[u8],
    expected: &[u8],
) -> Result<(), Pkcs12KdfError> {
    let key = derive_mac_key(
        HashAlgorithm::Sha1,
        password,
        salt,
        iterations,
        bks_mac_key_len(version)?,
    )?;
    hmac_verify_for(HashAlgorithm::Sha1, key.expose_secret(), data, expected)
}

fn hmac_for(algorithm: HashAlgorithm, key: &[u8], data: &[u8]) -> Result<Vec<u8>, Pkcs12KdfError> {
    match algorithm {
        HashAlgorithm::Sha1 => compute_hmac::<HmacSha1>(key, data),
        HashAlgorithm::Sha224 => compute_hmac::<HmacSha224>(key, data),
        HashAlgorithm::Sha256 => compute_hmac::<HmacSha256>(key, data),
        HashAlgorithm::Sha384 => compute_hmac::<HmacSha384>(key, data),
        HashAlgorithm::Sha512 => compute_hmac::<HmacSha512>(key, data),
    }
}

fn hmac_verify_for(
    algorithm: HashAlgorithm,
    key: &[u8],
    data: &[u8],
    expected: &[u8],
) -> Result<(), Pkcs12KdfError> {
    match algorithm {
        HashAlgorithm::Sha1 => verify_hmac::<HmacSha1>(key, data, expected),
        HashAlgorithm::Sha224 => verify_hmac::<HmacSha224>(key, data, expected),
        HashAlgorithm::Sha256 => verify_hmac::<HmacSha256>(key, data, expected),
        HashAlgorithm::Sha384 => verify_hmac::<HmacSha384>(key, data, expected),
        HashAlgorithm::Sha512 => verify_hmac::<HmacSha512>(key, data, expected),
    }
}

fn keyed<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> Result<M, Pkcs12KdfError> {
    let mut mac = <M as Mac>::new_from_slice(key)
        .map_err(|e| Pkcs12KdfError::Crypto(format!("HMAC init failed: {e}")))?;
    mac.update(data);
    Ok(mac)
}

fn compute_hmac<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> Result<Vec<u8>, Pkcs12KdfError> {
    Ok(keyed::<M>(key, data)?.finalize().into_bytes().to_vec())
}

fn verify_hmac<M: Mac + KeyInit>(
    key: &[u8],
    data: &[u8],
    expected: &[u8],
) -> Result<(), Pkcs12KdfError> {
    keyed::<M>(key, data)?
        .verify_slice(expected)
        .map_err(|_| Pkcs12KdfError::MacMismatch)
}
