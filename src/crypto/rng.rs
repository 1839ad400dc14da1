// src/crypto/rng.rs
//! OS-backed randomness for fresh PKCS#12 salts.

use rand::{rngs::OsRng, TryRngCore};
use std::cell::RefCell;

use crate::Pkcs12KdfError;

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

/// Generate `len` random salt bytes from the operating system RNG.
///
/// # Errors
///
/// - [`Pkcs12KdfError::Crypto`] - the OS RNG is unavailable
pub fn random_salt(len: usize) -> Result<Vec<u8>, Pkcs12KdfError> {
    RNG.with(|rng_cell| {
        let mut salt = vec![0u8; len];
        rng_cell
            .borrow_mut()
            .try_fill_bytes(&mut salt)
            .map_err(|e| Pkcs12KdfError::Crypto(format!("OS RNG failed: {e}")))?;
        Ok(salt)
    })
}
