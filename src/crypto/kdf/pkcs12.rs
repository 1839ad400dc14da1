//! src/crypto/kdf/pkcs12.rs
//! PKCS#12 KDF (RFC 7292 Appendix B): out-param core plus owned-key convenience

use crate::aliases::{DerivedKey, PasswordString, SecretBytes};
use crate::consts::{PKCS12_IV_ID, PKCS12_KEY_ID, PKCS12_MAC_ID};
use crate::crypto::hash::Pkcs12Hash;
use crate::utils::{block_multiple_len, extend_to_block_multiple, password_to_bmp};
use crate::Pkcs12KdfError;

/// What the derived bytes will be used for (RFC 7292 Appendix B.3).
///
/// The purpose is only a fill value for the diversifier block; the KDF also
/// accepts arbitrary purpose bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPurpose {
    /// Cipher key material (ID 1).
    Key,
    /// Initialization vector (ID 2).
    Iv,
    /// Integrity / MAC key (ID 3).
    Mac,
}

impl KeyPurpose {
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Key => PKCS12_KEY_ID,
            Self::Iv => PKCS12_IV_ID,
            Self::Mac => PKCS12_MAC_ID,
        }
    }
}

impl From<KeyPurpose> for u8 {
    fn from(purpose: KeyPurpose) -> Self {
        purpose.as_byte()
    }
}

/// Derive PKCS#12 key material directly into a caller-provided buffer.
///
/// `out_key.len()` is the desired key size; an empty buffer returns immediately.
/// The password is encoded as a big-endian `BMPString` with a NUL terminator
/// (empty password → empty encoding), which is the only encoding RFC 7292 defines.
///
/// # Errors
///
/// - [`Pkcs12KdfError::InvalidArgument`] - `iterations == 0`, the hash reports a zero
///   digest or block size, or it returns a digest of a length other than `digest_size()`
/// - [`Pkcs12KdfError::ArithmeticOverflow`] - salt or password too large to expand
pub fn derive_secure_pkcs12_key<H>(
    hash: &H,
    purpose: u8,
    password: &PasswordString,
    salt: &[u8],
    iterations: u32,
    out_key: &mut [u8],
) -> Result<(), Pkcs12KdfError>
where
    H: Pkcs12Hash + ?Sized,
{
    let u = hash.digest_size();
    let v = hash.block_size();
    if u == 0 || v == 0 {
        return Err(Pkcs12KdfError::InvalidArgument(format!(
            "hash must have non-zero digest and block sizes (u={u}, v={v})"
        )));
    }
    if iterations == 0 {
        return Err(Pkcs12KdfError::InvalidArgument(
            "PKCS#12 KDF iterations must be ≥1".into(),
        ));
    }
    if out_key.is_empty() {
        return Ok(());
    }

    let password_bmp = SecretBytes::new(password_to_bmp(password.expose_secret()));
    let diversifier = vec![purpose; v];

    let mut working = working_buffer(salt, password_bmp.expose_secret(), v)?;
    let i_block = working.expose_secret_mut();

    let blocks = out_key.len().div_ceil(u);
    tracing::debug!(
        digest_size = u,
        block_size = v,
        purpose,
        iterations,
        key_len = out_key.len(),
        blocks,
        "deriving PKCS#12 key material"
    );

    let mut addend = SecretBytes::new(vec![0u8; v]);
    for (index, out_block) in out_key.chunks_mut(u).enumerate() {
        let hashed = hash.digest_iterated(&diversifier, i_block.as_slice(), iterations);
        let a = hashed.expose_secret();
        if a.len() != u {
            return Err(Pkcs12KdfError::InvalidArgument(format!(
                "hash returned {} bytes but reports a digest size of {u}",
                a.len()
            )));
        }

        out_block.copy_from_slice(&a[..out_block.len()]);
        tracing::trace!(block = index + 1, blocks, "PKCS#12 output block ready");

        // The final adjustment would never be observed.
        if index + 1 == blocks {
            break;
        }

        let b = addend.expose_secret_mut();
        for (n, byte) in b.iter_mut().enumerate() {
            *byte = a[n % u];
        }
        for offset in (0..i_block.len()).step_by(v) {
            adjust_block(i_block.as_mut_slice(), offset, v, b.as_slice())?;
        }
    }

    Ok(())
}

/// Builds `I = S || P` in a single secret allocation.
///
/// The capacity is reserved up front so neither expansion reallocates and leaves
/// a stale copy of the password behind.
fn working_buffer(
    salt: &[u8],
    password_bmp: &[u8],
    v: usize,
) -> Result<SecretBytes, Pkcs12KdfError> {
    let s_len = block_multiple_len(salt.len(), v)?;
    let p_len = block_multiple_len(password_bmp.len(), v)?;
    let total = s_len.checked_add(p_len).ok_or_else(|| {
        Pkcs12KdfError::ArithmeticOverflow(format!("working buffer {s_len}+{p_len} bytes"))
    })?;

    let mut working = SecretBytes::new(Vec::with_capacity(total));
    let i_block = working.expose_secret_mut();
    extend_to_block_multiple(i_block, salt, v)?;
    extend_to_block_multiple(i_block, password_bmp, v)?;
    Ok(working)
}

/// Derive PKCS#12 key material of `key_len` bytes into a fresh [`DerivedKey`].
///
/// See [`derive_secure_pkcs12_key`] for the algorithm and error conditions.
pub fn derive_pkcs12_key<H>(
    hash: &H,
    purpose: u8,
    password: &PasswordString,
    salt: &[u8],
    iterations: u32,
    key_len: usize,
) -> Result<DerivedKey, Pkcs12KdfError>
where
    H: Pkcs12Hash + ?Sized,
{
    let mut key = DerivedKey::new(vec![0u8; key_len]);
    derive_secure_pkcs12_key(
        hash,
        purpose,
        password,
        salt,
        iterations,
        key.expose_secret_mut(),
    )?;
    Ok(key)
}

/// Sets `buffer[offset..offset + width]` to `(block + addend + 1) mod 2^(8 * width)`,
/// treating both operands as big-endian unsigned integers.
///
/// Carry out of the most-significant byte is discarded; bytes outside the window
/// are never touched.
///
/// # Errors
///
/// - [`Pkcs12KdfError::ArithmeticOverflow`] - `offset + width` overflows `usize`
/// - [`Pkcs12KdfError::InvalidArgument`] - the window exceeds `buffer`, or
///   `addend.len() != width`
#[inline]
pub fn adjust_block(
    buffer: &mut [u8],
    offset: usize,
    width: usize,
    addend: &[u8],
) -> Result<(), Pkcs12KdfError> {
    if addend.len() != width {
        return Err(Pkcs12KdfError::InvalidArgument(format!(
            "addend is {} bytes, block width is {width}",
            addend.len()
        )));
    }
    let end = offset.checked_add(width).ok_or_else(|| {
        Pkcs12KdfError::ArithmeticOverflow(format!("block window {offset}+{width}"))
    })?;
    let buffer_len = buffer.len();
    let block = buffer.get_mut(offset..end).ok_or_else(|| {
        Pkcs12KdfError::InvalidArgument(format!(
            "block window {offset}..{end} exceeds buffer of {buffer_len} bytes"
        ))
    })?;

    // Max per-byte sum is 0xFF + 0xFF + 1 = 0x1FF.
    let mut carry: u16 = 1;
    for (dst, &add) in block.iter_mut().rev().zip(addend.iter().rev()) {
        let sum = u16::from(*dst) + u16::from(add) + carry;
        *dst = (sum & 0xFF) as u8;
        carry = sum >> 8;
    }

    Ok(())
}
