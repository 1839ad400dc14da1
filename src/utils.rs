// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::consts::BMP_TERMINATOR_LEN;
use crate::error::Pkcs12KdfError;

/// Encodes a password as a PKCS#12 `BMPString`: big-endian UTF-16 code units
/// followed by two NUL bytes.
///
/// The empty password encodes to an empty byte sequence, not to a lone terminator.
/// Characters outside the BMP are written as surrogate pairs.
#[inline]
pub fn password_to_bmp(password: &str) -> Vec<u8> {
    if password.is_empty() {
        return Vec::new();
    }

    let mut output = Vec::with_capacity(password.len() * 2 + BMP_TERMINATOR_LEN);
    for code_unit in password.encode_utf16() {
        output.extend_from_slice(&code_unit.to_be_bytes());
    }
    output.extend_from_slice(&[0u8; BMP_TERMINATOR_LEN]);

    output
}

/// Length of `data_len` bytes padded up to the next multiple of `block_size`.
///
/// # Errors
///
/// - [`Pkcs12KdfError::InvalidArgument`] - `block_size` is zero
/// - [`Pkcs12KdfError::ArithmeticOverflow`] - the padded length does not fit in `usize`
pub fn block_multiple_len(data_len: usize, block_size: usize) -> Result<usize, Pkcs12KdfError> {
    if block_size == 0 {
        return Err(Pkcs12KdfError::InvalidArgument(
            "block size must be non-zero".into(),
        ));
    }

    data_len
        .div_ceil(block_size)
        .checked_mul(block_size)
        .ok_or_else(|| {
            Pkcs12KdfError::ArithmeticOverflow(format!(
                "expanding {data_len} bytes to a multiple of {block_size}"
            ))
        })
}

/// Appends `data` to `dst`, repeated cyclically up to the next multiple of
/// `block_size` bytes.
///
/// Nothing is appended for empty input. Callers holding secrets should reserve
/// the capacity first so `dst` never reallocates.
///
/// # Errors
///
/// Same as [`block_multiple_len`]; `dst` is left untouched on error.
pub fn extend_to_block_multiple(
    dst: &mut Vec<u8>,
    data: &[u8],
    block_size: usize,
) -> Result<(), Pkcs12KdfError> {
    let len = block_multiple_len(data.len(), block_size)?;
    dst.extend(data.iter().copied().cycle().take(len));
    Ok(())
}

/// Repeats `data` cyclically up to the next multiple of `block_size` bytes.
///
/// Empty input yields empty output. `block_size` must be non-zero.
///
/// # Errors
///
/// Same as [`block_multiple_len`].
pub fn expand_to_block_multiple(data: &[u8], block_size: usize) -> Result<Vec<u8>, Pkcs12KdfError> {
    let mut output = Vec::with_capacity(block_multiple_len(data.len(), block_size)?);
    extend_to_block_multiple(&mut output, data, block_size)?;
    Ok(output)
}
