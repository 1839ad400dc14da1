//! tests/common.rs
//! Common constants and utilities shared across test files

use pkcs12_kdf_rs::aliases::PasswordString;

/// Fast iteration count for tests - performance testing is in benches/
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATIONS: u32 = 5;

/// Password, salt and iteration count of the BKS keystore the golden vector comes from.
#[allow(dead_code)] // Used across multiple test files
pub const KEYSTORE_PASSWORD: &str = "SwitchBeePrivate";

#[allow(dead_code)] // Used across multiple test files
pub const KEYSTORE_SALT: [u8; 20] = [
    93, 134, 207, 244, 205, 79, 213, 134, 152, 5, 112, 148, 135, 93, 240, 101, 233, 195, 184, 42,
];

#[allow(dead_code)] // Used across multiple test files
pub const KEYSTORE_ITERATIONS: u32 = 1026;

/// 20-byte SHA-1 MAC key (purpose 3) for the keystore parameters above.
#[allow(dead_code)] // Used across multiple test files
pub const KEYSTORE_MAC_KEY: [u8; 20] = [
    0x3e, 0x0d, 0xa7, 0x79, 0x1f, 0x9c, 0xbd, 0x9e, 0x73, 0x63, 0xf7, 0x7e, 0x04, 0x75, 0xe7,
    0xe5, 0x68, 0x67, 0xeb, 0x8e,
];

#[allow(dead_code)] // Used across multiple test files
pub const TEST_SALT: &[u8] = b"saltsalt";

#[allow(dead_code)] // Used across multiple test files
pub fn password(value: &str) -> PasswordString {
    PasswordString::new(value.to_string())
}
