//! tests/kdf_tests.rs
//! PKCS#12 KDF contract tests

mod common;

use common::{password, TEST_ITERATIONS, TEST_SALT};
use pkcs12_kdf_rs::consts::{PKCS12_IV_ID, PKCS12_KEY_ID, PKCS12_MAC_ID};
use pkcs12_kdf_rs::{
    derive_pkcs12_key, derive_secure_pkcs12_key, HashAlgorithm, Pkcs12Hash, Pkcs12KdfError,
};

/// Hash that reports whatever sizes it is told to, for degenerate-input tests.
struct FakeHash {
    digest_size: usize,
    block_size: usize,
    output_len: usize,
}

impl Pkcs12Hash for FakeHash {
    fn digest_size(&self) -> usize {
        self.digest_size
    }

    fn block_size(&self) -> usize {
        self.block_size
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        let seed = data.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
        vec![seed; self.output_len]
    }
}

#[test]
fn output_length_matches_request() {
    let pw = password("correct horse battery staple");

    for alg in HashAlgorithm::ALL {
        for key_len in [0, 1, 7, 19, 20, 21, 32, 63, 64, 65, 129, 200] {
            let key =
                derive_pkcs12_key(&alg, PKCS12_KEY_ID, &pw, TEST_SALT, TEST_ITERATIONS, key_len)
                    .unwrap();
            assert_eq!(key.expose_secret().len(), key_len, "{alg} {key_len}");
        }
    }
}

#[test]
fn derivation_is_deterministic() {
    let pw = password("パスワード123!@#");

    for alg in HashAlgorithm::ALL {
        let first = derive_pkcs12_key(&alg, PKCS12_IV_ID, &pw, TEST_SALT, TEST_ITERATIONS, 50)
            .unwrap();
        let second = derive_pkcs12_key(&alg, PKCS12_IV_ID, &pw, TEST_SALT, TEST_ITERATIONS, 50)
            .unwrap();
        assert_eq!(first.expose_secret(), second.expose_secret(), "{alg}");
    }
}

#[test]
fn shorter_output_is_prefix_of_longer() {
    let pw = password("prefix");

    for alg in HashAlgorithm::ALL {
        let long = derive_pkcs12_key(&alg, PKCS12_KEY_ID, &pw, TEST_SALT, TEST_ITERATIONS, 300)
            .unwrap();

        for n in [0, 1, 20, 28, 32, 33, 48, 64, 65, 129, 299] {
            let short = derive_pkcs12_key(&alg, PKCS12_KEY_ID, &pw, TEST_SALT, TEST_ITERATIONS, n)
                .unwrap();
            assert_eq!(
                short.expose_secret().as_slice(),
                &long.expose_secret()[..n],
                "{alg} prefix {n}"
            );
        }
    }
}

#[test]
fn out_param_and_owned_variants_agree() {
    let pw = password("hunter2");

    let owned =
        derive_pkcs12_key(&HashAlgorithm::Sha256, PKCS12_MAC_ID, &pw, TEST_SALT, 3, 45).unwrap();

    let mut buffer = [0u8; 45];
    derive_secure_pkcs12_key(
        &HashAlgorithm::Sha256,
        PKCS12_MAC_ID,
        &pw,
        TEST_SALT,
        3,
        &mut buffer,
    )
    .unwrap();

    assert_eq!(owned.expose_secret().as_slice(), &buffer);
}

#[test]
fn purpose_iterations_and_salt_change_output() {
    let pw = password("testpassword");
    let derive = |purpose: u8, salt: &[u8], iterations: u32| {
        derive_pkcs12_key(&HashAlgorithm::Sha1, purpose, &pw, salt, iterations, 20)
            .unwrap()
            .expose_secret()
            .clone()
    };

    let base = derive(PKCS12_KEY_ID, TEST_SALT, 1);
    assert_ne!(base, derive(PKCS12_IV_ID, TEST_SALT, 1));
    assert_ne!(base, derive(PKCS12_MAC_ID, TEST_SALT, 1));
    assert_ne!(base, derive(PKCS12_KEY_ID, TEST_SALT, 2));
    assert_ne!(base, derive(PKCS12_KEY_ID, b"pepperpe", 1));
    assert_ne!(base, derive(PKCS12_KEY_ID, &[], 1));
}

#[test]
fn empty_inputs_are_well_defined() {
    // Empty salt and password leave the working buffer empty.
    for alg in HashAlgorithm::ALL {
        let u = alg.digest_size();
        let key =
            derive_pkcs12_key(&alg, PKCS12_KEY_ID, &password(""), &[], 3, 2 * u + 1).unwrap();
        let bytes = key.expose_secret();

        // With nothing to adjust, every block repeats the first.
        assert_eq!(&bytes[..u], &bytes[u..2 * u], "{alg}");
        assert_eq!(bytes[2 * u], bytes[0], "{alg}");
    }
}

#[test]
fn zero_length_request_returns_empty() {
    let key = derive_pkcs12_key(
        &HashAlgorithm::Sha512,
        PKCS12_KEY_ID,
        &password("unused"),
        TEST_SALT,
        1,
        0,
    )
    .unwrap();
    assert!(key.expose_secret().is_empty());
}

#[test]
fn zero_iterations_error() {
    let result = derive_pkcs12_key(
        &HashAlgorithm::Sha1,
        PKCS12_KEY_ID,
        &password("test"),
        TEST_SALT,
        0,
        20,
    );

    match result.err() {
        Some(Pkcs12KdfError::InvalidArgument(msg)) => {
            assert!(
                msg.contains("iterations must be ≥1"),
                "Error message should mention iterations requirement"
            );
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn zero_iterations_rejected_even_for_empty_output() {
    let mut out = [0u8; 0];
    let result = derive_secure_pkcs12_key(
        &HashAlgorithm::Sha1,
        PKCS12_KEY_ID,
        &password("test"),
        TEST_SALT,
        0,
        &mut out,
    );
    assert!(matches!(result, Err(Pkcs12KdfError::InvalidArgument(_))));
}

#[test]
fn degenerate_hash_sizes_error() {
    let cases = [(0, 64), (20, 0), (0, 0)];

    for (digest_size, block_size) in cases {
        let hash = FakeHash {
            digest_size,
            block_size,
            output_len: digest_size,
        };
        let result = derive_pkcs12_key(&hash, PKCS12_KEY_ID, &password("pw"), TEST_SALT, 1, 16);
        assert!(
            matches!(result.err(), Some(Pkcs12KdfError::InvalidArgument(_))),
            "u={digest_size} v={block_size} should be rejected"
        );
    }
}

#[test]
fn hash_returning_wrong_length_errors() {
    let hash = FakeHash {
        digest_size: 20,
        block_size: 64,
        output_len: 19,
    };
    let result = derive_pkcs12_key(&hash, PKCS12_KEY_ID, &password("pw"), TEST_SALT, 2, 16);
    assert!(matches!(
        result.err(),
        Some(Pkcs12KdfError::InvalidArgument(_))
    ));
}

#[test]
fn custom_hash_primitive_is_accepted() {
    // Digest and block sizes that match no standard hash.
    let hash = FakeHash {
        digest_size: 3,
        block_size: 5,
        output_len: 3,
    };
    let key = derive_pkcs12_key(&hash, PKCS12_KEY_ID, &password("pw"), b"s", 2, 10).unwrap();
    assert_eq!(key.expose_secret().len(), 10);

    let dyn_hash: &dyn Pkcs12Hash = &hash;
    let again = derive_pkcs12_key(dyn_hash, PKCS12_KEY_ID, &password("pw"), b"s", 2, 10).unwrap();
    assert_eq!(key.expose_secret(), again.expose_secret());
}

#[test]
fn large_and_unicode_passwords() {
    let large_password = (0..1000).map(|_| "a").collect::<String>();
    let cases = [
        ("", "empty password"),
        ("é€😀", "non-BMP password"),
        (large_password.as_str(), "large password"),
    ];

    for (pw, desc) in cases {
        let key = derive_pkcs12_key(
            &HashAlgorithm::Sha256,
            PKCS12_KEY_ID,
            &password(pw),
            TEST_SALT,
            2,
            40,
        )
        .unwrap();
        assert_eq!(key.expose_secret().len(), 40, "{desc} failed");
    }
}

#[test]
fn concurrent_derivations_match_sequential() {
    let expected = derive_pkcs12_key(
        &HashAlgorithm::Sha256,
        PKCS12_KEY_ID,
        &password("shared"),
        TEST_SALT,
        TEST_ITERATIONS,
        64,
    )
    .unwrap()
    .expose_secret()
    .clone();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    derive_pkcs12_key(
                        &HashAlgorithm::Sha256,
                        PKCS12_KEY_ID,
                        &password("shared"),
                        TEST_SALT,
                        TEST_ITERATIONS,
                        64,
                    )
                    .unwrap()
                    .expose_secret()
                    .clone()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
