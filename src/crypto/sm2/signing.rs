// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SM2 signature generation: `sign`/`signRaw` hash the message (with or
//! without the `Z_A` preamble) and delegate to `sign_digest`, the signing
//! loop over §4.E's equations.

use crate::bigint::Sign;
use crate::bigint::BigInt;
use crate::crypto::sm2::error::{GenerateScalarError, SigningError};
use crate::crypto::sm2::key::KeyPair;
use crate::crypto::sm2::keygen::generate_scalar_in_range;
use crate::crypto::sm2::rng::{OsRandomSource, RandomSource};
use crate::crypto::sm2::za::DEFAULT_USER_ID;
use crate::crypto::sm3::sm3;
use crate::math::modular::{invert, modulo};

/// A SM2 signature, the pair `(r, s)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    pub r: BigInt,
    pub s: BigInt,
}

impl Signature {
    /// Left-pads `r` and `s` to 32 bytes each and concatenates them.
    pub fn to_fixed_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        write_fixed(&self.r, &mut out[0..32]);
        write_fixed(&self.s, &mut out[32..64]);
        out
    }

    pub fn from_fixed_bytes(bytes: &[u8; 64]) -> Signature {
        Signature {
            r: BigInt::from_be_bytes(&bytes[0..32], Sign::Positive),
            s: BigInt::from_be_bytes(&bytes[32..64], Sign::Positive),
        }
    }
}

fn write_fixed(n: &BigInt, out: &mut [u8]) {
    let bytes = n.to_be_bytes();
    debug_assert!(bytes.len() <= out.len());
    out[out.len() - bytes.len()..].copy_from_slice(&bytes);
}

/// Draws are expected to succeed within a handful of iterations; this
/// bounds the loop against a broken RNG rather than bad luck.
const MAX_SIGNING_ATTEMPTS: u32 = 32;

/// Signs the message-digest `e` (a 256-bit big-endian integer) with `key_pair`'s
/// private key, per §4.E's loop, drawing the nonce `k` from `rng`.
pub fn sign_digest_with_rng(
    e: &BigInt,
    key_pair: &KeyPair,
    rng: &dyn RandomSource,
) -> Result<Signature, SigningError> {
    let params = key_pair.curve_params();
    let pri = key_pair.pri_scalar().ok_or(SigningError::MissingPrivateKey)?;

    let n = &params.base_point_order;
    let one = BigInt::from(1);
    let one_plus_pri_inv = invert(&(&one + pri), n).ok_or(SigningError::InvalidPrivateKey)?;

    for _ in 0..MAX_SIGNING_ATTEMPTS {
        let k = generate_scalar_in_range(&(n - &one), rng)
            .map_err(|_: GenerateScalarError| SigningError::SigningAttemptsExceeded)?;

        let kg = params.curve.mul_point(&params.base_point, &k);
        let r = modulo(&(e + &kg.x), n);
        if r.is_zero() {
            continue;
        }
        let r_plus_k = &r + &k;
        if &r_plus_k == n {
            continue;
        }

        let s = modulo(&(&one_plus_pri_inv * &(&k - &(&r * pri))), n);
        if s.is_zero() {
            continue;
        }

        return Ok(Signature { r, s });
    }

    Err(SigningError::SigningAttemptsExceeded)
}

/// Signs `e` using the default OS random source.
pub fn sign_digest(e: &BigInt, key_pair: &KeyPair) -> Result<Signature, SigningError> {
    sign_digest_with_rng(e, key_pair, &OsRandomSource)
}

/// Hashes `msg` with the `Z_A` preamble under `id`, then signs the digest,
/// drawing the nonce from `rng`.
pub fn sign_with_id_with_rng(
    msg: &[u8],
    id: &str,
    key_pair: &KeyPair,
    rng: &dyn RandomSource,
) -> Result<Signature, SigningError> {
    let z_a = key_pair.za(id).ok_or(SigningError::MissingPrivateKey)?;
    let mut data = Vec::with_capacity(z_a.len() + msg.len());
    data.extend_from_slice(&z_a);
    data.extend_from_slice(msg);
    let e = BigInt::from_be_bytes(&sm3(&data), Sign::Positive);
    sign_digest_with_rng(&e, key_pair, rng)
}

/// Hashes `msg` with the `Z_A` preamble under `id`, then signs the digest.
pub fn sign_with_id(msg: &[u8], id: &str, key_pair: &KeyPair) -> Result<Signature, SigningError> {
    sign_with_id_with_rng(msg, id, key_pair, &OsRandomSource)
}

/// `sign(msg)`: hashes `msg` with the `Z_A` preamble under the standard
/// sample identifier, then signs the digest.
pub fn sign(msg: &[u8], key_pair: &KeyPair) -> Result<Signature, SigningError> {
    sign_with_id(msg, DEFAULT_USER_ID, key_pair)
}

/// `signRaw(msg)`: hashes `msg` directly, without the `Z_A` preamble, drawing
/// the nonce from `rng`.
pub fn sign_raw_with_rng(
    msg: &[u8],
    key_pair: &KeyPair,
    rng: &dyn RandomSource,
) -> Result<Signature, SigningError> {
    let e = BigInt::from_be_bytes(&sm3(msg), Sign::Positive);
    sign_digest_with_rng(&e, key_pair, rng)
}

/// `signRaw(msg)`: hashes `msg` directly, without the `Z_A` preamble.
pub fn sign_raw(msg: &[u8], key_pair: &KeyPair) -> Result<Signature, SigningError> {
    sign_raw_with_rng(msg, key_pair, &OsRandomSource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::sm2::verifying::{verify, verify_digest, verify_raw};
    use crate::crypto::sm2::domain::sm2p256v1;

    fn test_key_pair() -> KeyPair {
        KeyPair::construct(None, Some(BigInt::from(123_456_789))).unwrap()
    }

    #[test]
    fn test_sign_digest_round_trips_with_verify_digest() {
        let key_pair = test_key_pair();
        let e = BigInt::from(42);
        let signature = sign_digest(&e, &key_pair).unwrap();
        assert!(verify_digest(&e, &signature, &key_pair).unwrap());
    }

    #[test]
    fn test_sign_raw_round_trips_with_verify_raw() {
        let key_pair = test_key_pair();
        let msg = b"message digest";
        let signature = sign_raw(msg, &key_pair).unwrap();
        assert!(verify_raw(msg, &signature, &key_pair).unwrap());
    }

    #[test]
    fn test_sign_round_trips_with_verify() {
        let key_pair = test_key_pair();
        let msg = b"message digest";
        let signature = sign(msg, &key_pair).unwrap();
        assert!(verify(msg, &signature, &key_pair).unwrap());
    }

    #[test]
    fn test_sign_without_private_key_fails() {
        let params = sm2p256v1();
        let pub_point = params.curve.mul_point(&params.base_point, &BigInt::from(7));
        let key_pair = KeyPair::construct(Some(pub_point), None).unwrap();
        assert_eq!(
            sign(b"msg", &key_pair).unwrap_err(),
            SigningError::MissingPrivateKey
        );
    }

    #[test]
    fn test_flipped_signature_fails_to_verify() {
        let key_pair = test_key_pair();
        let msg = b"message digest";
        let mut signature = sign(msg, &key_pair).unwrap();
        signature.s = &signature.s + &BigInt::from(1);
        assert!(!verify(msg, &signature, &key_pair).unwrap());
    }

    #[test]
    fn test_flipped_message_fails_to_verify() {
        let key_pair = test_key_pair();
        let signature = sign(b"message digest", &key_pair).unwrap();
        assert!(!verify(b"message digesu", &signature, &key_pair).unwrap());
    }

    #[test]
    fn test_signature_fixed_bytes_round_trip() {
        let key_pair = test_key_pair();
        let signature = sign(b"message digest", &key_pair).unwrap();
        let bytes = signature.to_fixed_bytes();
        let decoded = Signature::from_fixed_bytes(&bytes);
        assert_eq!(decoded, signature);
    }

    /// Always returns the same 32 bytes, letting a test fix `k` without
    /// mocking the OS random path.
    struct ConstantRandomSource(Vec<u8>);

    impl RandomSource for ConstantRandomSource {
        fn next_bytes(
            &self,
            _len: u32,
        ) -> Result<Vec<u8>, crate::random::GetOsRandomBytesError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_sign_digest_with_rng_is_deterministic_given_a_fixed_nonce() {
        let key_pair = test_key_pair();
        let e = BigInt::from(99);

        let mut k_bytes = vec![0u8; 31];
        k_bytes.push(11);
        let rng = ConstantRandomSource(k_bytes);

        let first = sign_digest_with_rng(&e, &key_pair, &rng).unwrap();
        let second = sign_digest_with_rng(&e, &key_pair, &rng).unwrap();
        assert_eq!(first, second);
        assert!(verify_digest(&e, &first, &key_pair).unwrap());
    }
}
