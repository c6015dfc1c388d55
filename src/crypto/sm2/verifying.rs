// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SM2 signature verification: `verify`/`verifyRaw` hash the message (with
//! or without the `Z_A` preamble) and delegate to `verify_digest`, the
//! verification equation of §4.E.

use crate::bigint::Sign;
use crate::bigint::BigInt;
use crate::crypto::sm2::error::VerifyingError;
use crate::crypto::sm2::key::KeyPair;
use crate::crypto::sm2::signing::Signature;
use crate::crypto::sm2::za::DEFAULT_USER_ID;
use crate::crypto::sm3::sm3;
use crate::math::modular::modulo;

/// Verifies `signature` against the message-digest `e`, per §4.E.
///
/// A signature that simply fails to validate returns `Ok(false)`, never an
/// `Err` — only a missing public key is an error.
pub fn verify_digest(
    e: &BigInt,
    signature: &Signature,
    key_pair: &KeyPair,
) -> Result<bool, VerifyingError> {
    let params = key_pair.curve_params();
    let pub_point = key_pair.pub_point().ok_or(VerifyingError::MissingPublicKey)?;

    let n = &params.base_point_order;
    let one = BigInt::from(1);
    let n_minus_1 = n - &one;

    if signature.r < one || signature.r > n_minus_1 {
        return Ok(false);
    }
    if signature.s < one || signature.s > n_minus_1 {
        return Ok(false);
    }

    let t = modulo(&(&signature.r + &signature.s), n);
    if t.is_zero() {
        return Ok(false);
    }

    let sg = params.curve.mul_point(&params.base_point, &signature.s);
    let tp = params.curve.mul_point(pub_point, &t);
    let point = params.curve.add_points(&sg, &tp);

    let check = modulo(&(e + &point.x), n);
    Ok(check == signature.r)
}

/// Hashes `msg` with the `Z_A` preamble under `id`, then verifies the digest.
pub fn verify_with_id(
    msg: &[u8],
    signature: &Signature,
    id: &str,
    key_pair: &KeyPair,
) -> Result<bool, VerifyingError> {
    let z_a = key_pair.za(id).ok_or(VerifyingError::MissingPublicKey)?;
    let mut data = Vec::with_capacity(z_a.len() + msg.len());
    data.extend_from_slice(&z_a);
    data.extend_from_slice(msg);
    let e = BigInt::from_be_bytes(&sm3(&data), Sign::Positive);
    verify_digest(&e, signature, key_pair)
}

/// `verify(msg, r, s)`: hashes `msg` with the `Z_A` preamble under the
/// standard sample identifier, then verifies the digest.
pub fn verify(msg: &[u8], signature: &Signature, key_pair: &KeyPair) -> Result<bool, VerifyingError> {
    verify_with_id(msg, signature, DEFAULT_USER_ID, key_pair)
}

/// `verifyRaw(msg, r, s)`: hashes `msg` directly, without the `Z_A` preamble.
pub fn verify_raw(msg: &[u8], signature: &Signature, key_pair: &KeyPair) -> Result<bool, VerifyingError> {
    let e = BigInt::from_be_bytes(&sm3(msg), Sign::Positive);
    verify_digest(&e, signature, key_pair)
}
